//! account-console - operator CLI for the account pool backend

#![allow(missing_docs)]

use account_console::config::Config;
use account_console::utils::format_duration;
use account_console::utils::logging::{init_logging, mask_secret};
use account_console::{
    AccountConsole, BatchSummary, ConsoleEvent, EventBus, NewAccount, NoticeLevel, OperationKind,
    OperationResult, QueueStatus,
};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::RecvError;

#[derive(Debug, Parser)]
#[command(name = "account-console", version, about)]
struct Cli {
    /// YAML configuration file; defaults and CONSOLE_* variables apply without one
    #[arg(short, long, env = "CONSOLE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Manage pool accounts
    #[command(subcommand)]
    Accounts(AccountsCommand),
    /// Manage API keys
    #[command(subcommand)]
    Keys(KeysCommand),
    /// Validate one account
    Validate { identifier: String },
    /// Send a test request through one account
    Test { identifier: String },
    /// Validate every registered account
    ValidateAll,
    /// Test every registered account
    TestAll,
    /// Show pool utilization
    Queue {
        /// Keep polling until interrupted
        #[arg(short, long)]
        watch: bool,
    },
}

#[derive(Debug, Subcommand)]
enum AccountsCommand {
    List,
    Add(AddAccountArgs),
    Remove { identifier: String },
}

#[derive(Debug, Args)]
struct AddAccountArgs {
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    mobile: String,
    #[arg(long, env = "CONSOLE_ACCOUNT_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Debug, Subcommand)]
enum KeysCommand {
    List,
    Add { key: String },
    Remove { key: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())
        .await
        .context("failed to load configuration")?;
    init_logging(config.logging())?;

    let events = Arc::new(EventBus::default());
    let printer = tokio::spawn(print_events(events.subscribe()));
    let console = AccountConsole::connect(config.backend(), events.clone())?;

    let outcome = execute(&console, &config, cli.command).await;

    drop(console);
    drop(events);
    let _ = printer.await;
    outcome
}

async fn execute(console: &AccountConsole, config: &Config, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Accounts(AccountsCommand::List) => {
            let snapshot = console.snapshot().await?;
            for account in &snapshot.accounts {
                let token = if account.has_token { "token" } else { "-" };
                println!(
                    "{:<32} {:<16} {}",
                    account.email.as_deref().unwrap_or("-"),
                    account.mobile.as_deref().unwrap_or("-"),
                    token
                );
            }
            println!("{} accounts", snapshot.accounts.len());
        }
        Command::Accounts(AccountsCommand::Add(args)) => {
            let account = NewAccount {
                email: args.email,
                mobile: args.mobile,
                password: args.password,
            };
            console.add_account(&account).await?;
        }
        Command::Accounts(AccountsCommand::Remove { identifier }) => {
            console.delete_account(&identifier).await?;
        }
        Command::Keys(KeysCommand::List) => {
            let snapshot = console.snapshot().await?;
            for key in &snapshot.keys {
                println!("{}", mask_secret(key));
            }
            println!("{} keys", snapshot.keys.len());
        }
        Command::Keys(KeysCommand::Add { key }) => console.add_key(&key).await?,
        Command::Keys(KeysCommand::Remove { key }) => console.delete_key(&key).await?,
        Command::Validate { identifier } => {
            let result = console.validate_account(&identifier).await?;
            ensure_succeeded(OperationKind::Validate, &result)?;
        }
        Command::Test { identifier } => {
            let result = console.test_account(&identifier).await?;
            ensure_succeeded(OperationKind::Test, &result)?;
        }
        Command::ValidateAll => report(console.validate_all().await?),
        Command::TestAll => report(console.test_all().await?),
        Command::Queue { watch: false } => {
            if console.refresh_queue_status().await.is_none() {
                anyhow::bail!("queue status unavailable");
            }
        }
        Command::Queue { watch: true } => {
            if !config.poller().enabled {
                anyhow::bail!("status polling is disabled in the configuration");
            }
            let handle = console.start_polling(config.poller().interval_duration());
            tokio::signal::ctrl_c()
                .await
                .context("failed to listen for Ctrl-C")?;
            handle.stop();
        }
    }
    Ok(())
}

/// The notice already carries the message; only the exit status is left
fn ensure_succeeded(kind: OperationKind, result: &OperationResult) -> anyhow::Result<()> {
    if result.success {
        Ok(())
    } else {
        anyhow::bail!("{} of {} failed", kind, result.identifier)
    }
}

fn report(summary: BatchSummary) {
    if summary.total == 0 {
        println!("no accounts registered");
    }
}

/// Render bus events until every sender is gone
async fn print_events(mut rx: Receiver<ConsoleEvent>) {
    loop {
        match rx.recv().await {
            Ok(event) => print_event(&event),
            Err(RecvError::Lagged(_)) => continue,
            Err(RecvError::Closed) => break,
        }
    }
}

fn print_event(event: &ConsoleEvent) {
    match event {
        ConsoleEvent::BatchStarted { kind, total } => {
            let verb = match kind {
                OperationKind::Validate => "Validating",
                OperationKind::Test => "Testing",
            };
            println!("{} {} accounts", verb, total);
        }
        ConsoleEvent::Progress(progress) => {
            if let Some(result) = progress.results.last() {
                let mark = if result.success { "✓" } else { "✗" };
                let latency = result
                    .response_time_ms
                    .map(|ms| format!(" ({})", format_duration(ms)))
                    .unwrap_or_default();
                println!(
                    "[{}/{}] {} {}{}",
                    progress.current, progress.total, mark, result.identifier, latency
                );
            }
        }
        ConsoleEvent::QueueStatusUpdated(status) => print_queue(status),
        ConsoleEvent::Notice { level, text } => match level {
            NoticeLevel::Success => println!("{}", text),
            NoticeLevel::Warning | NoticeLevel::Error => eprintln!("{}", text),
        },
        ConsoleEvent::BatchCompleted(_)
        | ConsoleEvent::InvocationCompleted { .. }
        | ConsoleEvent::RefreshNeeded => {}
    }
}

fn print_queue(status: &QueueStatus) {
    println!(
        "available {} / in use {} / total {}",
        status.available, status.in_use, status.total
    );
}
