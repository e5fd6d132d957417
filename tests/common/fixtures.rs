//! Test fixtures

use account_console::{Account, ConsoleSnapshot};
use serde_json::{Value, json};

pub const ADMIN_TOKEN: &str = "admin-token-for-tests";

pub fn snapshot(accounts: Vec<Account>) -> ConsoleSnapshot {
    ConsoleSnapshot {
        keys: vec!["sk-abcdefghijklmnopqrstuvwxyz".to_string()],
        accounts,
    }
}

pub fn valid(message: &str) -> Value {
    json!({ "valid": true, "message": message })
}

pub fn invalid(message: &str) -> Value {
    json!({ "valid": false, "message": message })
}

pub fn tested(success: bool, response_time: Option<f64>) -> Value {
    json!({
        "success": success,
        "message": if success { "API test succeeded" } else { "API test failed" },
        "response_time": response_time,
    })
}

pub fn queue(available: u64, in_use: u64) -> Value {
    json!({
        "available": available,
        "in_use": in_use,
        "total": available + in_use,
        "available_accounts": [],
        "in_use_accounts": [],
    })
}
