//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use account_console::config::{Config, LogFormat};
    use account_console::{AccountConsole, ConsoleError, NullSink};
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;
    use tokio_test::{assert_err, assert_ok};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_partial_file_fills_defaults() {
        let file = write_config(
            r#"
backend:
  base_url: "https://pool.example.com/api"
logging:
  format: json
"#,
        );

        let config = assert_ok!(Config::load(Some(file.path())).await);

        assert_eq!(config.backend().base_url, "https://pool.example.com/api");
        assert_eq!(config.backend().timeout, 30);
        assert_eq!(config.poller().interval, 5);
        assert_eq!(config.logging().format, LogFormat::Json);
        assert!(config.backend().user_agent.starts_with("account-console/"));
    }

    #[tokio::test]
    async fn test_load_rejects_bad_values_with_context() {
        let file = write_config("backend:\n  timeout: 0\n");

        let err = assert_err!(Config::load(Some(file.path())).await);

        match err {
            ConsoleError::Config(message) => assert!(message.starts_with("Backend config error")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_yaml() {
        let file = write_config("backend: [unclosed\n");
        let err = assert_err!(Config::load(Some(file.path())).await);
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[tokio::test]
    async fn test_console_connects_from_loaded_config() {
        let file = write_config("backend:\n  base_url: \"http://127.0.0.1:5001\"\n  admin_token: \"t\"\n");
        let config = assert_ok!(Config::from_file(file.path()).await);

        let console = assert_ok!(AccountConsole::connect(config.backend(), Arc::new(NullSink)));

        assert!(console.queue_status().is_none());
        assert!(console.active_batch().is_none());
    }
}
