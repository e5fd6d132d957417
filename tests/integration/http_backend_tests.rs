//! HTTP backend integration tests
//!
//! Request shapes, headers and error mapping against a mock admin API.

#[cfg(test)]
mod tests {
    use crate::common::MockAdminApi;
    use crate::common::fixtures::{self, ADMIN_TOKEN};
    use account_console::config::BackendConfig;
    use account_console::core::OperationClient;
    use account_console::{
        Account, AccountBackend, ConsoleError, HttpBackend, NewAccount, OperationKind,
    };
    use serde_json::json;
    use std::sync::Arc;
    use tokio_test::{assert_err, assert_ok};
    use wiremock::matchers::{body_json, header, method, path, path_regex};
    use wiremock::{Mock, ResponseTemplate};

    // ==================== Account operations ====================

    #[tokio::test]
    async fn test_validate_posts_identifier() {
        let api = MockAdminApi::start().await;
        api.validate("a@x.com", 200, fixtures::valid("login ok")).await;

        let response = assert_ok!(api.backend().validate_account("a@x.com").await);

        assert!(response.valid);
        assert_eq!(response.message, "login ok");
    }

    #[tokio::test]
    async fn test_test_reports_response_time() {
        let api = MockAdminApi::start().await;
        api.test("+861", 200, fixtures::tested(true, Some(812.5))).await;

        let response = assert_ok!(api.backend().test_account("+861").await);

        assert!(response.success);
        assert_eq!(response.response_time, Some(812.5));
    }

    #[tokio::test]
    async fn test_malformed_body_becomes_failed_result() {
        let api = MockAdminApi::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/accounts/validate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&api.server)
            .await;

        let err = assert_err!(api.backend().validate_account("a@x.com").await);
        assert!(matches!(err, ConsoleError::Parsing(_)));

        let client = OperationClient::new(Arc::new(api.backend()));
        let result = client.invoke(OperationKind::Validate, "a@x.com").await;
        assert!(!result.success);
        assert_eq!(result.identifier, "a@x.com");
        assert!(result.response_time_ms.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let backend = HttpBackend::new(&BackendConfig {
            timeout: 2,
            ..BackendConfig::with_base_url("http://127.0.0.1:1")
        })
        .unwrap();

        let err = assert_err!(backend.queue_status().await);
        assert!(err.is_transport(), "unexpected error: {:?}", err);
    }

    // ==================== Administration ====================

    #[tokio::test]
    async fn test_snapshot_sends_bearer_token() {
        let api = MockAdminApi::start().await;
        let expected = fixtures::snapshot(vec![
            Account::with_email("a@x.com"),
            Account::with_mobile("+861"),
        ]);
        api.snapshot(&expected).await;

        let snapshot = assert_ok!(api.backend().snapshot().await);

        assert_eq!(snapshot, expected);
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let api = MockAdminApi::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/config"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "detail": "invalid token" })),
            )
            .mount(&api.server)
            .await;
        let backend = HttpBackend::new(&BackendConfig::with_base_url(api.server.uri())).unwrap();

        let err = assert_err!(backend.snapshot().await);

        assert!(matches!(err, ConsoleError::Unauthorized(ref m) if m == "invalid token"));
    }

    #[tokio::test]
    async fn test_add_key_posts_body() {
        let api = MockAdminApi::start().await;
        let bearer = format!("Bearer {}", ADMIN_TOKEN);
        Mock::given(method("POST"))
            .and(path("/admin/keys"))
            .and(header("authorization", bearer.as_str()))
            .and(body_json(json!({ "key": "sk-new" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&api.server)
            .await;

        assert_ok!(api.backend().add_key("sk-new").await);
    }

    #[tokio::test]
    async fn test_delete_key_encodes_segment() {
        let api = MockAdminApi::start().await;
        Mock::given(method("DELETE"))
            .and(path_regex("^/admin/keys/.+$"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&api.server)
            .await;

        assert_ok!(api.backend().delete_key("sk/a b").await);

        assert_eq!(api.request_paths().await, vec!["/admin/keys/sk%2Fa%20b"]);
    }

    #[tokio::test]
    async fn test_delete_unknown_account_is_not_found() {
        let api = MockAdminApi::start().await;
        Mock::given(method("DELETE"))
            .and(path("/admin/accounts/ghost@x.com"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "detail": "account not found" })),
            )
            .mount(&api.server)
            .await;

        let err = assert_err!(api.backend().delete_account("ghost@x.com").await);

        assert!(matches!(err, ConsoleError::NotFound(ref m) if m == "account not found"));
    }

    #[tokio::test]
    async fn test_add_account_rejection_carries_message() {
        let api = MockAdminApi::start().await;
        Mock::given(method("POST"))
            .and(path("/admin/accounts"))
            .and(body_json(json!({
                "email": "a@x.com",
                "mobile": "",
                "password": "secret",
            })))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "message": "account exists" })),
            )
            .mount(&api.server)
            .await;

        let account = NewAccount {
            email: "a@x.com".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };
        let err = assert_err!(api.backend().add_account(&account).await);

        match err {
            ConsoleError::Remote { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "account exists");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_plain_text_error_body() {
        let api = MockAdminApi::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/queue/status"))
            .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
            .mount(&api.server)
            .await;

        let err = assert_err!(api.backend().queue_status().await);

        assert_eq!(err.to_string(), "Backend returned HTTP 502: upstream down");
    }

    #[tokio::test]
    async fn test_base_url_path_prefix_is_kept() {
        let api = MockAdminApi::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/queue/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::queue(3, 1)))
            .mount(&api.server)
            .await;
        let backend = HttpBackend::new(&BackendConfig::with_base_url(format!(
            "{}/api/",
            api.server.uri()
        )))
        .unwrap();

        let status = assert_ok!(backend.queue_status().await);

        assert_eq!(status.total, 4);
        assert!(status.available_accounts.is_empty());
    }
}
