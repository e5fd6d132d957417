//! Console integration tests
//!
//! Batches, single invocations and polling driven through the HTTP backend,
//! observed on the event bus.

#[cfg(test)]
mod tests {
    use crate::common::MockAdminApi;
    use crate::common::fixtures;
    use account_console::{Account, ConsoleError, ConsoleEvent, NoticeLevel, OperationKind};
    use std::sync::Arc;
    use tokio::sync::broadcast::Receiver;
    use tokio_test::{assert_err, assert_ok};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    fn drain(rx: &mut Receiver<ConsoleEvent>) -> Vec<ConsoleEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn notices(events: &[ConsoleEvent]) -> Vec<(NoticeLevel, String)> {
        events
            .iter()
            .filter_map(|e| match e {
                ConsoleEvent::Notice { level, text } => Some((*level, text.clone())),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_validate_all_mixed_outcomes() {
        let api = MockAdminApi::start().await;
        api.snapshot(&fixtures::snapshot(vec![
            Account::with_email("a@x.com"),
            Account::with_mobile("+861"),
            Account::with_email("b@x.com"),
        ]))
        .await;
        api.validate("a@x.com", 200, fixtures::valid("login ok")).await;
        api.validate("+861", 200, fixtures::invalid("wrong password")).await;
        Mock::given(method("POST"))
            .and(path("/admin/accounts/validate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("garbage"))
            .mount(&api.server)
            .await;

        let (console, events) = api.console();
        let mut rx = events.subscribe();

        let summary = assert_ok!(console.validate_all().await);

        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.total, 3);

        let events = drain(&mut rx);
        let progress: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                ConsoleEvent::Progress(p) => Some(p.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            progress.iter().map(|p| p.current).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(progress.iter().all(|p| p.results.len() == p.current));

        let outcomes: Vec<_> = progress[2]
            .results
            .iter()
            .map(|r| (r.identifier.as_str(), r.success))
            .collect();
        assert_eq!(
            outcomes,
            vec![("a@x.com", true), ("+861", false), ("b@x.com", false)]
        );
        assert_eq!(progress[2].results[1].message, "wrong password");

        assert_eq!(
            notices(&events),
            vec![(
                NoticeLevel::Success,
                "validation finished: 1/3 accounts valid".to_string()
            )]
        );
        assert!(matches!(events.last(), Some(ConsoleEvent::RefreshNeeded)));
        assert_eq!(
            api.request_paths().await,
            vec![
                "/admin/config",
                "/admin/accounts/validate",
                "/admin/accounts/validate",
                "/admin/accounts/validate",
            ]
        );
    }

    #[tokio::test]
    async fn test_test_all_keeps_latency_of_successes_only() {
        let api = MockAdminApi::start().await;
        api.snapshot(&fixtures::snapshot(vec![
            Account::with_email("a@x.com"),
            Account::with_email("b@x.com"),
        ]))
        .await;
        api.test("a@x.com", 200, fixtures::tested(true, Some(640.0))).await;
        api.test("b@x.com", 200, fixtures::tested(false, Some(15.0))).await;

        let (console, events) = api.console();
        let mut rx = events.subscribe();

        let summary = assert_ok!(console.test_all().await);
        assert_eq!((summary.succeeded, summary.total), (1, 2));

        let progress = assert_ok!(console.batch_progress().ok_or("no progress"));
        assert_eq!(progress.results[0].response_time_ms, Some(640.0));
        assert_eq!(progress.results[1].response_time_ms, None);

        let notices = notices(&drain(&mut rx));
        assert_eq!(notices[0].1, "API test finished: 1/2 accounts usable");
    }

    #[tokio::test]
    async fn test_empty_pool_runs_nothing() {
        let api = MockAdminApi::start().await;
        api.snapshot(&fixtures::snapshot(Vec::new())).await;
        let (console, events) = api.console();
        let mut rx = events.subscribe();

        let summary = assert_ok!(console.validate_all().await);

        assert_eq!((summary.succeeded, summary.total), (0, 0));
        assert!(drain(&mut rx).is_empty());
        assert!(console.batch_progress().is_none());
    }

    #[tokio::test]
    async fn test_single_test_notice() {
        let api = MockAdminApi::start().await;
        api.test("+861", 200, fixtures::tested(true, Some(812.0))).await;
        let (console, events) = api.console();
        let mut rx = events.subscribe();

        let result = assert_ok!(console.test_account("+861").await);

        assert!(result.success);
        assert!(!console.is_invoking(OperationKind::Test, "+861"));
        let events = drain(&mut rx);
        assert_eq!(
            notices(&events),
            vec![(
                NoticeLevel::Success,
                "+861: API test succeeded (812ms)".to_string()
            )]
        );
        assert!(matches!(events.last(), Some(ConsoleEvent::RefreshNeeded)));
    }

    #[tokio::test]
    async fn test_rejected_validation_notice() {
        let api = MockAdminApi::start().await;
        api.validate("a@x.com", 200, fixtures::invalid("account locked")).await;
        let (console, events) = api.console();
        let mut rx = events.subscribe();

        let result = assert_ok!(console.validate_account("a@x.com").await);

        assert!(!result.success);
        assert_eq!(
            notices(&drain(&mut rx)),
            vec![(NoticeLevel::Error, "a@x.com: account locked".to_string())]
        );
    }

    #[tokio::test]
    async fn test_poll_failure_keeps_previous_status() {
        let api = MockAdminApi::start().await;
        api.queue(200, fixtures::queue(2, 1)).await;
        let (console, _events) = api.console();

        let first = console.refresh_queue_status().await.unwrap();
        assert_eq!(first.available, 2);

        api.server.reset().await;
        api.queue(500, serde_json::json!({ "detail": "db down" })).await;

        let second = console.refresh_queue_status().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &console.queue_status().unwrap()));
    }

    #[tokio::test]
    async fn test_admin_failure_notice() {
        let api = MockAdminApi::start().await;
        Mock::given(method("DELETE"))
            .and(path("/admin/keys/sk-gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&api.server)
            .await;
        let (console, events) = api.console();
        let mut rx = events.subscribe();

        let err = assert_err!(console.delete_key("sk-gone").await);

        assert!(matches!(err, ConsoleError::NotFound(_)));
        let notices = notices(&drain(&mut rx));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].0, NoticeLevel::Error);
        assert!(notices[0].1.starts_with("failed to remove API key"));
    }
}
