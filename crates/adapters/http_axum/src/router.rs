//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use reportdesk_app::ports::ReportRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the report resource at `/reports` plus a `/health` liveness check.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<RR>(state: AppState<RR>) -> Router
where
    RR: ReportRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use reportdesk_app::services::report_service::ReportService;
    use reportdesk_domain::error::ReportDeskError;
    use reportdesk_domain::id::ReportId;
    use reportdesk_domain::report::CriminalReport;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    /// Repository stub that counts writes and never finds anything.
    #[derive(Default)]
    struct StubReportRepo {
        writes: Arc<AtomicUsize>,
    }

    impl ReportRepository for StubReportRepo {
        async fn create(&self, report: CriminalReport) -> Result<CriminalReport, ReportDeskError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(report.with_id(ReportId::new(1)))
        }
        async fn get_by_id(&self, _id: ReportId) -> Result<Option<CriminalReport>, ReportDeskError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<CriminalReport>, ReportDeskError> {
            Ok(vec![])
        }
        async fn update(&self, report: CriminalReport) -> Result<CriminalReport, ReportDeskError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(report)
        }
        async fn delete(&self, _id: ReportId) -> Result<(), ReportDeskError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct BrokenReportRepo;

    impl ReportRepository for BrokenReportRepo {
        async fn create(&self, _report: CriminalReport) -> Result<CriminalReport, ReportDeskError> {
            Err(ReportDeskError::Storage("FOREIGN KEY constraint failed".into()))
        }
        async fn get_by_id(&self, _id: ReportId) -> Result<Option<CriminalReport>, ReportDeskError> {
            Err(ReportDeskError::Storage("database is locked".into()))
        }
        async fn get_all(&self) -> Result<Vec<CriminalReport>, ReportDeskError> {
            Err(ReportDeskError::Storage("database is locked".into()))
        }
        async fn update(&self, _report: CriminalReport) -> Result<CriminalReport, ReportDeskError> {
            Err(ReportDeskError::Storage("database is locked".into()))
        }
        async fn delete(&self, _id: ReportId) -> Result<(), ReportDeskError> {
            Err(ReportDeskError::Storage("database is locked".into()))
        }
    }

    fn stub_app() -> (Router, Arc<AtomicUsize>) {
        let repo = StubReportRepo::default();
        let writes = Arc::clone(&repo.writes);
        (build(AppState::new(ReportService::new(repo))), writes)
    }

    fn broken_app() -> Router {
        build(AppState::new(ReportService::new(BrokenReportRepo)))
    }

    fn request(method: Method, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    const REPORT_BODY: &str = r#"{"id":9,"hero":{"id":1,"name":"Superman","universe":"DC","skill":"Flight"},"villain":{"id":2,"name":"Lex Luthor","universe":"DC"},"description":"Robbed a bank","incident":"2024-01-01"}"#;

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (app, _) = stub_app();
        let response = app.oneshot(request(Method::GET, "/health", "")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_empty_json_array_when_no_reports() {
        let (app, _) = stub_app();
        let response = app.oneshot(request(Method::GET, "/reports", "")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(body_text(response).await, "[]");
    }

    #[tokio::test]
    async fn should_return_bad_request_when_id_is_not_an_integer() {
        for method in [Method::GET, Method::DELETE] {
            let (app, writes) = stub_app();
            let response = app
                .oneshot(request(method, "/reports/abc", ""))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert!(body_text(response).await.contains("abc"));
            assert_eq!(writes.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn should_return_bad_request_when_put_id_is_not_an_integer() {
        let (app, writes) = stub_app();
        let response = app
            .oneshot(request(Method::PUT, "/reports/1.5", REPORT_BODY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_return_internal_error_when_report_missing() {
        let (app, _) = stub_app();
        let response = app
            .oneshot(request(Method::GET, "/reports/5", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "CriminalReport 5 not found");
    }

    #[tokio::test]
    async fn should_reject_malformed_json_without_writing() {
        for body in ["{not json", "", r#"{"hero":"Superman"}"#, "[1,2,3]"] {
            let (app, writes) = stub_app();
            let response = app
                .oneshot(request(Method::POST, "/reports", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(writes.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn should_create_report_without_content_type_header() {
        let (app, writes) = stub_app();
        let response = app
            .oneshot(request(Method::POST, "/reports", REPORT_BODY))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()["content-type"], "application/json");
        let created: CriminalReport = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(created.id.get(), 1);
        assert_eq!(created.description, "Robbed a bank");
        assert_eq!(writes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_create_report_when_fields_are_null() {
        let (app, writes) = stub_app();
        let body = r#"{"hero":{"id":1},"villain":{"id":2},"description":"d","incident":"i","id":null}"#;
        let response = app
            .oneshot(request(Method::POST, "/reports", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let created: CriminalReport = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(created.hero.id.get(), 1);
        assert_eq!(created.villain.id.get(), 2);
        assert_eq!(writes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_create_report_with_capitalised_keys() {
        let (app, writes) = stub_app();
        let body = r#"{"Hero":{"ID":1},"Villain":{"Id":2},"Description":"d","Incident":"i"}"#;
        let response = app
            .oneshot(request(Method::POST, "/reports", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let created: CriminalReport = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(created.hero.id.get(), 1);
        assert_eq!(created.villain.id.get(), 2);
        assert_eq!(created.description, "d");
        assert_eq!(writes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_ignore_data_after_the_first_json_value() {
        let (app, writes) = stub_app();
        let body = format!("{REPORT_BODY} trailing garbage");
        let response = app
            .oneshot(request(Method::POST, "/reports", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let created: CriminalReport = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(created.description, "Robbed a bank");
        assert_eq!(writes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_force_path_id_on_update() {
        let (app, _) = stub_app();
        let response = app
            .oneshot(request(Method::PUT, "/reports/3", REPORT_BODY))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let updated: CriminalReport = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(updated.id.get(), 3);
        assert_eq!(updated.villain.name, "Lex Luthor");
    }

    #[tokio::test]
    async fn should_return_no_content_on_delete() {
        let (app, writes) = stub_app();
        let response = app
            .oneshot(request(Method::DELETE, "/reports/3", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(body_text(response).await.is_empty());
        assert_eq!(writes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_return_internal_error_with_raw_message_when_store_fails() {
        let cases = [
            (Method::GET, "/reports", ""),
            (Method::GET, "/reports/1", ""),
            (Method::POST, "/reports", REPORT_BODY),
            (Method::PUT, "/reports/1", REPORT_BODY),
            (Method::DELETE, "/reports/1", ""),
        ];
        for (method, uri, body) in cases {
            let response = broken_app()
                .oneshot(request(method.clone(), uri, body))
                .await
                .unwrap();
            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "{method} {uri}"
            );
            assert!(body_text(response).await.starts_with("storage error: "));
        }
    }

    #[tokio::test]
    async fn should_reject_unsupported_method() {
        let (app, _) = stub_app();
        let response = app
            .oneshot(request(Method::PATCH, "/reports/1", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
