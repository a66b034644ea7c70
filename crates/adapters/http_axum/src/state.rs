//! Shared application state for axum handlers.

use std::sync::Arc;

use reportdesk_app::ports::ReportRepository;
use reportdesk_app::services::report_service::ReportService;

/// Application state shared across all axum handlers.
///
/// Generic over the report repository to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<RR> {
    /// Criminal report CRUD service.
    pub report_service: Arc<ReportService<RR>>,
}

impl<RR> Clone for AppState<RR> {
    fn clone(&self) -> Self {
        Self {
            report_service: Arc::clone(&self.report_service),
        }
    }
}

impl<RR> AppState<RR>
where
    RR: ReportRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(report_service: ReportService<RR>) -> Self {
        Self::from_arc(Arc::new(report_service))
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(report_service: Arc<ReportService<RR>>) -> Self {
        Self { report_service }
    }
}
