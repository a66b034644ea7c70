//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod reports;

use std::str::FromStr;

use axum::Router;
use axum::routing::get;

use reportdesk_app::ports::ReportRepository;
use reportdesk_domain::error::ValidationError;
use reportdesk_domain::id::ReportId;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the report resource sub-router.
pub fn routes<RR>() -> Router<AppState<RR>>
where
    RR: ReportRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/reports",
            get(reports::list::<RR>).post(reports::create::<RR>),
        )
        .route(
            "/reports/{id}",
            get(reports::get::<RR>)
                .put(reports::update::<RR>)
                .delete(reports::delete::<RR>),
        )
}

/// Parse a `{id}` path segment into a [`ReportId`].
fn parse_report_id(raw: &str) -> Result<ReportId, ApiError> {
    ReportId::from_str(raw).map_err(|source| {
        ValidationError::InvalidId {
            value: raw.to_string(),
            source,
        }
        .into()
    })
}
