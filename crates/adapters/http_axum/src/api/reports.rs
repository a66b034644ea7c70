//! JSON REST handlers for criminal reports.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use reportdesk_app::ports::ReportRepository;
use reportdesk_domain::report::CriminalReport;

use super::parse_report_id;
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<CriminalReport>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<CriminalReport>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CriminalReport>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /reports`
pub async fn list<RR>(State(state): State<AppState<RR>>) -> Result<ListResponse, ApiError>
where
    RR: ReportRepository + Send + Sync + 'static,
{
    let reports = state.report_service.list_reports().await?;
    Ok(ListResponse::Ok(Json(reports)))
}

/// `GET /reports/:id`
pub async fn get<RR>(
    State(state): State<AppState<RR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    RR: ReportRepository + Send + Sync + 'static,
{
    let report_id = parse_report_id(&id)?;
    let report = state.report_service.get_report(report_id).await?;
    Ok(GetResponse::Ok(Json(report)))
}

/// `POST /reports`
pub async fn create<RR>(
    State(state): State<AppState<RR>>,
    JsonBody(report): JsonBody<CriminalReport>,
) -> Result<CreateResponse, ApiError>
where
    RR: ReportRepository + Send + Sync + 'static,
{
    let created = state.report_service.create_report(report).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /reports/:id` — the path id always wins over any id in the body.
pub async fn update<RR>(
    State(state): State<AppState<RR>>,
    Path(id): Path<String>,
    JsonBody(report): JsonBody<CriminalReport>,
) -> Result<GetResponse, ApiError>
where
    RR: ReportRepository + Send + Sync + 'static,
{
    let report_id = parse_report_id(&id)?;
    let updated = state
        .report_service
        .update_report(report_id, report)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /reports/:id`
pub async fn delete<RR>(
    State(state): State<AppState<RR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    RR: ReportRepository + Send + Sync + 'static,
{
    let report_id = parse_report_id(&id)?;
    state.report_service.delete_report(report_id).await?;
    Ok(DeleteResponse::NoContent)
}
