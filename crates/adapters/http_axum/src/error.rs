//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use reportdesk_domain::error::{ReportDeskError, ValidationError};

/// Maps [`ReportDeskError`] to an HTTP response with appropriate status code.
///
/// Only two classes exist: unusable client input is a `400 Bad Request`,
/// anything else (including a missing report) is a `500 Internal Server
/// Error`. The body is the plain-text error message.
#[derive(Debug)]
pub struct ApiError(ReportDeskError);

impl From<ReportDeskError> for ApiError {
    fn from(err: ReportDeskError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl ApiError {
    /// Status code this error is rendered with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ReportDeskError::Validation(_) => StatusCode::BAD_REQUEST,
            ReportDeskError::NotFound(_) | ReportDeskError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "rejected request");
        }

        (status, self.0.to_string()).into_response()
    }
}
