//! Request extractors.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use reportdesk_domain::error::ValidationError;

use crate::error::ApiError;

/// JSON request body that rejects with a `400` on any decoding failure.
///
/// Unlike [`axum::Json`], no `Content-Type` header is required, shape
/// mismatches are not split out into `422`, and only the first JSON value in
/// the body is read; anything after it is ignored.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| ValidationError::MalformedBody(err.body_text()))?;

        match serde_json::Deserializer::from_slice(&bytes).into_iter::<T>().next() {
            Some(Ok(value)) => Ok(Self(value)),
            Some(Err(err)) => Err(ValidationError::MalformedBody(err.to_string()).into()),
            None => Err(ValidationError::MalformedBody("EOF".to_string()).into()),
        }
    }
}
