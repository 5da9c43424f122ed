use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejection uses the service's `{ "message": ... }`
/// error shape instead of axum's plain-text body.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(AppError::BadRequest(format!(
                "Invalid JSON: {}",
                rejection.body_text()
            ))),
        }
    }
}

/// Parse a `{id}` path segment.
///
/// Ids are 32-bit integers in both schemas. Anything else cannot match a
/// row, so it is reported with the resource's not-found message.
pub fn parse_id(raw: &str, not_found: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::NotFound(not_found.to_string()))
}
