//! JSON body extractor with uniform error responses.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Json, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;

/// JSON extractor whose rejection is an [`AppError`].
///
/// A request without a JSON `Content-Type`, or with an empty body, is read as
/// an empty object and yields `T::default()`. Malformed JSON and wrong field
/// types are rejected with `{ "message": ... }` instead of plain text.
///
/// # Example
/// ```ignore
/// use axum_helpers::AppJson;
///
/// async fn create(AppJson(payload): AppJson<CreateTask>) -> String {
///     format!("{:?}", payload)
/// }
/// ```
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(AppJson(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        if bytes.is_empty() {
            return Ok(AppJson(T::default()));
        }

        let Json(data) = Json::<T>::from_bytes(&bytes)?;
        Ok(AppJson(data))
    }
}

/// `application/json` or an `application/*+json` type, parameters ignored
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
