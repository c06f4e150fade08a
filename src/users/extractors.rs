use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;

/// JSON body read the forgiving way: a request that is not JSON, has no body,
/// or whose top-level value is not an object yields `T::default()`.
/// Only malformed JSON under a JSON content type is rejected.
pub struct LenientJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json_content = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_json_content_type);
        if !json_content {
            debug!("non-json body ignored");
            return Ok(LenientJson(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(LenientJson(T::default()));
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON: {e}")))?;
        if !value.is_object() {
            return Ok(LenientJson(T::default()));
        }

        let parsed = serde_json::from_value(value)
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON: {e}")))?;
        Ok(LenientJson(parsed))
    }
}

fn is_json_content_type(value: &str) -> bool {
    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
