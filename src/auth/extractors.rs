use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use tracing::warn;

use super::services::has_valid_bearer_token;
use crate::{error::ApiError, state::AppState};

/// Guards a handler behind the static bearer token.
/// Always passes when `auth.require_bearer` is off.
pub struct BearerAuth;

#[async_trait]
impl FromRequestParts<AppState> for BearerAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = &state.config.auth;
        if !auth.require_bearer || has_valid_bearer_token(&parts.headers, &auth.token) {
            return Ok(BearerAuth);
        }

        warn!(path = %parts.uri.path(), "missing or invalid bearer token");
        Err(ApiError::Unauthorized)
    }
}
