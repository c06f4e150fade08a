use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::BearerAuth,
    error::{ApiError, ApiResult},
    state::AppState,
    users::{
        dto::{LoginRequest, LoginResponse},
        extractors::LenientJson,
        repo_types::{NewUser, User},
    },
};

const GET_NOT_FOUND: &str = "The given user is not found";
const DELETE_NOT_FOUND: &str = "The given user not found";

pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/login", post(login))
        .route("/:id", get(get_user).delete(delete_user))
}

/// Reads the leading integer of a path segment, so `"1.5"` and `"1abc"` both
/// name record 1. No leading digits (or an out-of-range value) names no record.
fn parse_id(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse::<i64>().ok()
}

#[instrument(skip_all)]
pub async fn list_users(
    State(state): State<AppState>,
    _auth: BearerAuth,
) -> ApiResult<Json<Vec<User>>> {
    let users = state.users.list()?;
    Ok(Json(users))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    LenientJson(payload): LenientJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let (Some(username), Some(password)) = (payload.username, payload.password) else {
        warn!("login without username or password");
        return Err(ApiError::InvalidCredentials);
    };

    let Some(user) = state.users.find_by_credentials(&username, &password)? else {
        warn!(%username, "login rejected");
        return Err(ApiError::InvalidCredentials);
    };

    info!(user_id = user.id, %username, "user logged in");
    Ok(Json(LoginResponse {
        user,
        token: state.config.auth.token.clone(),
    }))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let found = match parse_id(&id) {
        Some(id) => state.users.find_by_id(id)?,
        None => None,
    };
    match found {
        Some(user) => Ok(Json(user)),
        None => {
            warn!(%id, "user not found");
            Err(ApiError::NotFound(GET_NOT_FOUND.into()))
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    LenientJson(payload): LenientJson<NewUser>,
) -> ApiResult<Json<User>> {
    let user = state.users.create(payload)?;
    info!(user_id = user.id, username = ?user.username, "user created");
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let removed = match parse_id(&id) {
        Some(id) => state.users.delete(id)?,
        None => None,
    };
    match removed {
        Some(user) => {
            info!(user_id = user.id, "user deleted");
            Ok(Json(user))
        }
        None => {
            warn!(%id, "delete of unknown user");
            Err(ApiError::NotFound(DELETE_NOT_FOUND.into()))
        }
    }
}
