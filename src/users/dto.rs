use serde::{Deserialize, Serialize};

use crate::users::repo_types::{free_text, User};

/// Request body for login. Missing fields never match a record.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "free_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "free_text")]
    pub password: Option<String>,
}

/// The matched record with the placeholder token merged in.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: User,
    pub token: String,
}
