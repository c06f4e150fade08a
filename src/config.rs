use anyhow::{bail, Context};
use serde::Deserialize;

pub const DEFAULT_AUTH_TOKEN: &str = "fake-jwt-token";

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Static placeholder token handed out by login and expected by the list gate.
    pub token: String,
    pub require_bearer: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub base_path: String,
    pub auth: AuthConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 7000,
            base_path: "/api/users".into(),
            auth: AuthConfig {
                token: DEFAULT_AUTH_TOKEN.into(),
                require_bearer: true,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match std::env::var("APP_PORT").or_else(|_| std::env::var("PORT")) {
            Ok(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("APP_PORT/PORT must be a port number, got {v:?}"))?,
            Err(_) => defaults.port,
        };

        let base_path = match std::env::var("USERS_BASE_PATH") {
            Ok(v) => normalize_base_path(&v).context("USERS_BASE_PATH")?,
            Err(_) => defaults.base_path,
        };

        let require_bearer = match std::env::var("AUTH_REQUIRE_BEARER") {
            Ok(v) => parse_flag(&v).context("AUTH_REQUIRE_BEARER")?,
            Err(_) => defaults.auth.require_bearer,
        };

        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or(defaults.host),
            port,
            base_path,
            auth: AuthConfig {
                token: std::env::var("AUTH_TOKEN").unwrap_or(defaults.auth.token),
                require_bearer,
            },
        })
    }
}

/// Trims a trailing slash; axum cannot nest a router at "/" so the root is rejected.
fn normalize_base_path(raw: &str) -> anyhow::Result<String> {
    let path = raw.trim().trim_end_matches('/');
    if !raw.trim().starts_with('/') {
        bail!("base path must start with '/', got {raw:?}");
    }
    if path.is_empty() {
        bail!("base path must not be the root");
    }
    Ok(path.to_string())
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}
