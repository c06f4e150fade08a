use axum::http::{header::AUTHORIZATION, HeaderMap};

/// True iff `Authorization` carries `Bearer <expected>`.
/// The scheme is compared case-insensitively, the token exactly.
pub fn has_valid_bearer_token(headers: &HeaderMap, expected: &str) -> bool {
    let Some(value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let Some((scheme, token)) = value.trim().split_once(' ') else {
        return false;
    };
    scheme.eq_ignore_ascii_case("bearer") && token.trim() == expected
}
