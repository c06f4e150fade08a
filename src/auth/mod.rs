//! Placeholder bearer-token gate. The token is a fixed string from config,
//! not a signed credential.

pub(crate) mod extractors;
pub mod services;

pub use extractors::BearerAuth;
