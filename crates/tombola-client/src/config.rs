//! Base URL configuration.

/// Environment variable overriding the API base URL.
pub const API_BASE_ENV: &str = "TOMBOLA_API_BASE";

/// Development default, matching the backend's local address.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Resolve the API base URL.
///
/// Resolution order:
/// 1. `TOMBOLA_API_BASE` environment variable
/// 2. Default: `http://localhost:8000/api`
pub fn api_base_from_env() -> String {
    match std::env::var(API_BASE_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => DEFAULT_API_BASE.to_string(),
    }
}
