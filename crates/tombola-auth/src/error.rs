//! Token decoding error types.

use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Why a stored token failed to decode.
///
/// A corrupt token is an expected state, not a fault: the guard maps every
/// variant to the same clear-and-redirect outcome and never propagates it.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Token is not three dot-separated segments.
    #[error("token has {0} segments, expected 3")]
    SegmentCount(usize),

    /// Payload segment is not valid base64url.
    #[error("payload segment is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Payload bytes are not a JSON claims object.
    #[error("payload is not a JSON claims object: {0}")]
    Json(#[from] serde_json::Error),
}
