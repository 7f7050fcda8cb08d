//! Local JWT payload inspection.
//!
//! Only the `exp` claim is consulted, and only to decide whether a stored
//! token is still worth presenting. Signatures are never verified here; the
//! server remains the authority on whether a token is accepted.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::error::{DecodeError, Result};

/// Claims carried in a token payload.
///
/// Unknown claims are ignored. `exp` is seconds since the Unix epoch;
/// tokens without one never expire locally.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPayload {
    /// Expiry time, seconds since epoch.
    #[serde(default)]
    pub exp: Option<u64>,
}

impl TokenPayload {
    /// Whether the token has expired as of `now` (seconds since epoch).
    ///
    /// The boundary is inclusive: a token whose `exp` equals the current
    /// second is already expired.
    pub fn is_expired_at(&self, now: u64) -> bool {
        matches!(self.exp, Some(exp) if exp <= now)
    }
}

/// Decode the payload segment of a JWT without verifying its signature.
///
/// Splits on `.`, base64url-decodes the middle segment and parses it as
/// JSON. Any failure along the way is a [`DecodeError`].
pub fn decode_payload(token: &str) -> Result<TokenPayload> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::SegmentCount(segments.len()));
    }

    let bytes = URL_SAFE_NO_PAD.decode(segments[1])?;
    let payload = serde_json::from_slice(&bytes)?;
    Ok(payload)
}
