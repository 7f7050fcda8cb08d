//! Request and response types for the contest API.
//!
//! These types mirror the backend's serializer contract.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Contestants
// ─────────────────────────────────────────────────────────────────────────────

/// Request to register a new contestant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterContestantRequest {
    /// Given name(s).
    pub first_name: String,
    /// Paternal surname.
    pub last_name: String,
    /// Maternal surname (optional in the registration form).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_last_name: Option<String>,
    /// Contact email; must be unique per contest.
    pub email: String,
    /// Phone in E.164 international format, e.g. `+56912345678`.
    pub phone: String,
}

/// Response to a successful registration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterContestantResponse {
    /// Human-readable confirmation, prompting an email check.
    pub message: String,
    /// ID of the newly created contestant.
    pub contestant_id: i64,
}

/// A registered contestant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contestant {
    /// Contestant ID.
    pub id: i64,
    /// Given name(s).
    pub first_name: String,
    /// Paternal surname.
    pub last_name: String,
    /// Maternal surname; the backend sends an empty string when unset.
    #[serde(default)]
    pub second_last_name: String,
    /// Full name assembled by the backend.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Whether the email has been verified.
    pub is_verified: bool,
    /// Registration time (ISO 8601).
    pub created_at: String,
}

/// One page of the admin contestant listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListContestantsResponse {
    /// Total number of contestants matching the filters.
    pub count: u64,
    /// 1-based page number that was served.
    pub page: u32,
    /// Page size that was served (server caps at 200).
    pub page_size: u32,
    /// Contestants on this page.
    pub contestants: Vec<Contestant>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Email verification
// ─────────────────────────────────────────────────────────────────────────────

/// Request to verify an email and set the account password in one step.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyEmailRequest {
    /// Verification token from the emailed link (a UUID).
    pub token: String,
    /// New account password.
    pub password: String,
    /// Password confirmation; must match.
    pub password_confirm: String,
}

/// Response to a successful verification.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyEmailResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// The now-verified contestant.
    pub contestant: Contestant,
}

// ─────────────────────────────────────────────────────────────────────────────
// Admin auth
// ─────────────────────────────────────────────────────────────────────────────

/// Admin login credentials.
#[derive(Debug, Clone, Serialize)]
pub struct AdminLoginRequest {
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: String,
}

/// SimpleJWT token pair returned by a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminLoginResponse {
    /// Short-lived bearer token used for admin requests.
    pub access: String,
    /// Refresh token. This SDK does not refresh; kept for callers that do.
    #[serde(default)]
    pub refresh: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Winner
// ─────────────────────────────────────────────────────────────────────────────

/// A recorded winner draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinnerDraw {
    /// Draw record ID.
    pub id: i64,
    /// ID of the winning contestant.
    pub contestant: i64,
    /// Winner's full name.
    pub contestant_name: String,
    /// Winner's email.
    pub contestant_email: String,
    /// Winner's phone.
    pub contestant_phone: String,
    /// When the draw happened (ISO 8601).
    pub drawn_at: String,
}

/// Response to drawing a winner.
#[derive(Debug, Clone, Deserialize)]
pub struct DrawWinnerResponse {
    /// Human-readable announcement.
    pub message: String,
    /// The draw record.
    pub winner: WinnerDraw,
}

/// Response to a current-winner lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct WinnerResponse {
    /// The draw record.
    pub winner: WinnerDraw,
}
