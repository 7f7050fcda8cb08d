//! Navigation guard for admin-protected routes.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::claims::decode_payload;
use crate::store::TokenStore;

/// Default login route used as the redirect target.
pub const LOGIN_ROUTE: &str = "/admin/login";

/// What the guard decided for one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Navigation may proceed.
    Allow,
    /// Navigation is blocked; the caller should route here instead.
    Redirect(String),
}

/// Gate for admin-protected navigation.
///
/// Each evaluation reads the stored token and checks presence and expiry
/// locally. The check never contacts the network, and token problems are
/// fully absorbed here: a corrupt or expired token is cleared from storage
/// and turned into a redirect, never an error.
///
/// Built without a store (no client execution context, so no persistent
/// storage to consult) the guard allows everything.
#[derive(Debug)]
pub struct RouteGuard {
    store: Option<Arc<dyn TokenStore>>,
    login_route: String,
}

impl RouteGuard {
    /// Guard backed by a token store.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self {
            store: Some(store),
            login_route: LOGIN_ROUTE.to_string(),
        }
    }

    /// Guard with no storage context: every evaluation allows.
    pub fn without_store() -> Self {
        Self {
            store: None,
            login_route: LOGIN_ROUTE.to_string(),
        }
    }

    /// Override the redirect target.
    pub fn login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    /// Evaluate one navigation attempt against the current clock.
    pub fn evaluate(&self) -> GuardOutcome {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.evaluate_at(now)
    }

    /// Evaluate against an explicit time (seconds since epoch).
    pub fn evaluate_at(&self, now: u64) -> GuardOutcome {
        let Some(store) = &self.store else {
            return GuardOutcome::Allow;
        };

        let Some(token) = store.get() else {
            tracing::debug!("No stored token; redirecting to login");
            return self.redirect();
        };

        match decode_payload(&token) {
            Ok(payload) if payload.is_expired_at(now) => {
                tracing::info!("Stored token expired; clearing and redirecting");
                store.remove();
                self.redirect()
            }
            Ok(_) => GuardOutcome::Allow,
            Err(e) => {
                tracing::info!(error = %e, "Stored token corrupt; clearing and redirecting");
                store.remove();
                self.redirect()
            }
        }
    }

    fn redirect(&self) -> GuardOutcome {
        GuardOutcome::Redirect(self.login_route.clone())
    }
}
