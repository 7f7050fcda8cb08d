//! Token storage and route guarding for the tombola contest admin panel.
//!
//! The bearer token obtained at admin login is held in a single injectable
//! [`TokenStore`]. [`RouteGuard`] reads it before each admin navigation and
//! decides locally, from the token's own `exp` claim, whether to allow the
//! navigation or clear the token and redirect to the login route. No
//! network traffic and no signature verification happen here.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tombola_auth::{GuardOutcome, MemoryTokenStore, RouteGuard};
//!
//! let store = Arc::new(MemoryTokenStore::new());
//! let guard = RouteGuard::new(store);
//!
//! // No token stored yet: navigation is blocked.
//! assert_eq!(
//!     guard.evaluate(),
//!     GuardOutcome::Redirect("/admin/login".to_string())
//! );
//! ```

pub mod claims;
pub mod error;
pub mod guard;
pub mod store;

pub use claims::{TokenPayload, decode_payload};
pub use error::{DecodeError, Result};
pub use guard::{GuardOutcome, LOGIN_ROUTE, RouteGuard};
pub use store::{FileTokenStore, MemoryTokenStore, TOKEN_FILE, TokenStore};
