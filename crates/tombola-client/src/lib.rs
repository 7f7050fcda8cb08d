//! HTTP client SDK for the tombola contest/giveaway API.
//!
//! This crate provides a typed client for the contest backend: public
//! contestant registration and email verification, plus the token-protected
//! admin surface (login, contestant listing, winner draw/lookup).
//!
//! The bearer token is not baked into the client. When a
//! [`tombola_auth::TokenStore`] is supplied, every dispatch reads the token
//! from it at call time and attaches `Authorization: Bearer <token>`; the
//! companion `tombola-auth` crate owns writing and clearing that token.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tombola_auth::MemoryTokenStore;
//! use tombola_client::{AdminLoginRequest, TombolaClient};
//!
//! # async fn example() -> tombola_client::Result<()> {
//! let store = Arc::new(MemoryTokenStore::new());
//! let client = TombolaClient::builder()
//!     .base_url("http://localhost:8000/api")
//!     .token_store(store)
//!     .build()?;
//!
//! // Log in; the access token lands in the store and authenticates
//! // every later call.
//! client
//!     .admin()
//!     .login_and_store(AdminLoginRequest {
//!         username: "admin".to_string(),
//!         password: "secret".to_string(),
//!     })
//!     .await?;
//!
//! let winner = client.admin().draw_winner().await?;
//! println!("{}", winner.message);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Contestants**: register (public), list (admin)
//! - **Verification**: redeem an emailed token and set a password
//! - **Admin**: login, winner draw, winner lookup

pub mod api;
pub mod client;
pub mod config;
pub mod descriptor;
pub mod endpoints;
pub mod error;
pub mod types;

pub use api::ListContestantsQuery;
pub use client::{ClientBuilder, TombolaClient};
pub use descriptor::RequestDescriptor;
pub use error::{Error, Result};
pub use types::*;
