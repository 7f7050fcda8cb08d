//! API endpoint implementations.

mod admin;
mod contestants;
mod verification;

pub use admin::AdminApi;
pub use contestants::{ContestantsApi, ListContestantsQuery};
pub use verification::VerificationApi;
