//! Endpoint catalog.
//!
//! The six operations the contest backend exposes, as static
//! configuration. Paths are relative to the configured base URL and keep
//! the backend's trailing slashes.

use reqwest::Method;

use crate::descriptor::RequestDescriptor;

/// A fixed method + path pair in the catalog.
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the base URL.
    pub path: &'static str,
}

impl Endpoint {
    /// Start a descriptor for this endpoint.
    pub fn descriptor(&self) -> RequestDescriptor {
        RequestDescriptor::new(self.method.clone(), self.path)
    }
}

/// Public contest registration.
pub const REGISTER_CONTESTANT: Endpoint = Endpoint {
    method: Method::POST,
    path: "contestants/",
};

/// Email verification and password set, in one step.
pub const VERIFY_EMAIL: Endpoint = Endpoint {
    method: Method::POST,
    path: "verification/",
};

/// Admin login (returns a SimpleJWT token pair).
pub const ADMIN_LOGIN: Endpoint = Endpoint {
    method: Method::POST,
    path: "admin/login/",
};

/// Admin contestant listing, filterable and paginated.
pub const LIST_CONTESTANTS: Endpoint = Endpoint {
    method: Method::GET,
    path: "admin/contestants/",
};

/// Admin winner draw (the backend allows a single draw).
pub const DRAW_WINNER: Endpoint = Endpoint {
    method: Method::POST,
    path: "admin/winner/",
};

/// Admin current-winner lookup.
pub const GET_WINNER: Endpoint = Endpoint {
    method: Method::GET,
    path: "admin/winner/",
};
