//! Request descriptors.

use reqwest::Method;
use serde_json::Value;

/// One logical API call: where it goes and what it carries.
///
/// The endpoint catalog and the typed accessors build these; callers can
/// also construct one directly for endpoints the catalog does not know
/// about and hand it to [`TombolaClient::dispatch`].
///
/// [`TombolaClient::dispatch`]: crate::TombolaClient::dispatch
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Path relative to the configured base URL.
    pub path: String,
    /// HTTP method.
    pub method: Method,
    /// Optional JSON body.
    pub body: Option<Value>,
    /// Extra headers. Applied after the auto-injected Authorization
    /// header, so a caller-supplied Authorization wins on collision.
    pub headers: Vec<(String, String)>,
    /// Query parameters. Empty means no query string at all.
    pub query: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// Descriptor with an explicit method.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            body: None,
            headers: Vec::new(),
            query: Vec::new(),
        }
    }

    /// GET descriptor for `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST descriptor for `path`.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Attach a JSON body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }
}

/// Method defaults to GET when a descriptor is built field-by-field.
impl Default for RequestDescriptor {
    fn default() -> Self {
        Self::new(Method::GET, "")
    }
}
