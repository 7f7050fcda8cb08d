//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use tombola_auth::TokenStore;

use crate::api::{AdminApi, ContestantsApi, VerificationApi};
use crate::config;
use crate::descriptor::RequestDescriptor;
use crate::error::{Error, ErrorBody, Result};

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Tombola API client.
///
/// Provides typed access to the contest backend. When built with a token
/// store, the stored bearer token is read fresh on every call and attached
/// as `Authorization: Bearer <token>`; without a store, requests go out
/// unauthenticated and the server decides what to reject.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use std::sync::Arc;
/// use tombola_auth::FileTokenStore;
/// use tombola_client::TombolaClient;
///
/// # async fn example() -> tombola_client::Result<()> {
/// let client = TombolaClient::builder()
///     .base_url("http://localhost:8000/api")
///     .token_store(Arc::new(FileTokenStore::new(Path::new("/tmp/tombola"))))
///     .build()?;
///
/// let page = client.contestants().list(Default::default()).await?;
/// println!("{} contestants", page.count);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TombolaClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests.
    pub(crate) base_url: Url,
    /// Request timeout.
    pub(crate) timeout: Duration,
    /// Where the bearer token lives, when running with one.
    pub(crate) store: Option<Arc<dyn TokenStore>>,
}

impl TombolaClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client whose base URL comes from `TOMBOLA_API_BASE`, or
    /// the development default when unset.
    pub fn from_env() -> Result<Self> {
        Self::builder().base_url(config::api_base_from_env()).build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The token store, if the client runs with one.
    pub fn token_store(&self) -> Option<&Arc<dyn TokenStore>> {
        self.inner.store.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the contestants API.
    pub fn contestants(&self) -> ContestantsApi {
        ContestantsApi::new(self.clone())
    }

    /// Access the email verification API.
    pub fn verification(&self) -> VerificationApi {
        VerificationApi::new(self.clone())
    }

    /// Access the admin API.
    pub fn admin(&self) -> AdminApi {
        AdminApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Read the bearer token for this call.
    ///
    /// Storage is consulted on every dispatch, never cached: a token
    /// written or cleared elsewhere is picked up by the next call.
    fn current_token(&self) -> Option<String> {
        self.inner.store.as_ref().and_then(|store| store.get())
    }

    /// Issue the API call described by `descriptor`.
    ///
    /// The stored bearer token, when present, is attached as
    /// `Authorization: Bearer <token>`; caller-supplied headers are applied
    /// afterwards and win on collision. Transport and HTTP failures are
    /// returned to the caller untouched — no retry, and the stored token is
    /// never mutated here.
    pub async fn dispatch<T: serde::de::DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T> {
        let url = self.url(&descriptor.path)?;

        let mut headers = HeaderMap::new();
        if let Some(token) = self.current_token() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| Error::Config("Stored token is not a valid header value".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }
        for (name, value) in &descriptor.headers {
            let header_name: HeaderName = name
                .parse()
                .map_err(|_| Error::Config(format!("Invalid header name: {}", name)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| Error::Config(format!("Invalid value for header {}", name)))?;
            headers.insert(header_name, header_value);
        }

        tracing::debug!(method = %descriptor.method, url = %url, "Dispatching request");

        let mut request = self
            .inner
            .http
            .request(descriptor.method.clone(), url)
            .headers(headers)
            .timeout(self.inner.timeout);

        if !descriptor.query.is_empty() {
            request = request.query(&descriptor.query);
        }
        if let Some(body) = &descriptor.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Handle a response, extracting the body or error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Extract an error from a failed response.
    async fn extract_error(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();

        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::into_message)
                .unwrap_or(body),
            Err(_) => String::new(),
        };
        let message = if message.is_empty() {
            format!("HTTP {}", status)
        } else {
            message
        };

        match status {
            401 => Error::Auth(message),
            404 => Error::NotFound(message),
            _ => Error::Api { status, message },
        }
    }
}

/// Builder for creating a TombolaClient.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    store: Option<Arc<dyn TokenStore>>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            store: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the token store the client reads the bearer token from.
    ///
    /// Leaving this unset models running without a client storage context:
    /// no storage is ever consulted and no Authorization header is
    /// auto-attached.
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<TombolaClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        // Content type is fixed; Authorization is per-call, never a default
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("tombola-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        Ok(TombolaClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
                store: self.store,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
