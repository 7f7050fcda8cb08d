//! Admin API: login and winner management.

use crate::client::TombolaClient;
use crate::endpoints;
use crate::error::Result;
use crate::types::{AdminLoginRequest, AdminLoginResponse, DrawWinnerResponse, WinnerResponse};

/// Admin API client.
///
/// Everything except [`login`](AdminApi::login) requires a valid bearer
/// token; the server answers 401 otherwise.
pub struct AdminApi {
    client: TombolaClient,
}

impl AdminApi {
    pub(crate) fn new(client: TombolaClient) -> Self {
        Self { client }
    }

    /// Log in and obtain a JWT pair.
    pub async fn login(&self, request: AdminLoginRequest) -> Result<AdminLoginResponse> {
        let descriptor = endpoints::ADMIN_LOGIN
            .descriptor()
            .body(serde_json::to_value(&request)?);
        self.client.dispatch(descriptor).await
    }

    /// Log in and persist the access token into the client's store.
    ///
    /// With no store configured the tokens are still returned, just not
    /// persisted.
    pub async fn login_and_store(&self, request: AdminLoginRequest) -> Result<AdminLoginResponse> {
        let tokens = self.login(request).await?;
        if let Some(store) = self.client.token_store() {
            store.set(&tokens.access);
            tracing::debug!("Access token stored after admin login");
        }
        Ok(tokens)
    }

    /// Draw a winner. The backend permits a single draw and answers 400 on
    /// a second attempt or when no verified contestants exist.
    pub async fn draw_winner(&self) -> Result<DrawWinnerResponse> {
        self.client.dispatch(endpoints::DRAW_WINNER.descriptor()).await
    }

    /// Look up the current winner. 404 until a draw has happened.
    pub async fn winner(&self) -> Result<WinnerResponse> {
        self.client.dispatch(endpoints::GET_WINNER.descriptor()).await
    }
}
