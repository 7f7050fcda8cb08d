//! Email verification API.

use crate::client::TombolaClient;
use crate::endpoints;
use crate::error::Result;
use crate::types::{VerifyEmailRequest, VerifyEmailResponse};

/// Email verification API client.
pub struct VerificationApi {
    client: TombolaClient,
}

impl VerificationApi {
    pub(crate) fn new(client: TombolaClient) -> Self {
        Self { client }
    }

    /// Redeem an emailed verification token and set the account password.
    pub async fn verify(&self, request: VerifyEmailRequest) -> Result<VerifyEmailResponse> {
        let descriptor = endpoints::VERIFY_EMAIL
            .descriptor()
            .body(serde_json::to_value(&request)?);
        self.client.dispatch(descriptor).await
    }
}
