//! Contestants API.

use crate::client::TombolaClient;
use crate::endpoints;
use crate::error::Result;
use crate::types::{
    ListContestantsResponse, RegisterContestantRequest, RegisterContestantResponse,
};

/// Query parameters for listing contestants.
#[derive(Debug, Clone, Default)]
pub struct ListContestantsQuery {
    /// Filter by verification state.
    pub verified: Option<bool>,
    /// Substring match on names and email.
    pub search: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size (server caps at 200).
    pub page_size: Option<u32>,
}

impl ListContestantsQuery {
    /// Serialize to query pairs. All-`None` yields no pairs, and so no `?`
    /// on the request at all.
    pub(crate) fn into_pairs(self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(verified) = self.verified {
            pairs.push(("verified".to_string(), verified.to_string()));
        }
        if let Some(search) = self.search {
            pairs.push(("search".to_string(), search));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size".to_string(), page_size.to_string()));
        }
        pairs
    }
}

/// Contestants API client.
pub struct ContestantsApi {
    client: TombolaClient,
}

impl ContestantsApi {
    pub(crate) fn new(client: TombolaClient) -> Self {
        Self { client }
    }

    /// Register a new contestant (public endpoint).
    ///
    /// The backend emails a verification link on success.
    pub async fn register(
        &self,
        request: RegisterContestantRequest,
    ) -> Result<RegisterContestantResponse> {
        let descriptor = endpoints::REGISTER_CONTESTANT
            .descriptor()
            .body(serde_json::to_value(&request)?);
        self.client.dispatch(descriptor).await
    }

    /// List contestants (admin endpoint), with optional filters and paging.
    pub async fn list(&self, query: ListContestantsQuery) -> Result<ListContestantsResponse> {
        let mut descriptor = endpoints::LIST_CONTESTANTS.descriptor();
        descriptor.query = query.into_pairs();
        self.client.dispatch(descriptor).await
    }
}
