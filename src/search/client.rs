//! Client for the semantic search backend

use super::error::SearchError;
use super::models::SearchRequest;
use crate::config::Settings;
use crate::network::HttpClient;
use crate::results::ServiceResult;
use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

/// Transport seam between the presentation controller and the backend.
///
/// [`SearchClient`] is the production implementation; tests substitute a
/// scripted stub.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Fetch candidate results for a request
    async fn search(&self, request: &SearchRequest)
        -> std::result::Result<Vec<ServiceResult>, SearchError>;
}

/// Client for the semantic search service.
///
/// The backend address is injected at construction time, normally from
/// [`Settings`], so tests can point the client at a mock endpoint.
#[derive(Clone)]
pub struct SearchClient {
    client: HttpClient,
    base_url: Url,
    search_url: Url,
    default_limit: u32,
}

impl SearchClient {
    /// Create a client from settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = HttpClient::with_settings(&settings.backend)?;
        Self::new(
            client,
            &settings.backend.base_url,
            settings.search.default_limit,
        )
    }

    /// Create a client against an explicit base URL
    pub fn new(client: HttpClient, base_url: &str, default_limit: u32) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let search_url = base_url.join("/search")?;

        Ok(Self {
            client,
            base_url,
            search_url,
            default_limit,
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch candidate services for a request.
    ///
    /// An empty query (after trimming) short-circuits to an empty list
    /// without touching the network. Non-success statuses carry the status
    /// code and body text; undecodable bodies surface as their own kind.
    pub async fn search(
        &self,
        request: &SearchRequest,
    ) -> std::result::Result<Vec<ServiceResult>, SearchError> {
        if request.is_empty() {
            debug!("empty query, skipping backend call");
            return Ok(Vec::new());
        }

        let mut payload = request.clone();
        if payload.limit.is_none() {
            payload.limit = Some(self.default_limit);
        }

        debug!(query = %payload.query, limit = ?payload.limit, "sending search request");
        let body = serde_json::to_value(&payload)?;
        let response = self.client.post_json(self.search_url.as_str(), &body).await?;

        if !response.is_success() {
            return Err(SearchError::Backend {
                status: response.status,
                body: response.text,
            });
        }

        let results: Vec<ServiceResult> = serde_json::from_str(&response.text)?;
        debug!(count = results.len(), "search response decoded");
        Ok(results)
    }

    /// Probe backend availability.
    ///
    /// Any transport failure or non-success status collapses to `false`;
    /// this never errors.
    pub async fn check_status(&self) -> bool {
        match self.client.get(self.base_url.as_str()).await {
            Ok(response) => response.is_success(),
            Err(e) => {
                warn!("availability probe failed: {}", e);
                false
            }
        }
    }
}

#[async_trait]
impl SearchBackend for SearchClient {
    async fn search(
        &self,
        request: &SearchRequest,
    ) -> std::result::Result<Vec<ServiceResult>, SearchError> {
        SearchClient::search(self, request).await
    }
}
