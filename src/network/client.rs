//! HTTP client for making requests to the search backend

use crate::config::BackendSettings;
use anyhow::Result;
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP client wrapper with semsearch-specific configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

/// Response captured with its status and body text
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Final URL after redirects
    pub url: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&BackendSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &BackendSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            user_agent: format!("semsearch/{}", crate::VERSION),
        })
    }

    /// POST with a JSON body
    pub async fn post_json(
        &self,
        url: &str,
        json: &serde_json::Value,
    ) -> reqwest::Result<HttpResponse> {
        let response = self
            .client
            .post(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .json(json)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// No-cache GET, used by the availability probe
    pub async fn get(&self, url: &str) -> reqwest::Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Cache-Control", "no-cache")
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Parse a response into an [`HttpResponse`]
    async fn parse_response(response: Response) -> reqwest::Result<HttpResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(HttpResponse { status, text, url })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
