//! JSON-over-HTTP client for the compiler back-end.

use super::{
    ExecutionService, ExplainRequest, ExplainResponse, ExplanationService, HistoryEntry,
    HistoryService, RunRequest, RunResponse, SaveRequest, SaveResponse,
};
use crate::config::ServicesConfig;
use crate::error::{HintError, HintResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One client for all three collaborator services, rooted at a base URL.
#[derive(Clone)]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct HistoryListing {
    #[serde(default)]
    history: Vec<HistoryEntry>,
    #[serde(default)]
    error: Option<String>,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> HintResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HintError::service("http", e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Build from `[services]`; `None` when no base URL is configured.
    pub fn from_config(config: &ServicesConfig) -> HintResult<Option<Self>> {
        config
            .base_url
            .as_deref()
            .map(|url| Self::new(url, Duration::from_secs(config.timeout_secs)))
            .transpose()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, service: &str, path: &str, body: &B) -> HintResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        tracing::debug!("POST {}", self.url(path));
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| HintError::service(service, e.to_string()))?;

        Self::decode(service, response).await
    }

    async fn decode<T: DeserializeOwned>(service: &str, response: reqwest::Response) -> HintResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HintError::service(
                service,
                format!("request failed with status {status}: {body}"),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| HintError::service(service, format!("failed to parse response: {e}")))
    }
}

#[async_trait]
impl ExecutionService for HttpBackend {
    async fn run(&self, request: RunRequest) -> HintResult<RunResponse> {
        self.post_json("run", "/run", &request).await
    }
}

#[async_trait]
impl ExplanationService for HttpBackend {
    async fn explain(&self, request: ExplainRequest) -> HintResult<ExplainResponse> {
        self.post_json("explain", "/explain", &request).await
    }
}

#[async_trait]
impl HistoryService for HttpBackend {
    async fn save(&self, request: SaveRequest) -> HintResult<SaveResponse> {
        self.post_json("history", "/api/save", &request).await
    }

    async fn share(&self, request: SaveRequest) -> HintResult<SaveResponse> {
        self.post_json("history", "/api/share", &request).await
    }

    async fn history(&self, limit: usize) -> HintResult<Vec<HistoryEntry>> {
        let url = self.url(&format!("/api/history?limit={limit}"));
        tracing::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HintError::service("history", e.to_string()))?;

        let listing: HistoryListing = Self::decode("history", response).await?;
        match listing.error {
            Some(error) => Err(HintError::service("history", error)),
            None => Ok(listing.history),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let backend = HttpBackend::new("http://localhost:5000/", Duration::from_secs(5)).unwrap();
        assert_eq!(backend.url("/run"), "http://localhost:5000/run");
    }

    #[test]
    fn test_from_config_without_url() {
        let config = ServicesConfig::default();
        assert!(HttpBackend::from_config(&config).unwrap().is_none());
    }
}
