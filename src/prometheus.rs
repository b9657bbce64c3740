//! Prometheus client for per-pod usage metrics.
//!
//! Issues instant queries against `/api/v1/query` and parses the typed
//! response. The endpoint defaults to a local port-forward; no
//! authentication, no retries.

use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Default backend, matching a `kubectl port-forward` to port 8080.
pub const DEFAULT_PROMETHEUS_URL: &str = "http://127.0.0.1:8080";

/// Error type for Prometheus client operations.
#[derive(Debug, Error)]
pub enum PrometheusError {
    #[error("invalid Prometheus URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("query failed: {0}")]
    QueryFailed(String),

    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Client for the Prometheus HTTP API.
pub struct PrometheusClient {
    base_url: String,
    http_client: Client,
}

impl PrometheusClient {
    /// Create a new client against `url`.
    pub fn new(url: &str) -> Result<Self, PrometheusError> {
        let base_url = url.trim_end_matches('/').to_string();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(PrometheusError::InvalidUrl(
                "URL must start with http:// or https://".to_string(),
            ));
        }

        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Run one instant query and return the parsed response.
    pub async fn query(&self, query: &str) -> Result<QueryResponse, PrometheusError> {
        let url = format!(
            "{}/api/v1/query?query={}",
            self.base_url,
            urlencoding::encode(query)
        );

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(PrometheusError::QueryFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| PrometheusError::Parse(e.to_string()))?;

        if body.status != "success" {
            return Err(PrometheusError::QueryFailed(
                body.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(body)
    }
}

// ============================================================================
// Prometheus API response types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
    pub data: QueryData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryData {
    #[serde(rename = "resultType")]
    #[serde(default)]
    #[allow(dead_code)]
    pub result_type: Option<String>,
    #[serde(default)]
    pub result: Vec<Series>,
}

/// One instant-vector sample: a label set and a `[timestamp, "value"]` pair.
#[derive(Debug, Clone, Deserialize)]
pub struct Series {
    pub metric: HashMap<String, String>,
    pub value: Option<(f64, String)>,
}
