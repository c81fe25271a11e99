//! HTTP client for the correction-model server

use serde::{Deserialize, Serialize};

use core_pipeline::CorrectionError;

/// Configuration for the correction-model client.
#[derive(Debug, Clone)]
pub struct CorrectionServerConfig {
    /// Base URL of the inference process (default: http://localhost:8602)
    pub base_url: String,
    /// Request timeout in seconds (default: 30). A timed-out request is
    /// reported like any other correction failure.
    pub timeout_secs: u64,
}

impl Default for CorrectionServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8602".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Client for the correction-model inference server.
pub struct CorrectionClient {
    config: CorrectionServerConfig,
    client: reqwest::Client,
}

impl CorrectionClient {
    /// Create a new client.
    pub fn new(config: CorrectionServerConfig) -> Result<Self, CorrectionError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CorrectionError::new(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a client with default configuration.
    pub fn default_client() -> Result<Self, CorrectionError> {
        Self::new(CorrectionServerConfig::default())
    }

    /// Send one correction request.
    pub async fn correct(
        &self,
        request: CorrectRequest,
    ) -> Result<CorrectResponse, CorrectionError> {
        let url = format!("{}/v1/correct", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| CorrectionError::new(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CorrectionError::new(format!(
                "correction server error: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CorrectionError::new(e.to_string()))
    }
}

/// Request body for `/v1/correct`.
#[derive(Debug, Clone, Serialize)]
pub struct CorrectRequest {
    pub text: String,
    /// Sequence cap the server tokenizes to; longer inputs are truncated,
    /// shorter ones padded.
    pub max_tokens: usize,
}

/// Response body from `/v1/correct`: the highest-probability token sequence
/// decoded back to text. Special markers may still be embedded.
#[derive(Debug, Clone, Deserialize)]
pub struct CorrectResponse {
    pub corrected: String,
}
