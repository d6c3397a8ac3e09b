use serde_json::{Value, json};

use crate::data_models::RawProviderResult;
use crate::error::ProviderError;

pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Thin client for the external search-results API.
///
/// One call, one POST. No retries and no timeout beyond reqwest's default.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ProviderClient {
    pub fn new(endpoint: impl Into<String>) -> ProviderClient {
        ProviderClient::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> ProviderClient {
        ProviderClient {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn search(
        &self,
        api_key: &str,
        query: &str,
    ) -> Result<RawProviderResult, ProviderError> {
        let res = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, api_key)
            .json(&json!({ "q": query }))
            .send()
            .await
            .map_err(|e| ProviderError::transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            // Non-JSON error bodies are kept as plain text for the log.
            let payload = res
                .text()
                .await
                .ok()
                .filter(|text| !text.is_empty())
                .map(|text| serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text)));
            return Err(ProviderError::from_status(status, payload));
        }

        res.json::<RawProviderResult>()
            .await
            .map_err(|e| ProviderError::transport(e.to_string()))
    }
}
