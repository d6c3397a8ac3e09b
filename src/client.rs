use serde_json::Value;

use crate::data_models::SearchResponse;
use crate::error::ClientFetchError;
use crate::results::ResultsPage;

/// Native consumer of `GET /api/search`, playing the browser's part for the
/// `query` subcommand.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> ProxyClient {
        ProxyClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse, ClientFetchError> {
        let url = format!("{}/api/search", self.base_url);
        let res = self
            .http
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| ClientFetchError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.json::<Value>().await.ok();
            return Err(ClientFetchError::from_status(status.as_u16(), body.as_ref()));
        }

        res.json::<SearchResponse>()
            .await
            .map_err(|e| ClientFetchError::Decode(e.to_string()))
    }

    /// Runs one fetch cycle for the page's current ticket, if any.
    pub async fn run(&self, page: &mut ResultsPage, q: Option<&str>) {
        let Some(ticket) = page.set_query(q) else {
            return;
        };
        let outcome = self.search(ticket.query()).await;
        page.resolve(ticket, outcome);
    }
}
