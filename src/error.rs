//! Error types shared by the proxy endpoint, the pages and the native client.
//!
//! Every variant maps to a JSON (or HTML) response; nothing in request
//! handling is allowed to escape as a panic.

use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::{Value, json};

/// Failure talking to the external search provider.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ProviderError {
    /// Upstream HTTP status, when the provider answered at all.
    pub status: Option<StatusCode>,
    pub message: String,
    /// Upstream error body, if it was JSON.
    pub payload: Option<Value>,
}

impl ProviderError {
    pub fn transport(message: impl Into<String>) -> Self {
        ProviderError {
            status: None,
            message: message.into(),
            payload: None,
        }
    }

    /// Builds the error for a non-2xx answer. The payload's `message` field
    /// is preferred over the generic status text.
    pub fn from_status(status: StatusCode, payload: Option<Value>) -> Self {
        let message = payload
            .as_ref()
            .and_then(|p| p.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));
        ProviderError {
            status: Some(status),
            message,
            payload,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing search query parameter")]
    Validation,

    #[error("API configuration error")]
    Configuration,

    #[error("Failed to fetch search results")]
    Provider(#[from] ProviderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            ApiError::Configuration => {
                tracing::error!("SERP_API key is not defined in environment variables");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": self.to_string() })),
                )
                    .into_response()
            }
            ApiError::Provider(ref err) => {
                match &err.payload {
                    Some(payload) => tracing::error!("Search API error: {payload}"),
                    None => tracing::error!("Search API error: {}", err.message),
                }
                let status = err.status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (
                    status,
                    Json(json!({ "error": self.to_string(), "message": err.message })),
                )
                    .into_response()
            }
        }
    }
}

/// Failure of the results page's call to `/api/search`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientFetchError {
    #[error("{0}")]
    Transport(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ClientFetchError {
    /// Picks the most useful text out of the proxy's error body.
    pub fn from_status(status: u16, body: Option<&Value>) -> Self {
        let from_body = |key: &str| {
            body.and_then(|b| b.get(key))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let message = from_body("message")
            .or_else(|| from_body("error"))
            .unwrap_or_else(|| format!("API request failed with status {status}"));
        ClientFetchError::Status { status, message }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("template error: {0}")]
    Template(String),
}

impl From<minijinja::Error> for HtmlError {
    fn from(err: minijinja::Error) -> Self {
        HtmlError::Template(err.to_string())
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        tracing::error!("{self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<html><body><h1>Error</h1><p>Sorry, something went wrong displaying this page.</p></body></html>"),
        )
            .into_response()
    }
}
