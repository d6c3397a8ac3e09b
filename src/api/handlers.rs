use axum::{
    Json,
    extract::{Query, State},
};
use std::time::Instant;

use crate::data_models::SearchResponse;
use crate::error::ApiError;

use super::AppState;
use super::models::SearchParams;

pub async fn search_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let params = SearchParams::from_pairs(pairs);
    let query = params.query().ok_or(ApiError::Validation)?;

    let api_key = state
        .config
        .provider_api_key
        .as_deref()
        .ok_or(ApiError::Configuration)?;

    let start = Instant::now();
    tracing::info!("Fetching search results for query: {query}");

    let raw = state.provider.search(api_key, query).await?;
    let search_time = start.elapsed().as_secs_f64();

    let response = SearchResponse::from_provider(raw, search_time);
    tracing::debug!(
        items = response.items.len(),
        search_time,
        "search completed"
    );
    Ok(Json(response))
}
