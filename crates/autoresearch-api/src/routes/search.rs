use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::{
    error::{ApiError, Degraded},
    state::AppState,
};
use autoresearch_types::{SearchRequest, SearchResponse};

/// Search the paper catalog
///
/// Malformed bodies and blank queries answer 400 with an empty paper list.
#[utoipa::path(
    post,
    path = "/search-papers",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Papers found", body = SearchResponse),
        (status = 400, description = "Missing search query", body = SearchResponse),
        (status = 500, description = "Search failed", body = SearchResponse)
    ),
    tag = "research"
)]
pub async fn search_papers(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, Degraded<SearchResponse>> {
    let query = match payload {
        Ok(Json(req)) => req.query.unwrap_or_default(),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Malformed search body");
            String::new()
        }
    };

    let papers = state
        .search
        .search(&query)
        .map_err(|e| ApiError::search(e).degrade_search())?;

    tracing::info!(query = %query, papers = papers.len(), "Search completed");
    Ok(Json(SearchResponse::found(papers)))
}
