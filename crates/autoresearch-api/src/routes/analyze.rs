use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::{
    error::{ApiError, Degraded},
    state::AppState,
};
use autoresearch_types::{AnalyzeRequest, AnalyzeResponse};

/// Analyse a set of papers for a topic
///
/// Returns the papers with summaries and key points, a Markdown literature
/// review and six key findings.
#[utoipa::path(
    post,
    path = "/analyze-papers",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis generated", body = AnalyzeResponse),
        (status = 400, description = "Invalid papers data", body = AnalyzeResponse),
        (status = 500, description = "Analysis failed", body = AnalyzeResponse)
    ),
    tag = "research"
)]
pub async fn analyze_papers(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, Degraded<AnalyzeResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Malformed analysis body");
        ApiError::InvalidPapers.degrade_analysis()
    })?;

    let topic = request.topic.clone();
    tracing::debug!(
        topic = %topic,
        papers = request.papers.as_ref().map_or(0, Vec::len),
        "Analysing papers"
    );

    let analysis = state
        .analysis
        .analyze_request(request)
        .map_err(|e| ApiError::analysis(e).degrade_analysis())?;

    tracing::info!(topic = %topic, findings = analysis.key_findings.len(), "Analysis completed");
    Ok(Json(analysis.into()))
}
