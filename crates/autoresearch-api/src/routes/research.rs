use axum::{
    extract::{rejection::JsonRejection, State},
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures::stream::{Stream, StreamExt};
use std::sync::Arc;
use tokio_stream::wrappers::ReceiverStream;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};
use autoresearch_client::ClientError;
use autoresearch_types::ResearchRequest;

/// Run a full research session and stream its snapshots
///
/// Emits `started`, `papers_found` (when search found papers) and `finished`
/// events. Each event carries the full session snapshot; `finished` also
/// reports which fallback, if any, produced it.
#[utoipa::path(
    post,
    path = "/research",
    request_body = ResearchRequest,
    responses(
        (status = 200, description = "Streaming research events", content_type = "text/event-stream"),
        (status = 400, description = "Missing research topic")
    ),
    tag = "research"
)]
pub async fn run_research(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ResearchRequest>, JsonRejection>,
) -> ApiResult<Sse<impl Stream<Item = Result<Event, axum::Error>>>> {
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let handle = state.orchestrator.spawn_run(&req.topic).map_err(|e| match e {
        ClientError::EmptyTopic => ApiError::EmptyTopic,
        other => ApiError::BadRequest(other.to_string()),
    })?;

    tracing::info!(run = %handle.run, topic = %req.topic.trim(), "Streaming research run");

    let sse_stream = ReceiverStream::new(handle.events)
        .map(|event| Event::default().event(event.name()).json_data(&event));

    Ok(Sse::new(sse_stream).keep_alive(KeepAlive::default()))
}
