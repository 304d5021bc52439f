use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::state::AppState;
use autoresearch_types::{ChatRequest, ChatResponse};

pub const CHAT_PARSE_FAILURE: &str = "Sorry, I encountered an error processing your question. \
     Please try again or check if you have an active research session.";

/// Answer a question about the current research session
///
/// Always answers 200; problems are reported inside `response`.
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Chat reply", body = ChatResponse)
    ),
    tag = "chat"
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<ChatResponse> {
    let response = match payload {
        Ok(Json(req)) => {
            tracing::debug!(history = req.chat_history.len(), "Chat request");
            state
                .responder
                .respond_to(req.message.as_deref(), req.session.as_ref())
        }
        Err(rejection) => {
            tracing::error!(error = %rejection, "Malformed chat body");
            CHAT_PARSE_FAILURE.to_string()
        }
    };

    Json(ChatResponse { response })
}
