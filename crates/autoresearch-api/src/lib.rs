pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::Config,
    middleware::logging,
    routes::{analyze, chat, health, research, search},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        search::search_papers,
        analyze::analyze_papers,
        chat::chat,
        research::run_research,
    ),
    components(schemas(
        health::HealthResponse,
        autoresearch_types::Paper,
        autoresearch_types::Author,
        autoresearch_types::ResearchSession,
        autoresearch_types::ChatMessage,
        autoresearch_types::ChatRole,
        autoresearch_types::SearchRequest,
        autoresearch_types::SearchResponse,
        autoresearch_types::AnalyzeRequest,
        autoresearch_types::AnalyzeResponse,
        autoresearch_types::ChatRequest,
        autoresearch_types::ChatResponse,
        autoresearch_types::ResearchRequest,
    )),
    tags(
        (name = "health", description = "Service status"),
        (name = "research", description = "Paper search, analysis and streamed research runs"),
        (name = "chat", description = "Questions about a research session"),
    )
)]
pub struct ApiDoc;

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/search-papers", post(search::search_papers))
        .route("/analyze-papers", post(analyze::analyze_papers))
        .route("/chat", post(chat::chat))
        .route("/research", post(research::run_research));

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(axum_middleware::from_fn(logging::log_request))
        .layer(TimeoutLayer::new(state.config.server.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn build_cors_layer(config: &Config) -> CorsLayer {
    if config.cors.enabled {
        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any);

        if config.cors.origins.iter().any(|o| o == "*") {
            cors.allow_origin(Any)
        } else {
            let origins: Vec<axum::http::HeaderValue> = config
                .cors
                .origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            cors.allow_origin(AllowOrigin::list(origins))
        }
    } else {
        CorsLayer::permissive()
    }
}
