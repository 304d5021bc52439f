use crate::config::Config;
use autoresearch_client::{InProcessBackend, Orchestrator};
use autoresearch_corpus::{ChatResponder, PaperAnalysisService, PaperSearchService};
use std::sync::Arc;

/// Shared application state passed to all handlers
///
/// The corpus services are stateless. The orchestrator drives `/research`
/// runs against the same services in-process.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub search: PaperSearchService,
    pub analysis: PaperAnalysisService,
    pub responder: ChatResponder,
    pub orchestrator: Orchestrator,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let orchestrator = Orchestrator::new(Arc::new(InProcessBackend::new()))
            .with_request_timeout(config.research.client_timeout())
            .with_event_buffer(config.research.event_buffer);

        Self {
            config: Arc::new(config),
            search: PaperSearchService::new(),
            analysis: PaperAnalysisService::new(),
            responder: ChatResponder::new(),
            orchestrator,
        }
    }
}
