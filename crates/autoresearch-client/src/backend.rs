use crate::error::{BackendError, Endpoint};
use async_trait::async_trait;
use autoresearch_corpus::{ChatResponder, CorpusError, PaperAnalysisService, PaperSearchService};
use autoresearch_types::{AnalyzeRequest, AnalyzeResponse, ChatRequest, Paper};

/// The three research endpoints as seen by the orchestrator and chat view.
#[async_trait]
pub trait ResearchBackend: Send + Sync {
    async fn search_papers(&self, query: &str) -> Result<Vec<Paper>, BackendError>;

    async fn analyze_papers(
        &self,
        papers: &[Paper],
        topic: &str,
    ) -> Result<AnalyzeResponse, BackendError>;

    async fn chat(&self, request: &ChatRequest) -> Result<String, BackendError>;
}

/// Serves the endpoints by calling the corpus services directly.
///
/// Corpus errors surface as the status codes the HTTP server would have
/// answered with, so both backends drive the same fallbacks.
#[derive(Debug, Clone, Default)]
pub struct InProcessBackend {
    search: PaperSearchService,
    analysis: PaperAnalysisService,
    responder: ChatResponder,
}

impl InProcessBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

fn status_for(endpoint: Endpoint, err: &CorpusError) -> BackendError {
    let status = match err {
        CorpusError::InvalidInput(_) => 400,
        CorpusError::Internal(_) => 500,
    };
    tracing::warn!(%endpoint, status, error = %err, "In-process request failed");
    BackendError::Status { endpoint, status }
}

#[async_trait]
impl ResearchBackend for InProcessBackend {
    async fn search_papers(&self, query: &str) -> Result<Vec<Paper>, BackendError> {
        self.search
            .search(query)
            .map_err(|e| status_for(Endpoint::Search, &e))
    }

    async fn analyze_papers(
        &self,
        papers: &[Paper],
        topic: &str,
    ) -> Result<AnalyzeResponse, BackendError> {
        self.analysis
            .analyze_request(AnalyzeRequest::new(papers.to_vec(), topic))
            .map(AnalyzeResponse::from)
            .map_err(|e| status_for(Endpoint::Analyze, &e))
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String, BackendError> {
        Ok(self
            .responder
            .respond_to(request.message.as_deref(), request.session.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoresearch_types::ResearchSession;

    #[tokio::test]
    async fn test_blank_query_maps_to_bad_request() {
        let err = InProcessBackend::new().search_papers("").await.unwrap_err();
        assert!(matches!(
            err,
            BackendError::Status {
                endpoint: Endpoint::Search,
                status: 400
            }
        ));
    }

    #[tokio::test]
    async fn test_in_process_analysis_fills_every_field() {
        let backend = InProcessBackend::new();
        let papers = backend.search_papers("robotics").await.unwrap();
        let response = backend.analyze_papers(&papers, "robotics").await.unwrap();

        assert_eq!(response.analyzed_papers.unwrap().len(), 5);
        assert!(response.literature_review.is_some());
        assert_eq!(response.key_findings.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_in_process_chat() {
        let request = ChatRequest::new("methods", ResearchSession::loading("t"), Vec::new());
        let reply = InProcessBackend::new().chat(&request).await.unwrap();
        assert!(reply.contains("methodological approaches"));
    }
}
