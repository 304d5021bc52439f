use crate::backend::ResearchBackend;
use crate::error::{BackendError, ClientError, Endpoint, Result};
use crate::fallback::{recover, Failure, FINDINGS_PLACEHOLDER, LIMITED_REVIEW_PLACEHOLDER};
use crate::http::DEFAULT_TIMEOUT;
use autoresearch_types::{
    AnalyzeResponse, Paper, ResearchEvent, ResearchOutcome, ResearchSession, RunId,
};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

pub const DEFAULT_EVENT_BUFFER: usize = 16;

/// A run started with [`Orchestrator::spawn_run`].
pub struct RunHandle {
    pub run: RunId,
    pub events: mpsc::Receiver<ResearchEvent>,
}

/// Terminal state of a run driven with [`Orchestrator::research`].
#[derive(Debug, Clone)]
pub struct CompletedRun {
    pub run: RunId,
    pub outcome: ResearchOutcome,
    pub session: ResearchSession,
}

/// Drives search then analysis and degrades every failure to local content.
///
/// Runs are numbered from a shared counter so consumers can drop snapshots
/// of superseded runs (see [`crate::SessionStore`]).
#[derive(Clone)]
pub struct Orchestrator {
    backend: Arc<dyn ResearchBackend>,
    runs: Arc<AtomicU64>,
    request_timeout: Duration,
    event_buffer: usize,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn ResearchBackend>) -> Self {
        Self {
            backend,
            runs: Arc::new(AtomicU64::new(0)),
            request_timeout: DEFAULT_TIMEOUT,
            event_buffer: DEFAULT_EVENT_BUFFER,
        }
    }

    /// Upper bound on each backend call; expiry takes the demo fallback.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_event_buffer(mut self, capacity: usize) -> Self {
        self.event_buffer = capacity.max(1);
        self
    }

    pub fn backend(&self) -> Arc<dyn ResearchBackend> {
        Arc::clone(&self.backend)
    }

    fn next_run(&self) -> RunId {
        RunId(self.runs.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Latest run id handed out, if any.
    pub fn latest_run(&self) -> Option<RunId> {
        match self.runs.load(Ordering::SeqCst) {
            0 => None,
            n => Some(RunId(n)),
        }
    }

    fn validate(topic: &str) -> Result<String> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ClientError::EmptyTopic);
        }
        Ok(topic.to_string())
    }

    /// Spawn a run in the background and return its event stream.
    ///
    /// The stream always ends with a `Finished` event unless the receiver is
    /// dropped first, in which case the run completes silently.
    pub fn spawn_run(&self, topic: &str) -> Result<RunHandle> {
        let topic = Self::validate(topic)?;
        let run = self.next_run();
        let (tx, rx) = mpsc::channel(self.event_buffer);

        let orchestrator = self.clone();
        tokio::spawn(async move {
            orchestrator.execute(run, topic, Some(&tx)).await;
        });

        Ok(RunHandle { run, events: rx })
    }

    /// Run to completion on the current task.
    pub async fn research(&self, topic: &str) -> Result<CompletedRun> {
        let topic = Self::validate(topic)?;
        let run = self.next_run();
        Ok(self.execute(run, topic, None).await)
    }

    async fn execute(
        &self,
        run: RunId,
        topic: String,
        events: Option<&mpsc::Sender<ResearchEvent>>,
    ) -> CompletedRun {
        let start = Instant::now();
        tracing::info!(%run, topic = %topic, "Starting research run");

        let session = ResearchSession::loading(&topic);
        publish(events, ResearchEvent::started(run, session.clone())).await;

        let (outcome, session) = match self.fetch(run, session.clone(), events).await {
            Ok(done) => (ResearchOutcome::Completed, done),
            Err(failure) => recover(failure, session),
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(%run, ?outcome, duration_ms, "Research run finished");

        publish(
            events,
            ResearchEvent::Finished {
                run,
                outcome: outcome.clone(),
                session: session.clone(),
                duration_ms,
            },
        )
        .await;

        CompletedRun {
            run,
            outcome,
            session,
        }
    }

    async fn fetch(
        &self,
        run: RunId,
        session: ResearchSession,
        events: Option<&mpsc::Sender<ResearchEvent>>,
    ) -> std::result::Result<ResearchSession, Failure> {
        let topic = session.topic.clone();

        let papers = self
            .bounded(Endpoint::Search, self.backend.search_papers(&topic))
            .await
            .map_err(Failure::Unrecoverable)?;

        if papers.is_empty() {
            return Err(Failure::EmptySearch);
        }

        tracing::info!(%run, papers = papers.len(), "Papers found, starting analysis");
        let session = session.with_papers(papers.clone());
        publish(
            events,
            ResearchEvent::PapersFound {
                run,
                session: session.clone(),
            },
        )
        .await;

        let analysis = match self
            .bounded(Endpoint::Analyze, self.backend.analyze_papers(&papers, &topic))
            .await
        {
            Ok(analysis) => analysis,
            Err(cause) if cause.is_answered_failure() => {
                return Err(Failure::AnalysisUnavailable { papers, cause })
            }
            Err(cause) => return Err(Failure::Unrecoverable(cause)),
        };

        Ok(apply_analysis(session, papers, analysis))
    }

    async fn bounded<T>(
        &self,
        endpoint: Endpoint,
        call: impl Future<Output = std::result::Result<T, BackendError>>,
    ) -> std::result::Result<T, BackendError> {
        tokio::time::timeout(self.request_timeout, call)
            .await
            .unwrap_or(Err(BackendError::Timeout {
                endpoint,
                timeout: self.request_timeout,
            }))
    }
}

fn apply_analysis(
    session: ResearchSession,
    searched: Vec<Paper>,
    analysis: AnalyzeResponse,
) -> ResearchSession {
    let papers = analysis.analyzed_papers.unwrap_or(searched);
    let review = analysis
        .literature_review
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| LIMITED_REVIEW_PLACEHOLDER.to_string());
    let findings = analysis
        .key_findings
        .unwrap_or_else(|| vec![FINDINGS_PLACEHOLDER.to_string()]);

    session.finish(papers, review, findings, None)
}

async fn publish(events: Option<&mpsc::Sender<ResearchEvent>>, event: ResearchEvent) {
    if let Some(tx) = events {
        if tx.send(event).await.is_err() {
            tracing::debug!("Event receiver dropped, continuing run without publishing");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_analysis_fields_use_placeholders() {
        let searched = vec![Paper::new("p", "t")];
        let session = apply_analysis(
            ResearchSession::loading("x"),
            searched.clone(),
            AnalyzeResponse::default(),
        );

        assert_eq!(session.papers, searched);
        assert_eq!(session.literature_review, LIMITED_REVIEW_PLACEHOLDER);
        assert_eq!(session.key_findings, vec![FINDINGS_PLACEHOLDER.to_string()]);
        assert!(!session.is_loading);
    }

    #[test]
    fn test_empty_review_uses_placeholder() {
        let analysis = AnalyzeResponse {
            literature_review: Some(String::new()),
            ..AnalyzeResponse::default()
        };
        let session = apply_analysis(ResearchSession::loading("x"), Vec::new(), analysis);
        assert_eq!(session.literature_review, LIMITED_REVIEW_PLACEHOLDER);
    }
}
