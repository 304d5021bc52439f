//! Recovery actions for failed research runs.
//!
//! Each [`Failure`] variant maps to exactly one deterministic recovery, so
//! the path that produced a session is always visible as a
//! [`ResearchOutcome`].

use crate::error::BackendError;
use autoresearch_corpus::{demo_papers, local_analysis};
use autoresearch_types::{Paper, ResearchOutcome, ResearchSession};

pub const LIMITED_REVIEW_PLACEHOLDER: &str = "Analysis completed with limited data";
pub const FINDINGS_PLACEHOLDER: &str = "Analysis completed";

#[derive(Debug)]
pub enum Failure {
    /// Search answered successfully but found nothing.
    EmptySearch,
    /// Analysis answered with a failure status or a non-JSON body.
    AnalysisUnavailable {
        papers: Vec<Paper>,
        cause: BackendError,
    },
    /// Anything else: transport errors, timeouts, undecodable bodies, or a
    /// failed search.
    Unrecoverable(BackendError),
}

/// Turns a failed run into its terminal session.
pub fn recover(failure: Failure, session: ResearchSession) -> (ResearchOutcome, ResearchSession) {
    let topic = session.topic.clone();

    match failure {
        Failure::EmptySearch => {
            tracing::warn!(topic = %topic, "Search returned no papers, using demo papers");
            let papers = demo_papers(&topic);
            let analysis = local_analysis(&papers, &topic);
            (
                ResearchOutcome::EmptySearchFallback,
                session.finish(papers, analysis.literature_review, analysis.key_findings, None),
            )
        }
        Failure::AnalysisUnavailable { papers, cause } => {
            tracing::warn!(topic = %topic, error = %cause, "Analysis API failed, using local analysis");
            let analysis = local_analysis(&papers, &topic);
            (
                ResearchOutcome::AnalysisFallback {
                    reason: cause.to_string(),
                },
                session.finish(papers, analysis.literature_review, analysis.key_findings, None),
            )
        }
        Failure::Unrecoverable(cause) => {
            tracing::error!(topic = %topic, error = %cause, "Research failed, showing demo data");
            let papers = demo_papers(&topic);
            let analysis = local_analysis(&papers, &topic);
            let advisory = format!("API Error: {cause}. Showing demo data instead.");
            (
                ResearchOutcome::DemoFallback {
                    reason: cause.to_string(),
                },
                session.finish(
                    papers,
                    analysis.literature_review,
                    analysis.key_findings,
                    Some(advisory),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Endpoint;

    #[test]
    fn test_unrecoverable_sets_advisory() {
        let cause = BackendError::Status {
            endpoint: Endpoint::Search,
            status: 502,
        };
        let (outcome, session) = recover(Failure::Unrecoverable(cause), ResearchSession::loading("t"));

        assert_eq!(
            session.error.as_deref(),
            Some("API Error: Search API failed: 502. Showing demo data instead.")
        );
        assert_eq!(session.papers, demo_papers("t"));
        assert!(!session.is_loading);
        assert!(matches!(outcome, ResearchOutcome::DemoFallback { .. }));
    }

    #[test]
    fn test_analysis_unavailable_keeps_papers() {
        let papers = vec![Paper::new("real-1", "Real").with_citations(4)];
        let failure = Failure::AnalysisUnavailable {
            papers: papers.clone(),
            cause: BackendError::InvalidFormat {
                endpoint: Endpoint::Analyze,
            },
        };
        let (outcome, session) = recover(failure, ResearchSession::loading("t").with_papers(papers.clone()));

        assert_eq!(session.papers, papers);
        assert_eq!(session.error, None);
        assert!(!session.literature_review.is_empty());
        assert_eq!(
            outcome,
            ResearchOutcome::AnalysisFallback {
                reason: "Analyze API returned invalid response format".into()
            }
        );
    }

    #[test]
    fn test_empty_search_has_no_advisory() {
        let (outcome, session) = recover(Failure::EmptySearch, ResearchSession::loading("t"));
        assert_eq!(outcome, ResearchOutcome::EmptySearchFallback);
        assert_eq!(session.error, None);
        assert_eq!(session.papers.len(), 3);
        assert_eq!(session.key_findings.len(), 6);
    }
}
