use crate::paper::Paper;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Snapshot of one research run as the UI sees it.
///
/// Snapshots are values: every step of a run produces a new one instead of
/// mutating a shared object. While `is_loading` is true, `papers` may already
/// be populated with the review and findings still pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ResearchSession {
    pub topic: String,
    pub papers: Vec<Paper>,
    pub literature_review: String,
    pub key_findings: Vec<String>,
    pub is_loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResearchSession {
    /// Initial snapshot emitted when a run starts.
    pub fn loading(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn with_papers(self, papers: Vec<Paper>) -> Self {
        Self { papers, ..self }
    }

    /// Terminal snapshot. Always clears the loading flag.
    pub fn finish(
        self,
        papers: Vec<Paper>,
        literature_review: String,
        key_findings: Vec<String>,
        error: Option<String>,
    ) -> Self {
        Self {
            topic: self.topic,
            papers,
            literature_review,
            key_findings,
            is_loading: false,
            error,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading
    }
}
