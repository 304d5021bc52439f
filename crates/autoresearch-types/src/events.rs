use crate::session::ResearchSession;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonic identifier of a research run. Later runs compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run-{}", self.0)
    }
}

/// Which path produced the terminal session of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResearchOutcome {
    /// Search and analysis both succeeded.
    Completed,
    /// Search returned no papers; demo papers were analysed locally.
    EmptySearchFallback,
    /// Analysis was unavailable; the searched papers were analysed locally.
    AnalysisFallback { reason: String },
    /// The run failed outright; demo content is shown with an advisory error.
    DemoFallback { reason: String },
}

impl ResearchOutcome {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, Self::Completed)
    }
}

/// Session snapshots published while a run progresses.
///
/// Each event carries the full snapshot so consumers replace their copy
/// instead of patching it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResearchEvent {
    Started {
        run: RunId,
        session: ResearchSession,
        timestamp: i64,
    },
    PapersFound {
        run: RunId,
        session: ResearchSession,
    },
    Finished {
        run: RunId,
        outcome: ResearchOutcome,
        session: ResearchSession,
        duration_ms: u64,
    },
}

impl ResearchEvent {
    pub fn started(run: RunId, session: ResearchSession) -> Self {
        Self::Started {
            run,
            session,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn run(&self) -> RunId {
        match self {
            Self::Started { run, .. } | Self::PapersFound { run, .. } | Self::Finished { run, .. } => *run,
        }
    }

    pub fn session(&self) -> &ResearchSession {
        match self {
            Self::Started { session, .. }
            | Self::PapersFound { session, .. }
            | Self::Finished { session, .. } => session,
        }
    }

    pub fn into_session(self) -> ResearchSession {
        match self {
            Self::Started { session, .. }
            | Self::PapersFound { session, .. }
            | Self::Finished { session, .. } => session,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }

    /// SSE event name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Started { .. } => "started",
            Self::PapersFound { .. } => "papers_found",
            Self::Finished { .. } => "finished",
        }
    }
}
