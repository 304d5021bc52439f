//! Client side of AutoResearch.
//!
//! The [`Orchestrator`] drives a research run against any
//! [`ResearchBackend`] and always ends in a terminal session, falling back to
//! locally generated content when the backend misbehaves.

pub mod backend;
pub mod error;
pub mod fallback;
pub mod http;
pub mod orchestrator;
pub mod report;
pub mod store;
pub mod transcript;

pub use backend::{InProcessBackend, ResearchBackend};
pub use error::{BackendError, ClientError, Endpoint, Result};
pub use fallback::{recover, Failure, FINDINGS_PLACEHOLDER, LIMITED_REVIEW_PLACEHOLDER};
pub use http::{HttpBackend, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use orchestrator::{CompletedRun, Orchestrator, RunHandle, DEFAULT_EVENT_BUFFER};
pub use report::{
    is_linkable_url, paper_file_name, render_paper, render_report, report_file_name, save_paper,
    save_report,
};
pub use store::SessionStore;
pub use transcript::{ChatTranscript, CHAT_FAILURE_REPLY};
