//! Template library behind the AutoResearch endpoints.
//!
//! Every "service" here is deterministic string interpolation: search returns
//! a fixed catalog, analysis fills fixed review and findings templates, and
//! chat picks one of four canned answers by keyword.

pub mod analysis;
pub mod chat;
pub mod demo;
pub mod error;
pub mod local;
pub mod search;

pub use analysis::{Analysis, CitationStats, PaperAnalysisService};
pub use chat::{ChatResponder, Intent, PROMPT_FOR_INPUT};
pub use demo::demo_papers;
pub use error::{CorpusError, Result};
pub use local::{local_analysis, LocalAnalysis};
pub use search::PaperSearchService;
