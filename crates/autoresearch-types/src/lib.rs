pub mod chat;
pub mod events;
pub mod paper;
pub mod session;
pub mod wire;

pub use chat::{ChatMessage, ChatRole};
pub use events::{ResearchEvent, ResearchOutcome, RunId};
pub use paper::{Author, Paper, DEFAULT_YEAR};
pub use session::ResearchSession;
pub use wire::{
    AnalyzeRequest, AnalyzeResponse, ChatRequest, ChatResponse, ResearchRequest, SearchRequest,
    SearchResponse,
};
