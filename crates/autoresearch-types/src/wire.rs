//! Request and response bodies of the HTTP endpoints.
//!
//! Response fields are optional on the client side so that partially shaped
//! payloads still decode and the orchestrator can apply its own defaults.

use crate::chat::ChatMessage;
use crate::paper::Paper;
use crate::session::ResearchSession;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
        }
    }
}

/// `null` decodes like a missing list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub papers: Vec<Paper>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn found(papers: Vec<Paper>) -> Self {
        Self { papers, error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            papers: Vec::new(),
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub papers: Option<Vec<Paper>>,
    #[serde(default)]
    pub topic: String,
}

impl AnalyzeRequest {
    pub fn new(papers: Vec<Paper>, topic: impl Into<String>) -> Self {
        Self {
            papers: Some(papers),
            topic: topic.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_papers: Option<Vec<Paper>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literature_review: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_findings: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyzeResponse {
    /// Well-formed payload returned alongside a failure status.
    pub fn failed(error: impl Into<String>, review: impl Into<String>, finding: impl Into<String>) -> Self {
        Self {
            analyzed_papers: Some(Vec::new()),
            literature_review: Some(review.into()),
            key_findings: Some(vec![finding.into()]),
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session: Option<ResearchSession>,
    /// Accepted for compatibility; keyword matching does not use it.
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, session: ResearchSession, chat_history: Vec<ChatMessage>) -> Self {
        Self {
            message: Some(message.into()),
            session: Some(session),
            chat_history,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ResearchRequest {
    #[serde(default)]
    pub topic: String,
}
