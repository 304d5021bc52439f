use autoresearch_corpus::CorpusError;
use autoresearch_types::{AnalyzeResponse, SearchResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing search query")]
    MissingQuery,

    #[error("Invalid papers data")]
    InvalidPapers,

    #[error("Failed to search papers")]
    SearchFailed(#[source] CorpusError),

    #[error("Failed to analyze papers")]
    AnalysisFailed(#[source] CorpusError),

    #[error("Research topic must not be empty")]
    EmptyTopic,

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn search(err: CorpusError) -> Self {
        match err {
            CorpusError::InvalidInput(_) => Self::MissingQuery,
            CorpusError::Internal(_) => Self::SearchFailed(err),
        }
    }

    pub fn analysis(err: CorpusError) -> Self {
        match err {
            CorpusError::InvalidInput(_) => Self::InvalidPapers,
            CorpusError::Internal(_) => Self::AnalysisFailed(err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingQuery | Self::InvalidPapers | Self::EmptyTopic | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::SearchFailed(_) | Self::AnalysisFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Answer with `body` instead of the bare `{error}` object.
    pub fn degrade<T: Serialize>(self, body: T) -> Degraded<T> {
        Degraded { error: self, body }
    }

    pub fn degrade_search(self) -> Degraded<SearchResponse> {
        let body = SearchResponse::failed(self.to_string());
        self.degrade(body)
    }

    pub fn degrade_analysis(self) -> Degraded<AnalyzeResponse> {
        let cause = if self.status().is_client_error() {
            "invalid input"
        } else {
            "server error"
        };
        let body = AnalyzeResponse::failed(
            self.to_string(),
            format!("Analysis failed due to {cause}. Please try again."),
            format!("Unable to generate analysis due to {cause}"),
        );
        self.degrade(body)
    }

    fn log(&self) {
        match self {
            Self::SearchFailed(source) | Self::AnalysisFailed(source) => {
                tracing::error!(error = %self, source = %source, "Internal failure");
            }
            _ => tracing::warn!(error = %self, "Rejected request"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let body = Json(json!({
            "error": self.to_string()
        }));

        (self.status(), body).into_response()
    }
}

/// A failure answered with an endpoint-specific payload.
#[derive(Debug)]
pub struct Degraded<T> {
    pub error: ApiError,
    pub body: T,
}

impl<T: Serialize> IntoResponse for Degraded<T> {
    fn into_response(self) -> Response {
        self.error.log();
        (self.error.status(), Json(self.body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
