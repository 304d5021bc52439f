use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// The three endpoints a backend serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Analyze,
    Chat,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Search => "/search-papers",
            Self::Analyze => "/analyze-papers",
            Self::Chat => "/chat",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Search => "Search",
            Self::Analyze => "Analyze",
            Self::Chat => "Chat",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("{endpoint} API failed: {status}")]
    Status { endpoint: Endpoint, status: u16 },

    #[error("{endpoint} API returned invalid response format")]
    InvalidFormat { endpoint: Endpoint },

    #[error("{endpoint} API timed out after {}s", .timeout.as_secs_f64())]
    Timeout { endpoint: Endpoint, timeout: Duration },

    #[error("{endpoint} request failed: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} response could not be decoded: {message}")]
    Decode { endpoint: Endpoint, message: String },
}

impl BackendError {
    pub(crate) fn from_reqwest(endpoint: Endpoint, timeout: Duration, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { endpoint, timeout }
        } else if source.is_decode() {
            Self::Decode {
                endpoint,
                message: source.to_string(),
            }
        } else {
            Self::Transport { endpoint, source }
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Status { endpoint, .. }
            | Self::InvalidFormat { endpoint }
            | Self::Timeout { endpoint, .. }
            | Self::Transport { endpoint, .. }
            | Self::Decode { endpoint, .. } => *endpoint,
        }
    }

    /// The endpoint answered, but with a failure status or a non-JSON body.
    ///
    /// Only these failures let analysis degrade to local generation over the
    /// searched papers; everything else takes the demo fallback.
    pub fn is_answered_failure(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::InvalidFormat { .. })
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Research topic must not be empty")]
    EmptyTopic,

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_matches_ui_text() {
        let err = BackendError::Status {
            endpoint: Endpoint::Search,
            status: 500,
        };
        assert_eq!(err.to_string(), "Search API failed: 500");
        assert!(err.is_answered_failure());
    }

    #[test]
    fn test_invalid_format_message() {
        let err = BackendError::InvalidFormat {
            endpoint: Endpoint::Search,
        };
        assert_eq!(err.to_string(), "Search API returned invalid response format");
    }

    #[test]
    fn test_timeout_is_not_answered_failure() {
        let err = BackendError::Timeout {
            endpoint: Endpoint::Analyze,
            timeout: Duration::from_secs(30),
        };
        assert_eq!(err.to_string(), "Analyze API timed out after 30s");
        assert!(!err.is_answered_failure());
        assert_eq!(err.endpoint(), Endpoint::Analyze);
    }
}
