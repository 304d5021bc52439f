// HTTP backend talking to the AutoResearch API server

use crate::backend::ResearchBackend;
use crate::error::{BackendError, ClientError, Endpoint};
use async_trait::async_trait;
use autoresearch_types::{
    AnalyzeRequest, AnalyzeResponse, ChatRequest, ChatResponse, Paper, SearchRequest,
    SearchResponse,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Characters of an unexpected response body kept in logs.
const LOGGED_BODY_CHARS: usize = 200;

pub struct HttpBackend {
    http_client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<R, BackendError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let reqwest_err = |e| BackendError::from_reqwest(endpoint, self.timeout, e);

        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(reqwest_err)?;

        let status = response.status();
        tracing::debug!(%endpoint, status = status.as_u16(), "Response received");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::error!(
                %endpoint,
                status = status.as_u16(),
                body = %excerpt(&text),
                "API error response"
            );
            return Err(BackendError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));
        if !is_json {
            let text = response.text().await.unwrap_or_default();
            tracing::error!(%endpoint, body = %excerpt(&text), "Non-JSON response");
            return Err(BackendError::InvalidFormat { endpoint });
        }

        response.json::<R>().await.map_err(reqwest_err)
    }
}

fn excerpt(text: &str) -> String {
    text.chars().take(LOGGED_BODY_CHARS).collect()
}

#[async_trait]
impl ResearchBackend for HttpBackend {
    async fn search_papers(&self, query: &str) -> Result<Vec<Paper>, BackendError> {
        let response: SearchResponse = self
            .post(Endpoint::Search, &SearchRequest::new(query))
            .await?;
        Ok(response.papers)
    }

    async fn analyze_papers(
        &self,
        papers: &[Paper],
        topic: &str,
    ) -> Result<AnalyzeResponse, BackendError> {
        self.post(Endpoint::Analyze, &AnalyzeRequest::new(papers.to_vec(), topic))
            .await
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String, BackendError> {
        let response: ChatResponse = self.post(Endpoint::Chat, request).await?;
        Ok(response.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("http://localhost:3000/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(backend.base_url(), "http://localhost:3000");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_failure() {
        // Port 9 (discard) is closed on loopback in test environments.
        let backend = HttpBackend::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = backend.search_papers("q").await.unwrap_err();

        assert!(!err.is_answered_failure());
        assert_eq!(err.endpoint(), Endpoint::Search);
    }
}
