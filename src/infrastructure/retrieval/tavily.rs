//! Tavily web search client

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{DomainError, WebSearch, WebSearchResult};
use crate::infrastructure::llm::HttpClientTrait;

const DEFAULT_TAVILY_BASE_URL: &str = "https://api.tavily.com";

#[derive(Debug)]
pub struct TavilyWebSearch<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    base_url: String,
    max_results: usize,
}

impl<C: HttpClientTrait> TavilyWebSearch<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_TAVILY_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            auth_header: format!("Bearer {}", api_key.into()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_results: 2,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    #[serde(default)]
    content: String,
    url: Option<String>,
    title: Option<String>,
}

#[async_trait]
impl<C: HttpClientTrait> WebSearch for TavilyWebSearch<C> {
    async fn search(&self, query: &str) -> Result<Vec<WebSearchResult>, DomainError> {
        let body = serde_json::json!({
            "query": query,
            "max_results": self.max_results,
        });
        let headers = vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ];

        let json = self
            .client
            .post_json(&self.search_url(), headers, &body)
            .await
            .map_err(|e| DomainError::provider("tavily", e.to_string()))?;

        let response: TavilyResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("tavily", format!("Failed to parse response: {}", e))
        })?;

        debug!(count = response.results.len(), "Tavily search completed");

        Ok(response
            .results
            .into_iter()
            .take(self.max_results)
            .map(|r| WebSearchResult {
                content: r.content,
                url: r.url,
                title: r.title,
            })
            .collect())
    }

    fn provider_name(&self) -> &'static str {
        "tavily"
    }
}
