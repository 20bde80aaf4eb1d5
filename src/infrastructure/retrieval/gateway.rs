//! Retrieval gateway
//!
//! Puts the optional local retriever and the web search fallback behind one interface.
//! A retriever that fails once is discarded for the rest of the process lifetime
//! (until a new one is installed with [`RetrievalGateway::set_retriever`]).

use std::fmt;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::{DomainError, Passage, Retriever, WebSearch};
use crate::infrastructure::observability::record_retriever_invalidation;

/// Source label of synthesized web passages
pub const WEB_SEARCH_SOURCE: &str = "web_search";

/// Passages from the local retriever and whether web search is needed
#[derive(Debug, Clone)]
pub struct RetrievalOutcome {
    pub passages: Vec<Passage>,
    pub used_web_search: bool,
}

impl RetrievalOutcome {
    fn fallback() -> Self {
        Self {
            passages: Vec::new(),
            used_web_search: true,
        }
    }
}

pub struct RetrievalGateway {
    retriever: RwLock<Option<Arc<dyn Retriever>>>,
    web_search: Arc<dyn WebSearch>,
}

impl RetrievalGateway {
    pub fn new(retriever: Option<Arc<dyn Retriever>>, web_search: Arc<dyn WebSearch>) -> Self {
        Self {
            retriever: RwLock::new(retriever),
            web_search,
        }
    }

    /// Retrieve local passages, falling back to an empty set when unavailable
    pub async fn fetch(&self, question: &str) -> RetrievalOutcome {
        let Some(retriever) = self.retriever.read().await.clone() else {
            debug!("No retriever configured, falling back to web search");
            return RetrievalOutcome::fallback();
        };

        match retriever.retrieve(question).await {
            Ok(passages) => {
                debug!(
                    retriever = retriever.retriever_name(),
                    count = passages.len(),
                    "Retrieved local passages"
                );
                RetrievalOutcome {
                    passages,
                    used_web_search: false,
                }
            }
            Err(e) => {
                warn!(
                    retriever = retriever.retriever_name(),
                    error = %e,
                    "Retriever failed, invalidating it"
                );
                self.invalidate(&retriever).await;
                RetrievalOutcome::fallback()
            }
        }
    }

    /// Search the web and merge all snippets into one passage
    pub async fn search_online(&self, question: &str) -> Result<Passage, DomainError> {
        let results = self.web_search.search(question).await?;

        if results.is_empty() {
            warn!(
                provider = self.web_search.provider_name(),
                "Web search returned no results"
            );
        }

        let urls: Vec<serde_json::Value> = results
            .iter()
            .filter_map(|r| r.url.clone())
            .map(serde_json::Value::String)
            .collect();

        let content = results
            .into_iter()
            .map(|r| r.content)
            .collect::<Vec<_>>()
            .join("\n");

        Ok(Passage::web(content, WEB_SEARCH_SOURCE)
            .with_metadata("provider", self.web_search.provider_name().into())
            .with_metadata("urls", serde_json::Value::Array(urls)))
    }

    /// Install or remove the local retriever
    pub async fn set_retriever(&self, retriever: Option<Arc<dyn Retriever>>) {
        let installed = retriever.is_some();
        *self.retriever.write().await = retriever;
        info!(installed, "Retriever replaced");
    }

    pub async fn has_retriever(&self) -> bool {
        self.retriever.read().await.is_some()
    }

    /// Clear the retriever only if it is still the instance that failed
    async fn invalidate(&self, failed: &Arc<dyn Retriever>) {
        let mut current = self.retriever.write().await;

        let is_same = current
            .as_ref()
            .is_some_and(|r| Arc::ptr_eq(r, failed));

        if is_same {
            *current = None;
            record_retriever_invalidation();
        }
    }
}

impl fmt::Debug for RetrievalGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetrievalGateway")
            .field("web_search", &self.web_search.provider_name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::retrieval::{MockRetriever, MockWebSearch};
    use crate::domain::WebSearchResult;

    fn web_search_returning(results: Vec<WebSearchResult>) -> Arc<dyn WebSearch> {
        let mut mock = MockWebSearch::new();
        mock.expect_search()
            .returning(move |_| Ok(results.clone()));
        mock.expect_provider_name().return_const("mock");
        Arc::new(mock)
    }

    fn unused_web_search() -> Arc<dyn WebSearch> {
        let mut mock = MockWebSearch::new();
        mock.expect_search().never();
        mock.expect_provider_name().return_const("mock");
        Arc::new(mock)
    }

    #[tokio::test]
    async fn test_fetch_without_retriever_falls_back() {
        let gateway = RetrievalGateway::new(None, unused_web_search());

        let outcome = gateway.fetch("q").await;

        assert!(outcome.passages.is_empty());
        assert!(outcome.used_web_search);
        assert!(!gateway.has_retriever().await);
    }

    #[tokio::test]
    async fn test_fetch_returns_passages_unmodified() {
        let passages = vec![
            Passage::local("second ranked first", "doc"),
            Passage::local("first ranked second", "doc"),
        ];
        let retriever = Arc::new(MockRetriever::new().with_passages(passages.clone()));
        let gateway = RetrievalGateway::new(Some(retriever), unused_web_search());

        let outcome = gateway.fetch("q").await;

        assert_eq!(outcome.passages, passages);
        assert!(!outcome.used_web_search);
    }

    #[tokio::test]
    async fn test_failing_retriever_is_invalidated() {
        let retriever = Arc::new(MockRetriever::new().with_error("index closed"));
        let gateway = RetrievalGateway::new(Some(retriever.clone()), unused_web_search());

        let first = gateway.fetch("q").await;
        let second = gateway.fetch("q").await;

        assert!(first.used_web_search && first.passages.is_empty());
        assert!(second.used_web_search);
        assert_eq!(retriever.calls(), 1);
        assert!(!gateway.has_retriever().await);
    }

    #[tokio::test]
    async fn test_stale_failure_keeps_new_retriever() {
        let failed: Arc<dyn Retriever> = Arc::new(MockRetriever::new().with_error("gone"));
        let fresh: Arc<dyn Retriever> = Arc::new(MockRetriever::new());
        let gateway = RetrievalGateway::new(Some(fresh), unused_web_search());

        gateway.invalidate(&failed).await;

        assert!(gateway.has_retriever().await);
    }

    #[tokio::test]
    async fn test_set_and_clear_retriever() {
        let gateway = RetrievalGateway::new(None, unused_web_search());

        gateway
            .set_retriever(Some(Arc::new(MockRetriever::new())))
            .await;
        assert!(gateway.has_retriever().await);

        gateway.set_retriever(None).await;
        assert!(!gateway.has_retriever().await);
    }

    #[tokio::test]
    async fn test_search_online_joins_snippets() {
        let gateway = RetrievalGateway::new(
            None,
            web_search_returning(vec![
                WebSearchResult::new("First snippet").with_url("https://a.example"),
                WebSearchResult::new("Second snippet"),
            ]),
        );

        let passage = gateway.search_online("q").await.unwrap();

        assert!(passage.is_web());
        assert_eq!(passage.content, "First snippet\nSecond snippet");
        assert_eq!(passage.source, WEB_SEARCH_SOURCE);
        assert_eq!(
            passage.metadata.get("urls"),
            Some(&serde_json::json!(["https://a.example"]))
        );
    }

    #[tokio::test]
    async fn test_search_online_with_no_results() {
        let gateway = RetrievalGateway::new(None, web_search_returning(Vec::new()));

        let passage = gateway.search_online("q").await.unwrap();

        assert!(passage.is_web());
        assert!(passage.content.is_empty());
    }

    #[tokio::test]
    async fn test_search_online_failure_propagates() {
        let mut mock = MockWebSearch::new();
        mock.expect_search()
            .times(1)
            .returning(|_| Err(DomainError::provider("tavily", "HTTP 503")));
        mock.expect_provider_name().return_const("mock");
        let gateway = RetrievalGateway::new(None, Arc::new(mock));

        let result = gateway.search_online("q").await;

        assert!(matches!(result, Err(DomainError::Provider { .. })));
    }
}
