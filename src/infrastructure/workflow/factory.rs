use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::controller::{WorkflowCapabilities, WorkflowController};
use crate::config::{AppConfig, WebSearchConfig};
use crate::domain::{DomainError, Retriever, WebSearch};
use crate::infrastructure::evaluation::{
    LlmAnswerGenerator, LlmEvidenceGrader, LlmGroundednessChecker, LlmInvoker,
    LlmRelevanceChecker,
};
use crate::infrastructure::llm::{HttpClient, LlmProviderFactory};
use crate::infrastructure::retrieval::{RetrievalGateway, TavilyWebSearch};

/// Assembles a workflow controller from application configuration
#[derive(Debug)]
pub struct WorkflowFactory;

impl WorkflowFactory {
    pub fn create(
        config: &AppConfig,
        retriever: Option<Arc<dyn Retriever>>,
    ) -> Result<WorkflowController, DomainError> {
        let provider = LlmProviderFactory::create(&config.llm)?;
        let invoker = LlmInvoker::new(provider, config.llm.model.clone())
            .with_temperature(config.llm.temperature);

        let capabilities = WorkflowCapabilities {
            grader: Arc::new(LlmEvidenceGrader::new(invoker.clone())),
            generator: Arc::new(LlmAnswerGenerator::new(invoker.clone())),
            groundedness: Arc::new(LlmGroundednessChecker::new(invoker.clone())),
            relevance: Arc::new(LlmRelevanceChecker::new(invoker)),
        };

        let web_search = Self::create_web_search(&config.web_search)?;
        let gateway = Arc::new(RetrievalGateway::new(retriever, web_search));

        info!(
            llm_provider = %config.llm.provider,
            model = %config.llm.model,
            web_search = %config.web_search.provider,
            max_generation_retries = config.workflow.max_generation_retries,
            max_escalations = config.workflow.max_escalations,
            "Workflow controller configured"
        );

        WorkflowController::new(gateway, capabilities, config.workflow.clone())
            .map_err(|e| DomainError::configuration(e.to_string()))
    }

    pub fn create_web_search(config: &WebSearchConfig) -> Result<Arc<dyn WebSearch>, DomainError> {
        match config.provider.as_str() {
            "tavily" => {
                let api_key = config.resolve_api_key().ok_or_else(|| {
                    DomainError::configuration(
                        "Tavily API key missing: set web_search.api_key or TAVILY_API_KEY",
                    )
                })?;
                let http_client =
                    HttpClient::with_timeout(Duration::from_secs(config.timeout_secs))?;

                Ok(Arc::new(
                    TavilyWebSearch::with_base_url(http_client, api_key, &config.base_url)
                        .with_max_results(config.max_results),
                ))
            }
            other => Err(DomainError::configuration(format!(
                "Unsupported web search provider: {}",
                other
            ))),
        }
    }
}
