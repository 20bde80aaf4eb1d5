use std::sync::Arc;
use std::time::Duration;

use super::http_client::HttpClient;
use super::OpenAiProvider;
use crate::config::LlmConfig;
use crate::domain::{DomainError, LlmProvider};

/// Factory for creating LLM providers
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create an LLM provider from configuration
    pub fn create(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, DomainError> {
        match config.provider.as_str() {
            "openai" => {
                let api_key = config.resolve_api_key().ok_or_else(|| {
                    DomainError::configuration(
                        "OpenAI API key missing: set llm.api_key or OPENAI_API_KEY",
                    )
                })?;
                let http_client = HttpClient::with_timeout(Duration::from_secs(config.timeout_secs))?;

                let provider = match config.base_url {
                    Some(ref base_url) => {
                        OpenAiProvider::with_base_url(http_client, api_key, base_url)
                    }
                    None => OpenAiProvider::new(http_client, api_key),
                };

                Ok(Arc::new(provider))
            }
            other => Err(DomainError::configuration(format!(
                "Unsupported LLM provider: {}",
                other
            ))),
        }
    }
}
