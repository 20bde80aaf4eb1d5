//! LLM-backed evaluation capabilities
//!
//! Each capability renders its prompt, calls the configured chat model and parses the
//! reply into a domain verdict. Structured replies use JSON mode.

mod generator;
mod grader;
mod groundedness;
mod json;
mod prompts;
mod relevance;

pub use generator::LlmAnswerGenerator;
pub use grader::LlmEvidenceGrader;
pub use groundedness::LlmGroundednessChecker;
pub use relevance::LlmRelevanceChecker;

use std::sync::Arc;

use tracing::debug;

use crate::domain::{DomainError, LlmProvider, LlmRequest};

/// Model settings shared by the LLM-backed capabilities
#[derive(Debug, Clone)]
pub struct LlmInvoker {
    provider: Arc<dyn LlmProvider>,
    model: String,
    temperature: f32,
}

impl LlmInvoker {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: 0.0,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one system + user exchange and return the reply text
    async fn complete(
        &self,
        capability: &'static str,
        system: &str,
        user: String,
        json_output: bool,
    ) -> Result<String, DomainError> {
        let mut builder = LlmRequest::builder()
            .system(system)
            .user(user)
            .temperature(self.temperature);

        if json_output {
            builder = builder.json_output();
        }

        debug!(capability, model = %self.model, "Invoking LLM");

        let response = self.provider.chat(&self.model, builder.build()).await?;

        response
            .content()
            .map(str::to_string)
            .ok_or_else(|| DomainError::provider(capability, "Empty response from LLM"))
    }
}
