use async_trait::async_trait;

use super::prompts::{format_context, render, GENERATOR_SYSTEM, GENERATOR_USER};
use super::LlmInvoker;
use crate::domain::{AnswerGenerator, DomainError, Passage};

const CAPABILITY: &str = "llm_generator";

/// Generates free-text answers from the question and evidence
#[derive(Debug, Clone)]
pub struct LlmAnswerGenerator {
    invoker: LlmInvoker,
}

impl LlmAnswerGenerator {
    pub fn new(invoker: LlmInvoker) -> Self {
        Self { invoker }
    }
}

#[async_trait]
impl AnswerGenerator for LlmAnswerGenerator {
    async fn generate(&self, question: &str, passages: &[Passage]) -> Result<String, DomainError> {
        let context = format_context(passages);
        let user = render(
            GENERATOR_USER,
            &[("context", &context), ("question", question)],
        );

        let answer = self
            .invoker
            .complete(CAPABILITY, GENERATOR_SYSTEM, user, false)
            .await?;

        Ok(answer.trim().to_string())
    }

    fn generator_name(&self) -> &'static str {
        "llm"
    }
}
