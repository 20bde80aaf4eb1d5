use async_trait::async_trait;
use serde::Deserialize;

use super::json::{deserialize_flag, parse_reply};
use super::prompts::{format_context, render, GROUNDEDNESS_SYSTEM, GROUNDEDNESS_USER};
use super::LlmInvoker;
use crate::domain::{DomainError, GroundednessChecker, GroundednessVerdict, Passage};

const CAPABILITY: &str = "llm_groundedness";

/// Checks an answer against the whole evidence set in one call
#[derive(Debug, Clone)]
pub struct LlmGroundednessChecker {
    invoker: LlmInvoker,
}

impl LlmGroundednessChecker {
    pub fn new(invoker: LlmInvoker) -> Self {
        Self { invoker }
    }
}

#[derive(Debug, Deserialize)]
struct GroundednessReply {
    #[serde(deserialize_with = "deserialize_flag")]
    binary_score: bool,
    #[serde(default = "default_confidence")]
    confidence: f32,
    #[serde(default)]
    reasoning: String,
}

fn default_confidence() -> f32 {
    0.5
}

#[async_trait]
impl GroundednessChecker for LlmGroundednessChecker {
    async fn check_grounded(
        &self,
        passages: &[Passage],
        answer: &str,
    ) -> Result<GroundednessVerdict, DomainError> {
        let context = format_context(passages);
        let user = render(GROUNDEDNESS_USER, &[("context", &context), ("answer", answer)]);

        let reply = self
            .invoker
            .complete(CAPABILITY, GROUNDEDNESS_SYSTEM, user, true)
            .await?;
        let parsed: GroundednessReply = parse_reply(CAPABILITY, &reply)?;

        Ok(GroundednessVerdict::new(parsed.binary_score, parsed.confidence)
            .with_reasoning(parsed.reasoning))
    }

    fn checker_name(&self) -> &'static str {
        "llm_groundedness"
    }
}
