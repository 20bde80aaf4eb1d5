use async_trait::async_trait;
use serde::Deserialize;

use super::json::{deserialize_flag, parse_reply};
use super::prompts::{render, RELEVANCE_SYSTEM, RELEVANCE_USER};
use super::LlmInvoker;
use crate::domain::{Completeness, DomainError, RelevanceChecker, RelevanceVerdict};

const CAPABILITY: &str = "llm_relevance";

/// Checks whether an answer resolves the question
#[derive(Debug, Clone)]
pub struct LlmRelevanceChecker {
    invoker: LlmInvoker,
}

impl LlmRelevanceChecker {
    pub fn new(invoker: LlmInvoker) -> Self {
        Self { invoker }
    }
}

#[derive(Debug, Deserialize)]
struct RelevanceReply {
    #[serde(deserialize_with = "deserialize_flag")]
    binary_score: bool,
    #[serde(default = "default_score")]
    relevance_score: f32,
    #[serde(default)]
    completeness: Option<String>,
    #[serde(default)]
    reasoning: String,
    #[serde(default)]
    missing_aspects: String,
}

fn default_score() -> f32 {
    0.5
}

#[async_trait]
impl RelevanceChecker for LlmRelevanceChecker {
    async fn check_relevance(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<RelevanceVerdict, DomainError> {
        let user = render(RELEVANCE_USER, &[("question", question), ("answer", answer)]);

        let reply = self
            .invoker
            .complete(CAPABILITY, RELEVANCE_SYSTEM, user, true)
            .await?;
        let parsed: RelevanceReply = parse_reply(CAPABILITY, &reply)?;

        let completeness = parsed
            .completeness
            .as_deref()
            .map(Completeness::parse)
            .unwrap_or_default();

        Ok(RelevanceVerdict::new(parsed.binary_score, parsed.relevance_score)
            .with_completeness(completeness)
            .with_reasoning(parsed.reasoning)
            .with_missing_aspects(parsed.missing_aspects))
    }

    fn checker_name(&self) -> &'static str {
        "llm_relevance"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MockLlmProvider;
    use std::sync::Arc;

    fn checker(reply: &str) -> LlmRelevanceChecker {
        let provider = Arc::new(MockLlmProvider::new("mock").with_reply(reply));
        LlmRelevanceChecker::new(LlmInvoker::new(provider, "m"))
    }

    #[tokio::test]
    async fn test_relevant_answer() {
        let verdict = checker(
            r#"{"binary_score": true, "relevance_score": 0.95, "completeness": "complete"}"#,
        )
        .check_relevance("Who wrote it?", "Jane wrote it.")
        .await
        .unwrap();

        assert!(verdict.addresses_question);
        assert_eq!(verdict.completeness, Completeness::Complete);
    }

    #[tokio::test]
    async fn test_irrelevant_answer_with_defaults() {
        let verdict = checker(r#"{"binary_score": false, "missing_aspects": "the author"}"#)
            .check_relevance("Who wrote it?", "It is a book.")
            .await
            .unwrap();

        assert!(!verdict.addresses_question);
        assert_eq!(verdict.completeness, Completeness::Partial);
        assert!((verdict.relevance_score - 0.5).abs() < f32::EPSILON);
        assert_eq!(verdict.missing_aspects, "the author");
    }

    #[tokio::test]
    async fn test_malformed_reply_is_error() {
        let result = checker("{not json}").check_relevance("q", "a").await;
        assert!(result.is_err());
    }
}
