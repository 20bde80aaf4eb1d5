use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::json::{deserialize_affirmative, parse_reply};
use super::prompts::{render, GRADER_SYSTEM, GRADER_USER};
use super::LlmInvoker;
use crate::domain::{DomainError, EvidenceGrader, EvidenceVerdict, Passage};

const CAPABILITY: &str = "llm_grader";

/// Grades one passage per LLM call
#[derive(Debug, Clone)]
pub struct LlmEvidenceGrader {
    invoker: LlmInvoker,
}

impl LlmEvidenceGrader {
    pub fn new(invoker: LlmInvoker) -> Self {
        Self { invoker }
    }
}

#[derive(Debug, Deserialize)]
struct GradeReply {
    #[serde(deserialize_with = "deserialize_affirmative")]
    score: bool,
    #[serde(default = "default_score")]
    relevance_score: f32,
    #[serde(default)]
    coverage_assessment: String,
    #[serde(default)]
    missing_information: String,
}

fn default_score() -> f32 {
    0.5
}

#[async_trait]
impl EvidenceGrader for LlmEvidenceGrader {
    async fn grade(
        &self,
        question: &str,
        passage: &Passage,
    ) -> Result<EvidenceVerdict, DomainError> {
        let user = render(
            GRADER_USER,
            &[("question", question), ("document", &passage.content)],
        );

        let reply = self
            .invoker
            .complete(CAPABILITY, GRADER_SYSTEM, user, true)
            .await?;
        let parsed: GradeReply = parse_reply(CAPABILITY, &reply)?;

        debug!(
            source = %passage.source,
            sufficient = parsed.score,
            relevance_score = parsed.relevance_score,
            "Passage graded"
        );

        Ok(EvidenceVerdict::new(parsed.score, parsed.relevance_score)
            .with_coverage_note(parsed.coverage_assessment)
            .with_missing_info(parsed.missing_information))
    }

    fn grader_name(&self) -> &'static str {
        "llm"
    }
}
