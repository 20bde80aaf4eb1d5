//! Evidence grading trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::verdict::EvidenceVerdict;
use crate::domain::passage::Passage;
use crate::domain::DomainError;

/// Grades a single passage for sufficiency against a question
///
/// Each call is independent of every other passage in the batch.
#[async_trait]
pub trait EvidenceGrader: Send + Sync + Debug {
    async fn grade(
        &self,
        question: &str,
        passage: &Passage,
    ) -> Result<EvidenceVerdict, DomainError>;

    /// Get the grader name
    fn grader_name(&self) -> &'static str;
}
