//! Answer generation trait

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::passage::Passage;
use crate::domain::DomainError;

/// Produces a candidate answer from a question and evidence passages
///
/// Implementations may be stochastic; callers must not assume identical output for
/// identical input.
#[async_trait]
pub trait AnswerGenerator: Send + Sync + Debug {
    async fn generate(&self, question: &str, passages: &[Passage]) -> Result<String, DomainError>;

    /// Get the generator name
    fn generator_name(&self) -> &'static str;
}
