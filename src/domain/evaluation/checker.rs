//! Answer checking traits

use async_trait::async_trait;
use std::fmt::Debug;

use super::verdict::{GroundednessVerdict, RelevanceVerdict};
use crate::domain::passage::Passage;
use crate::domain::DomainError;

/// Judges whether an answer is supported by the evidence set as a whole
#[async_trait]
pub trait GroundednessChecker: Send + Sync + Debug {
    async fn check_grounded(
        &self,
        passages: &[Passage],
        answer: &str,
    ) -> Result<GroundednessVerdict, DomainError>;

    fn checker_name(&self) -> &'static str;
}

/// Judges whether an answer resolves the question, independent of grounding
#[async_trait]
pub trait RelevanceChecker: Send + Sync + Debug {
    async fn check_relevance(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<RelevanceVerdict, DomainError>;

    fn checker_name(&self) -> &'static str;
}
