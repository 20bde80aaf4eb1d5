//! Local document retriever trait

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::passage::Passage;
use crate::domain::DomainError;

/// Looks up passages of the indexed document for a query
///
/// Results are ordered by the retriever's own ranking; callers never reorder them.
#[async_trait]
pub trait Retriever: Send + Sync + Debug {
    async fn retrieve(&self, query: &str) -> Result<Vec<Passage>, DomainError>;

    /// Name used in logs
    fn retriever_name(&self) -> &'static str;
}
