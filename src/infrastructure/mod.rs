//! Infrastructure layer - External service implementations

pub mod evaluation;
pub mod ingestion;
pub mod llm;
pub mod logging;
pub mod observability;
pub mod retrieval;
pub mod workflow;
