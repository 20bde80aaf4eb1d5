//! Domain layer - Core business logic and entities

pub mod error;
pub mod evaluation;
pub mod ingestion;
pub mod llm;
pub mod passage;
pub mod retrieval;
pub mod workflow;

pub use error::DomainError;
pub use evaluation::{
    AnswerGenerator, Completeness, EvidenceGrader, EvidenceVerdict, GroundednessChecker,
    GroundednessVerdict, RelevanceChecker, RelevanceVerdict,
};
pub use ingestion::{
    Chunk, ChunkMetadata, ChunkingConfig, ChunkingStrategy, DocumentFormat, DocumentMetadata,
    DocumentParser, ParsedDocument, ParserInput,
};
pub use llm::{
    FinishReason, LlmProvider, LlmRequest, LlmRequestBuilder, LlmResponse, LlmResponseFormat,
    Message, MessageRole, Usage,
};
pub use passage::{Passage, PassageOrigin};
pub use retrieval::{Retriever, WebSearch, WebSearchResult};
pub use workflow::{
    transition, CheckOutcome, RunState, SearchMethod, SearchReason, StepSignal, UnresolvedReason,
    WorkflowConfig, WorkflowError, WorkflowOutcome, WorkflowStatus, WorkflowStep,
};
