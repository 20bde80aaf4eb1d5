//! Document ingestion domain types and traits
//!
//! This module provides:
//! - `DocumentParser` trait for extracting text from an uploaded document
//! - `ChunkingStrategy` trait for splitting text into retrievable chunks
//! - `DocumentFormat` detection from file names

pub mod chunker;
pub mod format;
pub mod parser;

pub use chunker::{Chunk, ChunkMetadata, ChunkingConfig, ChunkingStrategy};
pub use format::DocumentFormat;
pub use parser::{DocumentMetadata, DocumentParser, ParsedDocument, ParserInput};
