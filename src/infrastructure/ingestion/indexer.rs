//! Builds a local retriever from one document

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::chunkers::FixedSizeChunker;
use super::loader::DocumentLoader;
use crate::domain::{
    ChunkingConfig, ChunkingStrategy, DomainError, ParsedDocument, ParserInput, Retriever,
};
use crate::infrastructure::retrieval::InMemoryRetriever;

/// A document ready to be installed in the retrieval gateway
#[derive(Debug, Clone)]
pub struct IndexedDocument {
    pub retriever: Arc<dyn Retriever>,
    pub summary: IndexSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexSummary {
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub chunks: usize,
    pub characters: usize,
}

#[derive(Debug, Clone)]
pub struct DocumentIndexer {
    loader: DocumentLoader,
    chunker: Arc<dyn ChunkingStrategy>,
    chunking: ChunkingConfig,
    top_k: usize,
}

impl DocumentIndexer {
    pub fn new(chunking: ChunkingConfig, top_k: usize) -> Result<Self, DomainError> {
        chunking.validate()?;

        if top_k == 0 {
            return Err(DomainError::validation("top_k must be greater than 0"));
        }

        Ok(Self {
            loader: DocumentLoader::new(),
            chunker: Arc::new(FixedSizeChunker::new()),
            chunking,
            top_k,
        })
    }

    /// Parse, chunk and index uploaded content
    pub async fn index(&self, input: ParserInput) -> Result<IndexedDocument, DomainError> {
        let parsed = self.loader.load(&input).await?;
        self.build(input.filename, parsed)
    }

    /// Parse, chunk and index a file on disk
    pub async fn index_path(&self, path: &Path) -> Result<IndexedDocument, DomainError> {
        let parsed = self.loader.load_path(path).await?;
        let file_name = parsed
            .metadata
            .source
            .clone()
            .unwrap_or_else(|| path.display().to_string());

        self.build(file_name, parsed)
    }

    fn build(&self, file_name: String, parsed: ParsedDocument) -> Result<IndexedDocument, DomainError> {
        let chunks = self.chunker.chunk(&parsed.content, &self.chunking)?;

        if chunks.is_empty() {
            return Err(DomainError::ingestion(format!(
                "'{}' contains no text",
                file_name
            )));
        }

        let summary = IndexSummary {
            file_name: file_name.clone(),
            title: parsed.metadata.title,
            chunks: chunks.len(),
            characters: parsed.content.chars().count(),
        };

        info!(
            file_name = %summary.file_name,
            chunks = summary.chunks,
            chunker = self.chunker.name(),
            "Document indexed"
        );

        Ok(IndexedDocument {
            retriever: Arc::new(InMemoryRetriever::new(file_name, chunks, self.top_k)),
            summary,
        })
    }
}
