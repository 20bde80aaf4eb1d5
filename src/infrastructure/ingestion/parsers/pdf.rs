//! PDF parser: text layer of every page

use async_trait::async_trait;

use super::tidy_lines;
use crate::domain::ingestion::{DocumentMetadata, DocumentParser, ParsedDocument, ParserInput};
use crate::domain::DomainError;

#[derive(Debug, Clone, Default)]
pub struct PdfParser;

impl PdfParser {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentParser for PdfParser {
    async fn parse(&self, input: &ParserInput) -> Result<ParsedDocument, DomainError> {
        let bytes = input.content.clone();

        // Extraction is CPU-bound and may panic on damaged files
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| {
                DomainError::ingestion(format!(
                    "Text extraction from '{}' failed: {}",
                    input.filename, e
                ))
            })?
            .map_err(|e| {
                DomainError::ingestion(format!(
                    "'{}' is not a readable PDF: {}",
                    input.filename, e
                ))
            })?;

        let metadata = DocumentMetadata::new()
            .with_source(&input.filename)
            .with_mime_type("application/pdf");

        Ok(ParsedDocument::new(tidy_lines(&text), metadata))
    }

    fn name(&self) -> &'static str {
        "pdf"
    }
}
