//! Plain text, source code and text data files

use async_trait::async_trait;

use crate::domain::ingestion::format::mime_type_for;
use crate::domain::ingestion::{DocumentMetadata, DocumentParser, ParsedDocument, ParserInput};
use crate::domain::DomainError;

#[derive(Debug, Clone, Default)]
pub struct PlainTextParser;

impl PlainTextParser {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentParser for PlainTextParser {
    async fn parse(&self, input: &ParserInput) -> Result<ParsedDocument, DomainError> {
        let content = input.as_text()?.replace("\r\n", "\n");

        let metadata = DocumentMetadata::new()
            .with_source(&input.filename)
            .with_mime_type(mime_type_for(&input.filename));

        Ok(ParsedDocument::new(content.trim(), metadata))
    }

    fn name(&self) -> &'static str {
        "plain_text"
    }
}
