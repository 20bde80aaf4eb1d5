//! Format-aware document loading

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::parsers::{
    DocxParser, HtmlParser, MarkdownParser, PdfParser, PlainTextParser, XlsxParser,
};
use crate::domain::{DocumentFormat, DocumentParser, DomainError, ParsedDocument, ParserInput};

/// Picks a parser by file extension and extracts text
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    plain_text: Arc<dyn DocumentParser>,
    markdown: Arc<dyn DocumentParser>,
    html: Arc<dyn DocumentParser>,
    pdf: Arc<dyn DocumentParser>,
    docx: Arc<dyn DocumentParser>,
    xlsx: Arc<dyn DocumentParser>,
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self {
            plain_text: Arc::new(PlainTextParser::new()),
            markdown: Arc::new(MarkdownParser::new()),
            html: Arc::new(HtmlParser::new()),
            pdf: Arc::new(PdfParser::new()),
            docx: Arc::new(DocxParser::new()),
            xlsx: Arc::new(XlsxParser::new()),
        }
    }

    fn parser_for(&self, format: DocumentFormat) -> &Arc<dyn DocumentParser> {
        match format {
            DocumentFormat::PlainText => &self.plain_text,
            DocumentFormat::Markdown => &self.markdown,
            DocumentFormat::Html => &self.html,
            DocumentFormat::Pdf => &self.pdf,
            DocumentFormat::Docx => &self.docx,
            DocumentFormat::Xlsx => &self.xlsx,
        }
    }

    /// Parse uploaded content
    pub async fn load(&self, input: &ParserInput) -> Result<ParsedDocument, DomainError> {
        let format = DocumentFormat::from_filename(&input.filename).ok_or_else(|| {
            DomainError::ingestion(format!("Unsupported file type: '{}'", input.filename))
        })?;

        let parser = self.parser_for(format);
        debug!(
            file_name = %input.filename,
            parser = parser.name(),
            bytes = input.content.len(),
            "Parsing document"
        );

        parser.parse(input).await
    }

    /// Read and parse a file from disk
    pub async fn load_path(&self, path: &Path) -> Result<ParsedDocument, DomainError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                DomainError::ingestion(format!("Not a file path: '{}'", path.display()))
            })?;

        let content = tokio::fs::read(path).await.map_err(|e| {
            DomainError::ingestion(format!("Failed to read '{}': {}", path.display(), e))
        })?;

        self.load(&ParserInput::new(file_name, content)).await
    }
}
