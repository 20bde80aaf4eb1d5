//! Word (.docx) parser: paragraph text of the main document part

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;

use super::ooxml::Package;
use super::tidy_lines;
use crate::domain::ingestion::format::mime_type_for;
use crate::domain::ingestion::{DocumentMetadata, DocumentParser, ParsedDocument, ParserInput};
use crate::domain::DomainError;

const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, Clone, Default)]
pub struct DocxParser;

impl DocxParser {
    pub fn new() -> Self {
        Self
    }

    /// Text runs joined per paragraph, one line each
    fn document_text(xml: &str) -> Result<String, quick_xml::Error> {
        let mut reader = Reader::from_str(xml);
        let mut out = String::new();
        let mut in_text = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) if e.name().as_ref() == b"w:t" => in_text = true,
                Event::End(e) => match e.name().as_ref() {
                    b"w:t" => in_text = false,
                    b"w:p" => out.push('\n'),
                    _ => {}
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"w:tab" => out.push('\t'),
                    b"w:br" | b"w:cr" | b"w:p" => out.push('\n'),
                    _ => {}
                },
                Event::Text(t) if in_text => out.push_str(&t.unescape()?),
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(out)
    }
}

#[async_trait]
impl DocumentParser for DocxParser {
    async fn parse(&self, input: &ParserInput) -> Result<ParsedDocument, DomainError> {
        let mut package = Package::open(input)?;
        let xml = package.required_part(DOCUMENT_PART)?;
        let text =
            Self::document_text(&xml).map_err(|e| package.xml_error(DOCUMENT_PART, e))?;

        let mut metadata = DocumentMetadata::new()
            .with_source(&input.filename)
            .with_mime_type(mime_type_for(&input.filename));

        if let Some(title) = package.title()? {
            metadata = metadata.with_title(title);
        }

        Ok(ParsedDocument::new(tidy_lines(&text), metadata))
    }

    fn name(&self) -> &'static str {
        "docx"
    }
}
