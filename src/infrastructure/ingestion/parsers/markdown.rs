//! Markdown parser: flattens rendered blocks to text lines

use async_trait::async_trait;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};

use crate::domain::ingestion::{DocumentMetadata, DocumentParser, ParsedDocument, ParserInput};
use crate::domain::DomainError;

#[derive(Debug, Clone, Default)]
pub struct MarkdownParser;

/// Accumulates one text block at a time
#[derive(Default)]
struct BlockCollector {
    blocks: Vec<String>,
    current: String,
    title: Option<String>,
    in_title: bool,
    pending_bullet: bool,
}

impl BlockCollector {
    fn flush(&mut self) {
        let block = self.current.trim();
        if !block.is_empty() {
            if self.in_title && self.title.is_none() {
                self.title = Some(block.to_string());
            }
            self.blocks.push(block.to_string());
        }
        self.current.clear();
    }

    fn push(&mut self, text: &str) {
        if self.pending_bullet {
            self.current.push_str("- ");
            self.pending_bullet = false;
        }
        self.current.push_str(text);
    }

    fn finish(mut self) -> (String, Option<String>) {
        self.flush();
        (self.blocks.join("\n"), self.title)
    }
}

impl MarkdownParser {
    pub fn new() -> Self {
        Self
    }

    fn extract(markdown: &str) -> (String, Option<String>) {
        let mut collector = BlockCollector::default();

        for event in Parser::new(markdown) {
            match event {
                Event::Start(Tag::Heading(level, ..)) => {
                    collector.flush();
                    collector.in_title = level == HeadingLevel::H1;
                }
                Event::End(Tag::Heading(..)) => {
                    collector.flush();
                    collector.in_title = false;
                }
                Event::Start(Tag::Item) => {
                    collector.flush();
                    collector.pending_bullet = true;
                }
                Event::Start(Tag::Paragraph | Tag::CodeBlock(_) | Tag::TableRow)
                | Event::End(Tag::Paragraph | Tag::CodeBlock(_) | Tag::Item | Tag::TableRow) => {
                    collector.flush();
                }
                Event::Text(text) | Event::Code(text) => collector.push(&text),
                Event::SoftBreak | Event::HardBreak => collector.push(" "),
                Event::End(Tag::TableCell) => collector.push(" "),
                _ => {}
            }
        }

        collector.finish()
    }
}

#[async_trait]
impl DocumentParser for MarkdownParser {
    async fn parse(&self, input: &ParserInput) -> Result<ParsedDocument, DomainError> {
        let (content, title) = Self::extract(input.as_text()?);

        let mut metadata = DocumentMetadata::new()
            .with_source(&input.filename)
            .with_mime_type("text/markdown");

        if let Some(title) = title {
            metadata = metadata.with_title(title);
        }

        Ok(ParsedDocument::new(content, metadata))
    }

    fn name(&self) -> &'static str {
        "markdown"
    }
}
