//! HTML parser: visible text of the body, one line per block element

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};

use super::tidy_lines;
use crate::domain::ingestion::{DocumentMetadata, DocumentParser, ParsedDocument, ParserInput};
use crate::domain::DomainError;

const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "head", "template"];

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "h1", "h2", "h3", "h4", "h5", "h6", "li", "tr", "br",
    "pre", "blockquote", "table", "ul", "ol",
];

#[derive(Debug, Clone, Default)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }

    fn title(document: &Html) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        let title: String = document.select(&selector).next()?.text().collect();
        let title = title.trim();

        (!title.is_empty()).then(|| title.to_string())
    }

    fn walk(element: ElementRef<'_>, out: &mut String) {
        for child in element.children() {
            if let Some(el) = ElementRef::wrap(child) {
                let tag = el.value().name();
                if SKIPPED_TAGS.contains(&tag) {
                    continue;
                }

                let is_block = BLOCK_TAGS.contains(&tag);
                if is_block {
                    out.push('\n');
                }
                Self::walk(el, out);
                if is_block {
                    out.push('\n');
                }
            } else if let Some(text) = child.value().as_text() {
                out.push_str(text);
            }
        }
    }

    fn body_text(document: &Html) -> String {
        let mut raw = String::new();

        let selector = Selector::parse("body").ok();
        let body = selector
            .as_ref()
            .and_then(|selector| document.select(selector).next());
        Self::walk(body.unwrap_or_else(|| document.root_element()), &mut raw);

        tidy_lines(&raw)
    }
}

#[async_trait]
impl DocumentParser for HtmlParser {
    async fn parse(&self, input: &ParserInput) -> Result<ParsedDocument, DomainError> {
        let document = Html::parse_document(input.as_text()?);

        let mut metadata = DocumentMetadata::new()
            .with_source(&input.filename)
            .with_mime_type("text/html");

        if let Some(title) = Self::title(&document) {
            metadata = metadata.with_title(title);
        }

        Ok(ParsedDocument::new(Self::body_text(&document), metadata))
    }

    fn name(&self) -> &'static str {
        "html"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parse_html() {
        let html = r#"<html>
            <head><title> Atlas </title><style>p { color: red; }</style></head>
            <body>
                <h1>Capitals</h1>
                <p>Paris is the   capital of <b>France</b>.</p>
                <script>var ignored = true;</script>
                <ul><li>Berlin</li><li>Madrid</li></ul>
            </body>
        </html>"#;
        let input = ParserInput::new("atlas.html", html.as_bytes().to_vec());

        let parsed = HtmlParser::new().parse(&input).await.unwrap();

        assert_eq!(parsed.metadata.title.as_deref(), Some("Atlas"));
        assert_eq!(
            parsed.content,
            "Capitals\nParis is the capital of France.\nBerlin\nMadrid"
        );
    }

    #[tokio::test]
    async fn test_fragment_without_body() {
        let input = ParserInput::new("frag.htm", b"<p>Just text</p>".to_vec());

        let parsed = HtmlParser::new().parse(&input).await.unwrap();

        assert_eq!(parsed.content, "Just text");
        assert!(parsed.metadata.title.is_none());
    }
}
