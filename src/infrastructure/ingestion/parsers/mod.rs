//! Document parser implementations

mod docx;
mod html;
mod markdown;
mod ooxml;
mod pdf;
mod plain_text;
mod xlsx;

pub use docx::DocxParser;
pub use html::HtmlParser;
pub use markdown::MarkdownParser;
pub use pdf::PdfParser;
pub use plain_text::PlainTextParser;
pub use xlsx::XlsxParser;

/// Collapse whitespace within lines and drop blank lines
fn tidy_lines(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
