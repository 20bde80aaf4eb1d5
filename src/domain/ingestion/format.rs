//! Document format detection

use serde::{Deserialize, Serialize};

/// Document formats the loader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    /// Plain text, source code and text data formats
    PlainText,
    Markdown,
    Html,
    Pdf,
    /// Word documents (Office Open XML)
    Docx,
    /// Excel workbooks (Office Open XML)
    Xlsx,
}

const PLAIN_TEXT_EXTENSIONS: &[&str] = &[
    "txt", "text", "csv", "tsv", "log", "json", "xml", "yaml", "yml", "toml", "ini", "py", "js",
    "ts", "java", "c", "h", "cpp", "hpp", "cs", "go", "rs", "rb", "php", "sh", "sql", "css",
];

impl DocumentFormat {
    /// Detect the format from a file name's extension
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        let ext = ext.to_lowercase();

        match ext.as_str() {
            "md" | "markdown" => Some(Self::Markdown),
            "html" | "htm" => Some(Self::Html),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "xlsx" => Some(Self::Xlsx),
            e if PLAIN_TEXT_EXTENSIONS.contains(&e) => Some(Self::PlainText),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "plain_text",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
        }
    }
}

/// Best-effort MIME label for a file name
pub fn mime_type_for(filename: &str) -> String {
    mime_guess::from_path(filename)
        .first_or_text_plain()
        .essence_str()
        .to_string()
}
