//! Document ingestion: parsing, chunking and indexing into a local retriever

pub mod chunkers;
mod indexer;
mod loader;
pub mod parsers;

pub use chunkers::FixedSizeChunker;
pub use indexer::{DocumentIndexer, IndexSummary, IndexedDocument};
pub use loader::DocumentLoader;
pub use parsers::{
    DocxParser, HtmlParser, MarkdownParser, PdfParser, PlainTextParser, XlsxParser,
};
