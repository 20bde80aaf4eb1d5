//! Evidence source capabilities: local document retrieval and web search

mod retriever;
mod web_search;

pub use retriever::Retriever;
pub use web_search::{WebSearch, WebSearchResult};

#[cfg(test)]
pub use retriever::mock::MockRetriever;
#[cfg(test)]
pub use web_search::MockWebSearch;
