//! Evidence sources: the retrieval gateway, the in-memory document retriever and
//! the Tavily web search client

mod gateway;
mod in_memory;
mod tavily;

pub use gateway::{RetrievalGateway, RetrievalOutcome};
pub use in_memory::InMemoryRetriever;
pub use tavily::TavilyWebSearch;
