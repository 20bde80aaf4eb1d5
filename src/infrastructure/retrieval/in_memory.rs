//! In-memory lexical retriever over the chunks of one document

use std::collections::HashSet;

use async_trait::async_trait;
use unicode_segmentation::UnicodeSegmentation;

use crate::domain::{Chunk, DomainError, Passage, Retriever};

/// Ranks chunks by the number of distinct query words they contain
#[derive(Debug)]
pub struct InMemoryRetriever {
    entries: Vec<IndexedChunk>,
    top_k: usize,
}

#[derive(Debug)]
struct IndexedChunk {
    passage: Passage,
    terms: HashSet<String>,
}

/// Function words that never count towards overlap
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "do", "does", "for", "from", "how", "in",
    "is", "it", "of", "on", "or", "that", "the", "this", "to", "was", "were", "what", "when",
    "where", "which", "who", "why", "with",
];

fn tokenize(text: &str) -> HashSet<String> {
    text.unicode_words()
        .map(|w| w.to_lowercase())
        .filter(|w| !STOPWORDS.contains(&w.as_str()))
        .collect()
}

impl InMemoryRetriever {
    pub fn new(source: impl Into<String>, chunks: Vec<Chunk>, top_k: usize) -> Self {
        let source = source.into();

        let entries = chunks
            .into_iter()
            .map(|chunk| {
                let terms = tokenize(&chunk.content);
                let mut passage = Passage::local(chunk.content, source.clone());
                for (key, value) in chunk.metadata.to_json_map() {
                    passage = passage.with_metadata(key, value);
                }

                IndexedChunk { passage, terms }
            })
            .collect();

        Self { entries, top_k }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl Retriever for InMemoryRetriever {
    async fn retrieve(&self, query: &str) -> Result<Vec<Passage>, DomainError> {
        let query_terms = tokenize(query);

        let mut scored: Vec<(usize, usize)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (index, entry.terms.intersection(&query_terms).count()))
            .filter(|(_, overlap)| *overlap > 0)
            .collect();

        // Stable sort keeps chunk order among equal scores
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        Ok(scored
            .into_iter()
            .take(self.top_k)
            .map(|(index, _)| self.entries[index].passage.clone())
            .collect())
    }

    fn retriever_name(&self) -> &'static str {
        "in_memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChunkMetadata;

    fn chunks(texts: &[&str]) -> Vec<Chunk> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Chunk::new(*t, ChunkMetadata::new(i, texts.len(), 0, t.len())))
            .collect()
    }

    #[tokio::test]
    async fn test_ranks_by_overlap() {
        let retriever = InMemoryRetriever::new(
            "atlas.txt",
            chunks(&[
                "Rivers of Europe",
                "Paris is the capital of France",
                "France borders Spain",
            ]),
            4,
        );

        let passages = retriever
            .retrieve("What is the capital of France?")
            .await
            .unwrap();

        assert_eq!(passages.len(), 2);
        assert_eq!(passages[0].content, "Paris is the capital of France");
        assert_eq!(passages[1].content, "France borders Spain");
        assert_eq!(passages[0].source, "atlas.txt");
        assert_eq!(
            passages[0].metadata.get("chunk_index"),
            Some(&serde_json::json!(1))
        );
    }

    #[tokio::test]
    async fn test_ties_keep_chunk_order_and_top_k() {
        let retriever = InMemoryRetriever::new(
            "doc",
            chunks(&["rust one", "rust two", "rust three"]),
            2,
        );

        let passages = retriever.retrieve("RUST").await.unwrap();

        assert_eq!(passages.len(), 2);
        assert_eq!(passages[0].content, "rust one");
        assert_eq!(passages[1].content, "rust two");
    }

    #[tokio::test]
    async fn test_no_overlap_returns_nothing() {
        let retriever = InMemoryRetriever::new("doc", chunks(&["alpha beta"]), 4);

        assert!(retriever.retrieve("gamma").await.unwrap().is_empty());
        assert_eq!(retriever.len(), 1);
    }

    #[tokio::test]
    async fn test_function_words_do_not_match() {
        let retriever = InMemoryRetriever::new(
            "doc",
            chunks(&["The history of the region is long", "Rust compiles to native code"]),
            4,
        );

        let passages = retriever.retrieve("What is the capital of France?").await.unwrap();

        assert!(passages.is_empty());
    }

    #[tokio::test]
    async fn test_stopwords_do_not_outrank_content_words() {
        let retriever = InMemoryRetriever::new(
            "doc",
            chunks(&["what is the of the is", "capital city"]),
            4,
        );

        let passages = retriever.retrieve("What is the capital?").await.unwrap();

        assert_eq!(passages.len(), 1);
        assert_eq!(passages[0].content, "capital city");
    }
}
