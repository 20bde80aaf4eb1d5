//! Fixed-size chunking over characters

use crate::domain::ingestion::{
    chunker::helpers, Chunk, ChunkMetadata, ChunkingConfig, ChunkingStrategy,
};
use crate::domain::DomainError;

/// Splits text into windows of `chunk_size` characters overlapping by `chunk_overlap`
#[derive(Debug, Clone)]
pub struct FixedSizeChunker {
    respect_word_boundaries: bool,
}

impl Default for FixedSizeChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedSizeChunker {
    pub fn new() -> Self {
        Self {
            respect_word_boundaries: true,
        }
    }

    pub fn with_word_boundaries(mut self, respect: bool) -> Self {
        self.respect_word_boundaries = respect;
        self
    }

    /// End of the window starting at `start`; always greater than `start`
    fn window_end(&self, chars: &[char], start: usize, target_end: usize) -> usize {
        if !self.respect_word_boundaries || target_end >= chars.len() {
            return target_end.min(chars.len());
        }

        let boundary = helpers::find_word_boundary_before(chars, target_end);

        if boundary <= start {
            helpers::find_word_boundary_after(chars, target_end)
        } else {
            boundary
        }
    }
}

impl ChunkingStrategy for FixedSizeChunker {
    fn chunk(&self, content: &str, config: &ChunkingConfig) -> Result<Vec<Chunk>, DomainError> {
        config.validate()?;

        let chars: Vec<char> = content.trim().chars().collect();
        if chars.is_empty() {
            return Ok(vec![]);
        }

        let mut chunks = Vec::new();
        let step = config.chunk_size - config.chunk_overlap;
        let mut start = 0;

        loop {
            let target_end = (start + config.chunk_size).min(chars.len());
            let end = self.window_end(&chars, start, target_end);

            let window: String = chars[start..end].iter().collect();
            let text = window.trim();

            if !text.is_empty() && text.chars().count() >= config.min_chunk_size {
                chunks.push(Chunk::new(
                    text,
                    ChunkMetadata::new(chunks.len(), 0, start, end),
                ));
            }

            if end >= chars.len() {
                break;
            }

            start = (start + step).min(end);
        }

        if chunks.is_empty() {
            let text: String = chars.iter().collect();
            chunks.push(Chunk::new(text, ChunkMetadata::new(0, 1, 0, chars.len())));
        }

        let total = chunks.len();
        for chunk in &mut chunks {
            chunk.metadata.total_chunks = total;
        }

        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "fixed_size"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_content() {
        let chunker = FixedSizeChunker::new();
        let config = ChunkingConfig::default();

        assert!(chunker.chunk("", &config).unwrap().is_empty());
        assert!(chunker.chunk("   \n\t  ", &config).unwrap().is_empty());
    }

    #[test]
    fn test_small_content_single_chunk() {
        let chunker = FixedSizeChunker::new();
        let config = ChunkingConfig::new(1000, 100);

        let chunks = chunker.chunk("  Hello, World!  ", &config).unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "Hello, World!");
        assert_eq!(chunks[0].metadata.total_chunks, 1);
    }

    #[test]
    fn test_exact_windows_without_word_boundaries() {
        let chunker = FixedSizeChunker::new().with_word_boundaries(false);
        let config = ChunkingConfig::new(5, 0);

        let chunks = chunker.chunk("abcdefghij", &config).unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].content, "abcde");
        assert_eq!(chunks[1].content, "fghij");
    }

    #[test]
    fn test_overlap_repeats_tail() {
        let chunker = FixedSizeChunker::new().with_word_boundaries(false);
        let config = ChunkingConfig::new(6, 2);

        let chunks = chunker.chunk("abcdefghijklmnop", &config).unwrap();

        assert_eq!(chunks[0].content, "abcdef");
        assert_eq!(chunks[1].content, "efghij");
        assert_eq!(chunks[1].metadata.char_start, 4);
    }

    #[test]
    fn test_word_boundaries_and_indices() {
        let chunker = FixedSizeChunker::new();
        let config = ChunkingConfig::new(50, 10).with_min_chunk_size(5);

        let content = "The quick brown fox jumps over the lazy dog. ".repeat(5);
        let chunks = chunker.chunk(&content, &config).unwrap();

        assert!(chunks.len() > 1);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index(), i);
            assert_eq!(chunk.metadata.total_chunks, chunks.len());
            assert!(!chunk.content.starts_with(' ') && !chunk.content.ends_with(' '));
            assert!(chunk.len() >= 5);
        }
    }

    #[test]
    fn test_multibyte_text_does_not_split_chars() {
        let chunker = FixedSizeChunker::new();
        let config = ChunkingConfig::new(8, 2);

        let content = "héllo wörld ünïcode ñandú café";
        let chunks = chunker.chunk(content, &config).unwrap();
        let total_chars = content.chars().count();

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.metadata.char_start < chunk.metadata.char_end);
            assert!(chunk.metadata.char_end <= total_chars);
        }
        assert!(chunks.iter().any(|c| c.content.contains("café")));
    }

    #[test]
    fn test_invalid_config() {
        let chunker = FixedSizeChunker::new();
        assert!(chunker.chunk("content", &ChunkingConfig::new(0, 0)).is_err());
    }
}
