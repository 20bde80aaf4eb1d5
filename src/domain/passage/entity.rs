use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Where a passage came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassageOrigin {
    /// Retrieved from the indexed document
    Local,
    /// Synthesized from web search results
    Web,
}

/// A unit of evidence text with provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub content: String,
    /// Source identifier (file name, URL list, ...)
    pub source: String,
    pub origin: PassageOrigin,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Passage {
    /// Create a passage retrieved from a local document
    pub fn local(content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
            origin: PassageOrigin::Local,
            metadata: HashMap::new(),
        }
    }

    /// Create a passage synthesized from web search
    pub fn web(content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
            origin: PassageOrigin::Web,
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    pub fn is_web(&self) -> bool {
        self.origin == PassageOrigin::Web
    }

    /// Short preview for logs and reports
    pub fn preview(&self, max_chars: usize) -> String {
        let mut preview: String = self.content.chars().take(max_chars).collect();
        if self.content.chars().count() > max_chars {
            preview.push_str("...");
        }
        preview
    }
}
