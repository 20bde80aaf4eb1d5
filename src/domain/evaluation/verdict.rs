//! Verdict records produced by graders and checkers

use serde::{Deserialize, Serialize};

/// Result of grading one passage against the question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceVerdict {
    /// Whether the passage is sufficient to answer the question
    pub sufficient: bool,
    /// Match quality (0.0 - 1.0)
    pub relevance_score: f32,
    /// How well the passage covers the question
    #[serde(default)]
    pub coverage_note: String,
    /// Key information the passage lacks
    #[serde(default)]
    pub missing_info: String,
}

impl EvidenceVerdict {
    pub fn new(sufficient: bool, relevance_score: f32) -> Self {
        Self {
            sufficient,
            relevance_score: relevance_score.clamp(0.0, 1.0),
            coverage_note: String::new(),
            missing_info: String::new(),
        }
    }

    pub fn sufficient() -> Self {
        Self::new(true, 1.0)
    }

    pub fn insufficient() -> Self {
        Self::new(false, 0.0)
    }

    pub fn with_coverage_note(mut self, note: impl Into<String>) -> Self {
        self.coverage_note = note.into();
        self
    }

    pub fn with_missing_info(mut self, missing: impl Into<String>) -> Self {
        self.missing_info = missing.into();
        self
    }
}

/// Whether an answer is supported by the evidence it was generated from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundednessVerdict {
    pub supported: bool,
    /// Evaluator confidence (0.0 - 1.0)
    pub confidence: f32,
    #[serde(default)]
    pub reasoning: String,
}

impl GroundednessVerdict {
    pub fn new(supported: bool, confidence: f32) -> Self {
        Self {
            supported,
            confidence: confidence.clamp(0.0, 1.0),
            reasoning: String::new(),
        }
    }

    pub fn supported() -> Self {
        Self::new(true, 1.0)
    }

    pub fn unsupported() -> Self {
        Self::new(false, 1.0)
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    /// An unsupported answer is a hallucination
    pub fn is_hallucination(&self) -> bool {
        !self.supported
    }
}

/// How much of the question an answer covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Completeness {
    Complete,
    #[default]
    Partial,
    Minimal,
}

impl Completeness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Partial => "partial",
            Self::Minimal => "minimal",
        }
    }

    /// Lenient parse of evaluator output; unknown labels map to the default
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "complete" => Self::Complete,
            "minimal" => Self::Minimal,
            _ => Self::Partial,
        }
    }
}

/// Whether an answer resolves the question's intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceVerdict {
    pub addresses_question: bool,
    /// Answer quality (0.0 - 1.0)
    pub relevance_score: f32,
    #[serde(default)]
    pub completeness: Completeness,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub missing_aspects: String,
}

impl RelevanceVerdict {
    pub fn new(addresses_question: bool, relevance_score: f32) -> Self {
        Self {
            addresses_question,
            relevance_score: relevance_score.clamp(0.0, 1.0),
            completeness: Completeness::default(),
            reasoning: String::new(),
            missing_aspects: String::new(),
        }
    }

    pub fn relevant() -> Self {
        Self::new(true, 1.0).with_completeness(Completeness::Complete)
    }

    pub fn irrelevant() -> Self {
        Self::new(false, 0.0).with_completeness(Completeness::Minimal)
    }

    pub fn with_completeness(mut self, completeness: Completeness) -> Self {
        self.completeness = completeness;
        self
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    pub fn with_missing_aspects(mut self, missing: impl Into<String>) -> Self {
        self.missing_aspects = missing.into();
        self
    }
}
