//! Mutable record of one workflow run

use serde::{Deserialize, Serialize};

use crate::domain::evaluation::{EvidenceVerdict, GroundednessVerdict, RelevanceVerdict};
use crate::domain::passage::Passage;

/// Which evidence path produced the passages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    /// Local document passages only
    Documents,
    /// Web search contributed evidence
    Online,
    #[default]
    Unknown,
}

impl SearchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Documents => "documents",
            Self::Online => "online",
            Self::Unknown => "unknown",
        }
    }
}

/// The state carried between workflow steps
///
/// Created once per run and owned by the controller for its duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    pub question: String,
    pub passages: Vec<Passage>,
    /// Whether web search is needed or has been used
    pub used_web_search: bool,
    pub search_method: SearchMethod,
    /// Verdicts for the passages graded in the last grading step
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence_verdicts: Vec<EvidenceVerdict>,
    pub candidate_answer: Option<String>,
    pub groundedness_verdict: Option<GroundednessVerdict>,
    pub relevance_verdict: Option<RelevanceVerdict>,
    /// Answers generated so far
    pub generation_attempts: u32,
    /// Web searches performed so far
    pub online_searches: u32,
}

impl RunState {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            passages: Vec::new(),
            used_web_search: false,
            search_method: SearchMethod::Unknown,
            evidence_verdicts: Vec::new(),
            candidate_answer: None,
            groundedness_verdict: None,
            relevance_verdict: None,
            generation_attempts: 0,
            online_searches: 0,
        }
    }

    /// Store retrieved passages and whether retrieval already fell back to web search
    pub fn record_retrieval(&mut self, passages: Vec<Passage>, used_web_search: bool) {
        self.passages = passages;
        self.used_web_search = used_web_search;
    }

    /// Keep only passages graded sufficient; returns whether web search is needed
    ///
    /// `verdicts` must be aligned with the current passages.
    pub fn record_grades(&mut self, verdicts: Vec<EvidenceVerdict>) -> bool {
        let any_insufficient = verdicts.iter().any(|v| !v.sufficient);

        let passages = std::mem::take(&mut self.passages);
        self.passages = passages
            .into_iter()
            .zip(verdicts.iter())
            .filter(|(_, verdict)| verdict.sufficient)
            .map(|(passage, _)| passage)
            .collect();
        self.evidence_verdicts = verdicts;

        let needs_online_search = self.used_web_search || any_insufficient || self.passages.is_empty();
        self.used_web_search = needs_online_search;
        self.search_method = if needs_online_search {
            SearchMethod::Online
        } else {
            SearchMethod::Documents
        };

        needs_online_search
    }

    /// Append a synthesized web passage
    pub fn record_web_passage(&mut self, passage: Passage) {
        self.passages.push(passage);
        self.used_web_search = true;
        self.search_method = SearchMethod::Online;
        self.online_searches += 1;
    }

    /// Store a freshly generated answer, discarding verdicts for the previous one
    pub fn record_answer(&mut self, answer: impl Into<String>) {
        self.candidate_answer = Some(answer.into());
        self.generation_attempts += 1;
        self.groundedness_verdict = None;
        self.relevance_verdict = None;
    }

    pub fn record_groundedness(&mut self, verdict: GroundednessVerdict) {
        self.groundedness_verdict = Some(verdict);
    }

    pub fn record_relevance(&mut self, verdict: RelevanceVerdict) {
        self.relevance_verdict = Some(verdict);
    }

    /// Reinstate an earlier answer together with its verdicts
    pub fn restore_answer(
        &mut self,
        answer: String,
        groundedness: GroundednessVerdict,
        relevance: Option<RelevanceVerdict>,
    ) {
        self.candidate_answer = Some(answer);
        self.groundedness_verdict = Some(groundedness);
        self.relevance_verdict = relevance;
    }

    /// Number of web passages currently held
    pub fn web_passage_count(&self) -> usize {
        self.passages.iter().filter(|p| p.is_web()).count()
    }
}
