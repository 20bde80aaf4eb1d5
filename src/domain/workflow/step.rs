//! Workflow steps and the transition function

use std::fmt;

use serde::{Deserialize, Serialize};

/// A state of the answer-quality workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStep {
    Retrieve,
    Grade,
    SearchOnline,
    Generate,
    Check,
    Done,
}

impl WorkflowStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retrieve => "retrieve",
            Self::Grade => "grade",
            Self::SearchOnline => "search_online",
            Self::Generate => "generate",
            Self::Check => "check",
            Self::Done => "done",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the two-stage answer check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Answer is not supported by the evidence
    Hallucinated,
    /// Answer is grounded but does not resolve the question
    Unaddressed,
    /// Answer is grounded and addresses the question
    Accepted,
}

/// Why the workflow went to the web
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchReason {
    /// Local evidence was missing or insufficient
    Fallback,
    /// A grounded answer missed the question
    Escalation,
}

impl SearchReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fallback => "fallback",
            Self::Escalation => "escalation",
        }
    }
}

/// What a completed step reports back to the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSignal {
    Retrieved,
    Graded { needs_online_search: bool },
    SearchedOnline,
    Generated,
    Checked(CheckOutcome),
}

/// Next step for a completed step and its signal
///
/// Returns `None` when the signal cannot be produced by `from`.
pub fn transition(from: WorkflowStep, signal: StepSignal) -> Option<WorkflowStep> {
    use WorkflowStep::*;

    match (from, signal) {
        (Retrieve, StepSignal::Retrieved) => Some(Grade),
        (Grade, StepSignal::Graded { needs_online_search: true }) => Some(SearchOnline),
        (Grade, StepSignal::Graded { needs_online_search: false }) => Some(Generate),
        (SearchOnline, StepSignal::SearchedOnline) => Some(Generate),
        (Generate, StepSignal::Generated) => Some(Check),
        (Check, StepSignal::Checked(CheckOutcome::Hallucinated)) => Some(Generate),
        (Check, StepSignal::Checked(CheckOutcome::Unaddressed)) => Some(SearchOnline),
        (Check, StepSignal::Checked(CheckOutcome::Accepted)) => Some(Done),
        _ => None,
    }
}
