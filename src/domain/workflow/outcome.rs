//! Terminal result of a workflow run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::state::RunState;
use super::step::WorkflowStep;

/// Why a run stopped without an accepted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedReason {
    /// Regeneration limit reached while answers kept failing the groundedness check
    Ungrounded,
    /// Escalation limit reached while grounded answers kept missing the question
    Unaddressed,
}

impl UnresolvedReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ungrounded => "ungrounded",
            Self::Unaddressed => "unaddressed",
        }
    }
}

/// Terminal status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WorkflowStatus {
    /// Answer is grounded and addresses the question
    Answered,
    /// A loop bound was hit; the best available answer is returned
    QualityUnresolved { reason: UnresolvedReason },
}

impl WorkflowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Answered => "answered",
            Self::QualityUnresolved { .. } => "quality_unresolved",
        }
    }
}

/// Final state and answer of a workflow run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowOutcome {
    pub run_id: Uuid,
    #[serde(flatten)]
    pub status: WorkflowStatus,
    /// Answer returned to the caller
    pub answer: String,
    pub state: RunState,
    /// Steps visited, in order
    pub trace: Vec<WorkflowStep>,
    pub started_at: DateTime<Utc>,
    pub execution_time_ms: u64,
}

impl WorkflowOutcome {
    pub fn is_answered(&self) -> bool {
        matches!(self.status, WorkflowStatus::Answered)
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Number of times a given step appears in the trace
    pub fn step_count(&self, step: WorkflowStep) -> usize {
        self.trace.iter().filter(|s| **s == step).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: WorkflowStatus) -> WorkflowOutcome {
        WorkflowOutcome {
            run_id: Uuid::new_v4(),
            status,
            answer: "42".to_string(),
            state: RunState::new("q"),
            trace: vec![
                WorkflowStep::Retrieve,
                WorkflowStep::Grade,
                WorkflowStep::Generate,
                WorkflowStep::Check,
                WorkflowStep::Generate,
                WorkflowStep::Check,
                WorkflowStep::Done,
            ],
            started_at: Utc::now(),
            execution_time_ms: 5,
        }
    }

    #[test]
    fn test_answered_outcome() {
        let outcome = outcome(WorkflowStatus::Answered);

        assert!(outcome.is_answered());
        assert_eq!(outcome.answer(), "42");
        assert_eq!(outcome.step_count(WorkflowStep::Generate), 2);
    }

    #[test]
    fn test_status_serialization() {
        let outcome = outcome(WorkflowStatus::QualityUnresolved {
            reason: UnresolvedReason::Ungrounded,
        });

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "quality_unresolved");
        assert_eq!(json["reason"], "ungrounded");
        assert_eq!(json["trace"][0], "retrieve");
        assert!(!outcome.is_answered());
    }
}
