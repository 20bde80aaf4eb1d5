//! Workflow error types

use thiserror::Error;

use super::step::WorkflowStep;

/// Errors that terminate a workflow run without an answer
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkflowError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Web search failed: {0}")]
    WebSearch(String),

    #[error("Capability failed in '{step}': {message}")]
    Capability { step: WorkflowStep, message: String },

    #[error("No transition from '{from}' for signal {signal}")]
    InvalidTransition { from: WorkflowStep, signal: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl WorkflowError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn web_search(message: impl Into<String>) -> Self {
        Self::WebSearch(message.into())
    }

    pub fn capability(step: WorkflowStep, message: impl Into<String>) -> Self {
        Self::Capability {
            step,
            message: message.into(),
        }
    }

    pub fn invalid_transition(from: WorkflowStep, signal: impl Into<String>) -> Self {
        Self::InvalidTransition {
            from,
            signal: signal.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
