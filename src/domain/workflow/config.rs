//! Workflow loop bounds and grading settings

use serde::{Deserialize, Serialize};

use super::error::WorkflowError;

/// Configuration for the answer-quality workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Regenerations allowed after a hallucination verdict, per evidence set
    #[serde(default = "default_max_generation_retries")]
    pub max_generation_retries: u32,
    /// Web searches allowed after a grounded answer missed the question
    #[serde(default = "default_max_escalations")]
    pub max_escalations: u32,
    /// Passages graded concurrently (1 = sequential)
    #[serde(default = "default_grading_concurrency")]
    pub grading_concurrency: usize,
}

fn default_max_generation_retries() -> u32 {
    3
}

fn default_max_escalations() -> u32 {
    2
}

fn default_grading_concurrency() -> usize {
    1
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            max_generation_retries: default_max_generation_retries(),
            max_escalations: default_max_escalations(),
            grading_concurrency: default_grading_concurrency(),
        }
    }
}

impl WorkflowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_generation_retries(mut self, retries: u32) -> Self {
        self.max_generation_retries = retries;
        self
    }

    pub fn with_max_escalations(mut self, escalations: u32) -> Self {
        self.max_escalations = escalations;
        self
    }

    pub fn with_grading_concurrency(mut self, concurrency: usize) -> Self {
        self.grading_concurrency = concurrency;
        self
    }

    pub fn validate(&self) -> Result<(), WorkflowError> {
        if self.grading_concurrency == 0 {
            return Err(WorkflowError::configuration(
                "grading_concurrency must be greater than 0",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorkflowConfig::default();

        assert_eq!(config.max_generation_retries, 3);
        assert_eq!(config.max_escalations, 2);
        assert_eq!(config.grading_concurrency, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = WorkflowConfig::new()
            .with_max_generation_retries(0)
            .with_max_escalations(5)
            .with_grading_concurrency(4);

        assert_eq!(config.max_generation_retries, 0);
        assert_eq!(config.max_escalations, 5);
        assert_eq!(config.grading_concurrency, 4);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let config = WorkflowConfig::new().with_grading_concurrency(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: WorkflowConfig =
            serde_json::from_str(r#"{"max_escalations": 1}"#).unwrap();

        assert_eq!(config.max_escalations, 1);
        assert_eq!(config.max_generation_retries, 3);
    }
}
