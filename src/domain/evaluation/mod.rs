//! Evaluation domain
//!
//! Verdict records and the capability traits that grade evidence, generate answers
//! and check answers for grounding and relevance.

mod checker;
mod generator;
mod grader;
mod verdict;

pub use checker::{GroundednessChecker, RelevanceChecker};
pub use generator::AnswerGenerator;
pub use grader::EvidenceGrader;
pub use verdict::{Completeness, EvidenceVerdict, GroundednessVerdict, RelevanceVerdict};

#[cfg(test)]
pub use checker::mock::{MockGroundednessChecker, MockRelevanceChecker};
#[cfg(test)]
pub use generator::mock::MockAnswerGenerator;
#[cfg(test)]
pub use grader::mock::MockEvidenceGrader;
