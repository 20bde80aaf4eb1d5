//! Answer-quality workflow domain
//!
//! The workflow retrieves evidence, grades it, optionally falls back to web search,
//! generates an answer and checks it before returning. Routing between steps is an
//! explicit state machine:
//!
//! ```text
//! Retrieve -> Grade -> { SearchOnline | Generate }
//! SearchOnline -> Generate -> Check
//! Check -> { Generate (hallucination) | SearchOnline (question not addressed) | Done }
//! ```

mod config;
mod error;
mod outcome;
mod state;
mod step;

pub use config::WorkflowConfig;
pub use error::WorkflowError;
pub use outcome::{UnresolvedReason, WorkflowOutcome, WorkflowStatus};
pub use state::{RunState, SearchMethod};
pub use step::{transition, CheckOutcome, SearchReason, StepSignal, WorkflowStep};
