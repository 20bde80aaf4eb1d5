//! Workflow infrastructure: the answer-quality controller and its assembly

mod controller;
mod factory;

pub use controller::{WorkflowCapabilities, WorkflowController};
pub use factory::WorkflowFactory;
