//! Evidence passages and their provenance

mod entity;

pub use entity::{Passage, PassageOrigin};
