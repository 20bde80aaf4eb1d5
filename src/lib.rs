//! PMP Adaptive RAG
//!
//! Self-correcting question answering over a document:
//! - Local retrieval with per-passage evidence grading
//! - Web search fallback when local evidence is missing or insufficient
//! - Groundedness and relevance checks with bounded regeneration and escalation

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
