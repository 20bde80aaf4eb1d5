//! CLI module for PMP Adaptive RAG
//!
//! Provides subcommands:
//! - `serve`: HTTP API server
//! - `ask`: answer one question from the terminal

pub mod ask;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// PMP Adaptive RAG - self-correcting document question answering
#[derive(Parser)]
#[command(name = "pmp-adaptive-rag")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Answer a single question, optionally grounded in a document
    Ask(ask::AskArgs),
}

/// Load `.env` and layered configuration, then install logging
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    config
}
