//! Ask command - answers one question and prints a quality report

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{Retriever, WorkflowOutcome, WorkflowStatus};
use crate::infrastructure::ingestion::DocumentIndexer;
use crate::infrastructure::workflow::WorkflowFactory;

#[derive(Args, Debug, Clone)]
pub struct AskArgs {
    /// Document to answer from; web search is used when omitted
    #[arg(short, long)]
    pub document: Option<PathBuf>,

    /// Question to answer
    #[arg(short, long)]
    pub question: String,

    /// Print the full outcome as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: AskArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let retriever = match args.document {
        Some(ref path) => Some(index_document(&config, path).await?),
        None => None,
    };

    let controller = WorkflowFactory::create(&config, retriever)?;
    let outcome = controller.run(&args.question).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", format_report(&outcome));
    }

    Ok(())
}

async fn index_document(
    config: &AppConfig,
    path: &std::path::Path,
) -> anyhow::Result<std::sync::Arc<dyn Retriever>> {
    let indexer = DocumentIndexer::new(config.retrieval.chunking.clone(), config.retrieval.top_k)?;
    let indexed = indexer.index_path(path).await?;

    info!(
        file_name = %indexed.summary.file_name,
        chunks = indexed.summary.chunks,
        "Document indexed"
    );

    Ok(indexed.retriever)
}

/// Human-readable answer followed by the quality report
pub fn format_report(outcome: &WorkflowOutcome) -> String {
    let state = &outcome.state;
    let mut lines = vec![
        outcome.answer().to_string(),
        String::new(),
        "Quality report".to_string(),
    ];

    let status = match outcome.status {
        WorkflowStatus::Answered => "answered".to_string(),
        WorkflowStatus::QualityUnresolved { reason } => {
            format!("quality unresolved ({})", reason.as_str())
        }
    };
    lines.push(format!("  status:         {}", status));
    lines.push(format!("  search method:  {}", state.search_method.as_str()));

    if state.evidence_verdicts.is_empty() {
        lines.push("  evidence:       not graded".to_string());
    } else {
        lines.push("  evidence:".to_string());
        for (i, verdict) in state.evidence_verdicts.iter().enumerate() {
            let label = if verdict.sufficient {
                "sufficient"
            } else {
                "insufficient"
            };
            lines.push(format!(
                "    [{}] {} ({:.2})",
                i + 1,
                label,
                verdict.relevance_score
            ));
        }
    }

    lines.push(match state.groundedness_verdict {
        Some(ref g) => {
            let label = if g.supported { "supported" } else { "unsupported" };
            format!("  groundedness:   {} ({:.2})", label, g.confidence)
        }
        None => "  groundedness:   not checked".to_string(),
    });

    lines.push(match state.relevance_verdict {
        Some(ref r) => {
            let label = if r.addresses_question {
                "addresses question"
            } else {
                "misses question"
            };
            format!(
                "  relevance:      {} ({:.2}, {})",
                label,
                r.relevance_score,
                r.completeness.as_str()
            )
        }
        None => "  relevance:      not checked".to_string(),
    });

    lines.push(format!(
        "  generations:    {}, web searches: {}",
        state.generation_attempts, state.online_searches
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
