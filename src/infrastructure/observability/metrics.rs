//! Prometheus metrics infrastructure
//!
//! Recording is a no-op until a recorder is installed, so library callers and tests
//! can record freely.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::config::MetricsConfig;
use crate::domain::{SearchReason, WorkflowStatus};

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
}

impl PrometheusMetrics {
    /// Get the metrics as a string for the /metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Initialize Prometheus metrics
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("rag_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
            tracing::info!("Prometheus metrics initialized at /metrics");

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Create the metrics router
pub fn create_metrics_router(metrics: PrometheusMetrics) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record a finished workflow run; failed runs pass `None`
pub fn record_workflow_run(status: Option<&WorkflowStatus>, duration: Duration) {
    let status = status.map(WorkflowStatus::as_str).unwrap_or("failed");

    counter!("rag_workflow_runs_total", "status" => status).increment(1);
    histogram!("rag_workflow_duration_seconds", "status" => status)
        .record(duration.as_secs_f64());
}

pub fn record_web_search(reason: SearchReason) {
    counter!("rag_web_searches_total", "reason" => reason.as_str()).increment(1);
}

pub fn record_retriever_invalidation() {
    counter!("rag_retriever_invalidations_total").increment(1);
}

pub fn record_generation_attempt() {
    counter!("rag_generation_attempts_total").increment(1);
}
