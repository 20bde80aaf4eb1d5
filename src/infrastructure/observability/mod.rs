//! Observability infrastructure - Prometheus metrics

mod metrics;

pub use metrics::{
    create_metrics_router, init_metrics, record_generation_attempt, record_retriever_invalidation,
    record_web_search, record_workflow_run, PrometheusMetrics,
};
