//! Application state shared by the handlers

use std::sync::Arc;

use crate::infrastructure::ingestion::DocumentIndexer;
use crate::infrastructure::retrieval::RetrievalGateway;
use crate::infrastructure::workflow::WorkflowController;

#[derive(Debug, Clone)]
pub struct AppState {
    pub controller: Arc<WorkflowController>,
    pub indexer: Arc<DocumentIndexer>,
}

impl AppState {
    pub fn new(controller: Arc<WorkflowController>, indexer: Arc<DocumentIndexer>) -> Self {
        Self {
            controller,
            indexer,
        }
    }

    /// Gateway whose retriever the document endpoints swap
    pub fn gateway(&self) -> &Arc<RetrievalGateway> {
        self.controller.gateway()
    }
}
