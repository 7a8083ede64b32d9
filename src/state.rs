use crate::listings::PropertySource;
use crate::search::SearchController;
use std::sync::Arc;

/// Process-wide handle passed by reference into every request handler.
pub struct AppState {
    pub source: Arc<dyn PropertySource>,
    pub controller: SearchController,
}

impl AppState {
    pub fn new(source: Arc<dyn PropertySource>) -> Self {
        Self {
            controller: SearchController::new(Arc::clone(&source)),
            source,
        }
    }
}
