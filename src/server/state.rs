use std::sync::Arc;

use crate::tasks::TaskRegistry;

/// State shared across requests. The registry is read-only after startup, so
/// no locking is needed.
pub struct AppState {
    pub registry: Arc<TaskRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<TaskRegistry>) -> Self {
        Self { registry }
    }
}
