use std::sync::Arc;

use crate::config::Config;
use crate::models::RecordIdGenerator;
use crate::storage::{ApplicationRepository, ApplicationStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The persisted collection, shared by the intake form and the dashboard.
    pub applications: Arc<ApplicationRepository>,
    pub ids: Arc<RecordIdGenerator>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn ApplicationStore>, config: Config) -> Self {
        Self {
            applications: Arc::new(ApplicationRepository::new(store)),
            ids: Arc::new(RecordIdGenerator::new()),
            config,
        }
    }
}
