//! Shared application state.

use std::sync::Arc;
use std::time::Instant;

use integrations::{
    DatastoreStatusProvider, InferenceProvider, MockInferenceProvider, StaticDatastoreStatus,
};

use crate::config::Config;

/// Read-only state shared by all handlers.
pub struct AppState {
    pub config: Config,
    pub inference: Arc<dyn InferenceProvider>,
    pub datastore: Arc<dyn DatastoreStatusProvider>,
    pub started_at: Instant,
}

impl AppState {
    /// Builds state from explicit collaborators.
    pub fn new(
        config: Config,
        inference: Arc<dyn InferenceProvider>,
        datastore: Arc<dyn DatastoreStatusProvider>,
    ) -> Self {
        Self {
            config,
            inference,
            datastore,
            started_at: Instant::now(),
        }
    }

    /// Builds state wired to the placeholder integrations.
    pub fn from_config(config: Config) -> Self {
        let inference = Arc::new(MockInferenceProvider::new(config.bedrock_model_arn.clone()));
        let datastore = Arc::new(StaticDatastoreStatus::new(config.documentdb_endpoint.clone()));
        Self::new(config, inference, datastore)
    }

    /// Seconds elapsed since the state was built.
    pub fn uptime(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
