//! Shared application state for the web server.

use std::sync::Arc;

use minijinja::Environment;
use nninv_clients::{NameResClient, NodeNormClient, NormalizeOptions};
use nninv_common::{Config, ServiceClient};
use nninv_db::PairStore;
use nninv_review::ReviewWorkflow;

use crate::templates;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub workflow: ReviewWorkflow,
    /// Backs the name search on the add-pair form.
    pub nameres: NameResClient,
    pub templates: Environment<'static>,
}

impl AppState {
    pub fn new(workflow: ReviewWorkflow, nameres: NameResClient) -> Self {
        Self { workflow, nameres, templates: templates::environment() }
    }

    /// Wire the production clients from configuration around `store`.
    pub fn from_config(config: &Config, store: Arc<dyn PairStore>) -> nninv_common::Result<Self> {
        let services = &config.services;
        let client = ServiceClient::from_config(services)?;

        let nodenorm = NodeNormClient::from_config(client.clone(), services);
        let nameres = NameResClient::from_config(client, services);
        let workflow = ReviewWorkflow::new(store, Arc::new(nodenorm))
            .with_options(NormalizeOptions::from(&config.normalization));

        tracing::debug!(
            timeout_secs = services.timeout_secs,
            nodenorm = %services.nodenorm_url,
            nameres = %services.nameres_url,
            "service clients configured"
        );
        Ok(Self::new(workflow, nameres))
    }
}

pub type SharedState = Arc<AppState>;
