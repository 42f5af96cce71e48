//! Application state shared across handlers

use crate::config::Settings;
use crate::network::HttpClient;
use crate::orchestrator::QueryOrchestrator;
use crate::providers::ProviderLoader;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// The one orchestrator; its cache lives as long as the server
    pub orchestrator: Arc<QueryOrchestrator>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create application state with providers built from settings
    pub fn new(settings: Settings, client: HttpClient) -> anyhow::Result<Self> {
        let search = ProviderLoader::search(&settings, &client)?;
        let summarizer = ProviderLoader::summarizer(&settings, &client)?;
        let orchestrator = QueryOrchestrator::new(search, summarizer);
        Self::with_orchestrator(settings, orchestrator)
    }

    /// Create application state around a prepared orchestrator
    pub fn with_orchestrator(
        settings: Settings,
        orchestrator: QueryOrchestrator,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            settings: Arc::new(settings),
            orchestrator: Arc::new(orchestrator),
            templates: Arc::new(super::Templates::new()?),
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
