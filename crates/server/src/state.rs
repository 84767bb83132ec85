use crate::config::ServerConfig;
use crate::error::ServerResult;
use bookmatch::{
    BookCatalog, ChatCompletionClient, LanguageModel, OpenLibraryClient, Recommender,
};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Catalog client (shared across requests)
    pub catalog: Arc<dyn BookCatalog>,

    /// Recommendation pipeline (shared across requests)
    pub recommender: Arc<Recommender>,
}

impl ServerState {
    /// Create state with production collaborators.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let catalog: Arc<dyn BookCatalog> =
            Arc::new(OpenLibraryClient::new(config.catalog.clone())?);
        let model: Arc<dyn LanguageModel> =
            Arc::new(ChatCompletionClient::new(config.insight.clone())?);
        Ok(Self::with_collaborators(config, catalog, model))
    }

    /// Create state around injected collaborators. Lets tests drive the
    /// full router with scripted catalog and model doubles.
    pub fn with_collaborators(
        config: ServerConfig,
        catalog: Arc<dyn BookCatalog>,
        model: Arc<dyn LanguageModel>,
    ) -> Self {
        let recommender = Arc::new(Recommender::new(
            Arc::clone(&catalog),
            config.catalog.clone(),
            model,
            config.insight.clone(),
            config.pipeline.clone(),
        ));

        Self {
            config: Arc::new(config),
            catalog,
            recommender,
        }
    }
}
