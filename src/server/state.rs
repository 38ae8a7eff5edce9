//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::Gateway;
use crate::services::{ExtractionService, InformationExtractor};
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Every field is read-only after start-up and wrapped in `Arc`, so cloning the
/// state per worker is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// LLM call gateway
    pub gateway: Arc<Gateway>,
    /// Transcript extractor used by the answer route
    pub extractor: Arc<dyn InformationExtractor>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(
        config: Config,
        gateway: Arc<Gateway>,
        extractor: Arc<dyn InformationExtractor>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            gateway,
            extractor,
        }
    }

    /// Wire the production gateway and extractor from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let gateway = Arc::new(Gateway::from_config(config)?);
        let extractor = Arc::new(ExtractionService::new(gateway.clone()));
        Ok(Self::new(config.clone(), gateway, extractor))
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
