//! Client façade tying configuration, transport, auth and the analyzer
//! together.

mod builder;

pub use builder::LensClientBuilder;

use std::sync::Arc;

use crate::analyzer::CalorieAnalyzer;
use crate::auth::ApiKeyAuthManager;
use crate::config::LensConfig;
use crate::encode::DataUrl;
use crate::error::LensError;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::CalorieReport;

/// Client for the calorie analysis service.
pub struct LensClient {
    config: Arc<LensConfig>,
    analyzer: CalorieAnalyzer,
}

impl LensClient {
    /// Creates a new client builder.
    pub fn builder() -> LensClientBuilder {
        LensClientBuilder::new()
    }

    /// Creates a client from environment variables.
    pub fn from_env() -> Result<Self, LensError> {
        Self::new(LensConfig::from_env()?)
    }

    /// Creates a client from a configuration object, using the reqwest
    /// transport.
    pub fn new(config: LensConfig) -> Result<Self, LensError> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout, config.connect_timeout)?);
        Self::from_parts(config, transport)
    }

    /// Creates a client from a configuration and an explicit transport.
    pub fn from_parts(
        config: LensConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, LensError> {
        let config = Arc::new(config);
        let auth_manager = ApiKeyAuthManager::from_config(&config);
        let analyzer =
            CalorieAnalyzer::new(Arc::clone(&config), transport, Box::new(auth_manager));

        Ok(Self { config, analyzer })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &LensConfig {
        &self.config
    }

    /// Analyze a photo; failures fold into the sentinel report.
    pub async fn analyze(&self, data_url: &DataUrl) -> CalorieReport {
        self.analyzer.analyze(data_url).await
    }

    /// Analyze a photo, surfacing the typed error on failure.
    pub async fn try_analyze(&self, data_url: &DataUrl) -> Result<CalorieReport, LensError> {
        self.analyzer.try_analyze(data_url).await
    }
}

impl std::fmt::Debug for LensClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LensClient")
            .field("config", &self.config)
            .finish()
    }
}
