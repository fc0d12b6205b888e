//! Builder for [`LensClient`].

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use super::LensClient;
use crate::config::{AuthMethod, LensConfig, LensConfigBuilder};
use crate::error::LensError;
use crate::transport::HttpTransport;

/// Builder for [`LensClient`].
///
/// Any setting not supplied explicitly falls back to the environment:
/// `GEMINI_API_KEY` / `GOOGLE_API_KEY` for the key, plus the optional
/// `GEMINI_BASE_URL`, `GEMINI_API_VERSION`, `GEMINI_MODEL` and
/// `GEMINI_TIMEOUT_SECS` overrides.
#[derive(Default)]
pub struct LensClientBuilder {
    config_builder: LensConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl LensClientBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: SecretString) -> Self {
        self.config_builder = self.config_builder.api_key(api_key);
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: &str) -> Result<Self, LensError> {
        self.config_builder = self.config_builder.base_url(base_url)?;
        Ok(self)
    }

    /// Set the API version.
    pub fn api_version(mut self, version: &str) -> Self {
        self.config_builder = self.config_builder.api_version(version);
        self
    }

    /// Set the analysis model.
    pub fn model(mut self, model: &str) -> Self {
        self.config_builder = self.config_builder.model(model);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config_builder = self.config_builder.connect_timeout(timeout);
        self
    }

    /// Set the authentication method.
    pub fn auth_method(mut self, method: AuthMethod) -> Self {
        self.config_builder = self.config_builder.auth_method(method);
        self
    }

    /// Use a custom transport instead of the reqwest default.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<LensClient, LensError> {
        let config: LensConfig = self.config_builder.env_fallbacks()?.build()?;

        match self.transport {
            Some(transport) => LensClient::from_parts(config, transport),
            None => LensClient::new(config),
        }
    }
}
