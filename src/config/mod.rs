//! Configuration for the calorie-lens client.

use crate::error::{ConfigurationError, LensError};
use secrecy::SecretString;
use std::time::Duration;
use url::Url;

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default API version.
pub const DEFAULT_API_VERSION: &str = "v1beta";

/// Default analysis model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default request timeout (120 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default connect timeout (30 seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Where the API key is placed on the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthMethod {
    /// Use the ?key= query parameter.
    #[default]
    QueryParam,
    /// Use the x-goog-api-key header.
    Header,
}

/// Configuration for the calorie-lens client.
#[derive(Clone)]
pub struct LensConfig {
    /// API key (required).
    pub api_key: SecretString,
    /// Base URL for the API.
    pub base_url: Url,
    /// API version.
    pub api_version: String,
    /// Model used for analysis.
    pub model: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// Authentication method.
    pub auth_method: AuthMethod,
}

impl LensConfig {
    /// Create a new configuration builder.
    pub fn builder() -> LensConfigBuilder {
        LensConfigBuilder::default()
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `GEMINI_API_KEY` (or `GOOGLE_API_KEY`) plus optional
    /// `GEMINI_BASE_URL`, `GEMINI_API_VERSION`, `GEMINI_MODEL` and
    /// `GEMINI_TIMEOUT_SECS` overrides.
    pub fn from_env() -> Result<Self, LensError> {
        Self::builder().env_fallbacks()?.build()
    }
}

impl std::fmt::Debug for LensConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LensConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("api_version", &self.api_version)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("auth_method", &self.auth_method)
            .finish()
    }
}

/// Builder for [`LensConfig`].
#[derive(Default)]
pub struct LensConfigBuilder {
    api_key: Option<SecretString>,
    base_url: Option<Url>,
    api_version: Option<String>,
    model: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    auth_method: Option<AuthMethod>,
}

impl LensConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: &str) -> Result<Self, LensError> {
        self.base_url = Some(Url::parse(base_url)?);
        Ok(self)
    }

    /// Set the API version.
    pub fn api_version(mut self, version: &str) -> Self {
        self.api_version = Some(version.to_string());
        self
    }

    /// Set the analysis model.
    pub fn model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the authentication method.
    pub fn auth_method(mut self, method: AuthMethod) -> Self {
        self.auth_method = Some(method);
        self
    }

    /// Fill any unset field from the environment.
    ///
    /// Reads `GEMINI_API_KEY` (or `GOOGLE_API_KEY`) plus the optional
    /// `GEMINI_BASE_URL`, `GEMINI_API_VERSION`, `GEMINI_MODEL` and
    /// `GEMINI_TIMEOUT_SECS` overrides. Values set explicitly on the
    /// builder win over the environment.
    pub fn env_fallbacks(mut self) -> Result<Self, LensError> {
        if self.api_key.is_none() {
            if let Ok(key) =
                std::env::var("GEMINI_API_KEY").or_else(|_| std::env::var("GOOGLE_API_KEY"))
            {
                self.api_key = Some(SecretString::new(key));
            }
        }

        if self.base_url.is_none() {
            if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
                self.base_url = Some(Url::parse(&base_url)?);
            }
        }

        if self.api_version.is_none() {
            if let Ok(version) = std::env::var("GEMINI_API_VERSION") {
                self.api_version = Some(version);
            }
        }

        if self.model.is_none() {
            if let Ok(model) = std::env::var("GEMINI_MODEL") {
                self.model = Some(model);
            }
        }

        if self.timeout.is_none() {
            if let Some(secs) = std::env::var("GEMINI_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
            {
                self.timeout = Some(Duration::from_secs(secs));
            }
        }

        Ok(self)
    }

    /// Build the configuration.
    pub fn build(self) -> Result<LensConfig, LensError> {
        let api_key = self.api_key.ok_or(ConfigurationError::MissingApiKey)?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        Ok(LensConfig {
            api_key,
            base_url,
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            connect_timeout: self
                .connect_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)),
            auth_method: self.auth_method.unwrap_or_default(),
        })
    }
}
