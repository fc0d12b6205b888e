//! # calorie-lens
//!
//! Food photo calorie estimation backed by the Google Gemini API.
//!
//! The pipeline is three stages: encode a photo as a base64 data URL,
//! POST it with a fixed instruction prompt to the `generateContent`
//! endpoint, then extract and render the JSON-shaped calorie report
//! embedded in the model's free-text reply. Any failure along the way —
//! network, HTTP, missing candidates, malformed output — renders as one
//! fixed sentinel report.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use calorie_lens::{LensClient, Rendered};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LensClient::from_env()?;
//!
//!     let photo = calorie_lens::encode::reencode_jpeg("lunch.jpg")?;
//!     let report = client.analyze(&photo).await;
//!
//!     Rendered::from_report(&report, Some(photo)).write_to(std::io::stdout())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module organization
//!
//! - `encode` - image to data-URL conversion (JPEG re-encode or raw read)
//! - `config` - configuration types and builder
//! - `auth` - API key placement (header or query parameter)
//! - `transport` - HTTP transport layer
//! - `analyzer` - prompt construction and the analysis pipeline
//! - `extract` - JSON object extraction from free text
//! - `render` - report rendering and the exercise glyph mapper
//! - `clipboard` - system clipboard copy
//! - `client` - client façade and builder

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analyzer;
pub mod auth;
pub mod clipboard;
pub mod client;
pub mod config;
pub mod encode;
pub mod error;
pub mod extract;
pub mod render;
pub mod transport;
pub mod types;

// Development/testing module - available for integration tests.
pub mod mocks;

// Re-exports for convenience.
pub use analyzer::{CalorieAnalyzer, ANALYSIS_PROMPT};
pub use client::{LensClient, LensClientBuilder};
pub use config::{
    AuthMethod, LensConfig, LensConfigBuilder, DEFAULT_API_VERSION, DEFAULT_BASE_URL,
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};
pub use encode::DataUrl;
pub use error::{
    ClipboardError, ConfigurationError, EncodeError, LensError, LensResult, NetworkError,
    ResponseError,
};
pub use extract::first_json_object;
pub use render::{decorate_exercise, Rendered};
pub use types::{CalorieReport, CalorieValue};
