//! Error types for the calorie-lens crate.

use thiserror::Error;

/// Result type alias for calorie-lens operations.
pub type LensResult<T> = Result<T, LensError>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum LensError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Missing API key")]
    MissingApiKey,

    #[error("Invalid base URL: {message}")]
    InvalidBaseUrl { message: String },
}

/// Errors from image encoding.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to decode image {path}: {message}")]
    Decode { path: String, message: String },

    #[error("JPEG encoding failed: {message}")]
    JpegEncode { message: String },

    #[error("Invalid data URL: {message}")]
    InvalidDataUrl { message: String },
}

/// Network-related errors.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Request timed out")]
    Timeout,
}

/// Errors from the API response path.
#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("HTTP error {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Failed to deserialize response: {message}")]
    Deserialization { message: String },

    #[error("Response contained no candidate text")]
    MissingCandidates,

    #[error("No JSON object embedded in model output")]
    NoEmbeddedObject,

    #[error("Embedded object is not a calorie report: {message}")]
    MalformedReport { message: String },
}

/// Clipboard errors.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {message}")]
    Unavailable { message: String },

    #[error("Clipboard write failed: {message}")]
    WriteFailed { message: String },
}

impl From<reqwest::Error> for LensError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LensError::Network(NetworkError::Timeout)
        } else {
            LensError::Network(NetworkError::ConnectionFailed {
                message: err.to_string(),
            })
        }
    }
}

impl From<serde_json::Error> for LensError {
    fn from(err: serde_json::Error) -> Self {
        LensError::Response(ResponseError::Deserialization {
            message: err.to_string(),
        })
    }
}

impl From<url::ParseError> for LensError {
    fn from(err: url::ParseError) -> Self {
        LensError::Configuration(ConfigurationError::InvalidBaseUrl {
            message: err.to_string(),
        })
    }
}
