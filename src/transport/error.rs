//! Transport layer error types.

use crate::error::{LensError, NetworkError};

/// Transport error.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Timeout")]
    Timeout,
    #[error("Request error: {0}")]
    Request(String),
}

impl From<TransportError> for LensError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout => LensError::Network(NetworkError::Timeout),
            TransportError::Connection(message) | TransportError::Request(message) => {
                LensError::Network(NetworkError::ConnectionFailed { message })
            }
        }
    }
}
