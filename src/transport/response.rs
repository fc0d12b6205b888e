//! HTTP response parsing.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::http::HttpResponse;
use crate::error::{LensError, ResponseError};

/// Shape of the Gemini API error body.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

/// Parser for HTTP responses from the Gemini API.
pub struct ResponseParser;

impl ResponseParser {
    /// Deserializes a 2xx response body into the expected type; maps any
    /// other status to [`ResponseError::HttpStatus`] carrying the API's
    /// error message when the body has one.
    pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T, LensError> {
        if (200..300).contains(&response.status) {
            let parsed: T = serde_json::from_slice(&response.body)?;
            Ok(parsed)
        } else {
            Err(Self::parse_error_response(response))
        }
    }

    /// Maps an error response to a [`LensError`].
    pub fn parse_error_response(response: HttpResponse) -> LensError {
        let message = serde_json::from_slice::<ApiErrorBody>(&response.body)
            .map(|body| body.error.message)
            .unwrap_or_else(|_| String::from_utf8_lossy(&response.body).into_owned());

        tracing::debug!(status = response.status, %message, "API error response");

        LensError::Response(ResponseError::HttpStatus {
            status: response.status,
            message,
        })
    }
}
