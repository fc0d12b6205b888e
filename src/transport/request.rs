//! HTTP request builder.
//!
//! Handles URL construction with the API version prefix, auth injection
//! (header or query parameter) and JSON body serialization.

use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;
use url::Url;

use super::http::{HttpMethod, HttpRequest};
use crate::auth::AuthManager;
use crate::error::LensError;

/// Builder for HTTP requests to the Gemini API.
pub struct RequestBuilder {
    base_url: Url,
    api_version: String,
    auth_manager: Box<dyn AuthManager>,
}

impl RequestBuilder {
    /// Creates a new request builder.
    pub fn new(base_url: Url, api_version: String, auth_manager: Box<dyn AuthManager>) -> Self {
        Self {
            base_url,
            api_version,
            auth_manager,
        }
    }

    /// Builds a complete URL for the given path, prepending the API version
    /// and appending the auth query parameter when configured.
    pub fn build_url(&self, path: &str) -> Result<Url, LensError> {
        let path = path.trim_start_matches('/');
        let full_path = format!("{}/{}", self.api_version, path);
        let mut url = self.base_url.join(&full_path)?;

        if let Some((key, value)) = self.auth_manager.get_auth_query_param() {
            url.query_pairs_mut().append_pair(&key, &value);
        }

        Ok(url)
    }

    /// Builds an HTTP request with an optional JSON body.
    pub fn build_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&T>,
    ) -> Result<HttpRequest, LensError> {
        let url = self.build_url(path)?;

        let mut headers = HashMap::new();
        if body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some((key, value)) = self.auth_manager.get_auth_header() {
            headers.insert(key, value);
        }

        let body_bytes = match body {
            Some(body) => Some(Bytes::from(serde_json::to_vec(body)?)),
            None => None,
        };

        Ok(HttpRequest {
            method,
            url: url.to_string(),
            headers,
            body: body_bytes,
        })
    }
}
