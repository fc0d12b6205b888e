//! The analysis pipeline: one POST per photo, one report per POST.

use std::sync::Arc;
use std::time::Instant;

use super::prompt;
use crate::config::LensConfig;
use crate::encode::DataUrl;
use crate::error::{LensError, ResponseError};
use crate::extract::first_json_object;
use crate::transport::{endpoints, HttpMethod, HttpTransport, RequestBuilder, ResponseParser};
use crate::types::{CalorieReport, GenerateContentResponse};

/// Sends a food photo to the Gemini endpoint and parses the calorie report
/// out of the model's reply.
///
/// Stateless between calls; every [`analyze`](CalorieAnalyzer::analyze) is
/// an independent request.
pub struct CalorieAnalyzer {
    config: Arc<LensConfig>,
    transport: Arc<dyn HttpTransport>,
    request_builder: RequestBuilder,
}

impl CalorieAnalyzer {
    /// Create a new analyzer from configuration, transport and auth.
    pub fn new(
        config: Arc<LensConfig>,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Box<dyn crate::auth::AuthManager>,
    ) -> Self {
        let request_builder = RequestBuilder::new(
            config.base_url.clone(),
            config.api_version.clone(),
            auth_manager,
        );

        Self {
            config,
            transport,
            request_builder,
        }
    }

    /// Analyze a photo, folding every failure into the fixed sentinel
    /// report.
    ///
    /// Network errors, HTTP errors, missing candidates and malformed model
    /// output all render identically; the underlying cause is logged, not
    /// surfaced. Use [`try_analyze`](Self::try_analyze) to observe it.
    pub async fn analyze(&self, data_url: &DataUrl) -> CalorieReport {
        match self.try_analyze(data_url).await {
            Ok(report) => report,
            Err(error) => {
                tracing::warn!(%error, "calorie analysis failed, substituting sentinel report");
                CalorieReport::failure()
            }
        }
    }

    /// Analyze a photo, surfacing the typed error on failure.
    pub async fn try_analyze(&self, data_url: &DataUrl) -> Result<CalorieReport, LensError> {
        let start = Instant::now();
        let model = self.config.model.as_str();

        tracing::debug!(
            model,
            mime_type = data_url.mime_type(),
            payload_bytes = data_url.payload().len(),
            "requesting calorie analysis"
        );

        // 1. Build the request: prompt + inline image.
        let request = prompt::build_request(data_url);
        let path = endpoints::generate_content(model);
        let http_request =
            self.request_builder
                .build_request(HttpMethod::Post, &path, Some(&request))?;

        // 2. Single POST, no retry.
        let http_response = self.transport.send(http_request).await?;
        let status = http_response.status;

        // 3. Parse the envelope.
        let response: GenerateContentResponse = ResponseParser::parse_response(http_response)?;

        if let Some(usage) = &response.usage_metadata {
            tracing::info!(
                model,
                status,
                duration_ms = start.elapsed().as_millis() as u64,
                prompt_tokens = usage.prompt_token_count,
                completion_tokens = usage.candidates_token_count.unwrap_or(0),
                total_tokens = usage.total_token_count,
                "calorie analysis completed"
            );
        }

        // 4. Unwrap the candidate text and the embedded JSON object.
        let text = response
            .first_text()
            .ok_or(ResponseError::MissingCandidates)?;
        let object = first_json_object(text).ok_or(ResponseError::NoEmbeddedObject)?;

        let report: CalorieReport =
            serde_json::from_str(object).map_err(|e| ResponseError::MalformedReport {
                message: e.to_string(),
            })?;

        tracing::debug!(food = %report.food, calorie = %report.calorie, "report extracted");

        Ok(report)
    }
}
