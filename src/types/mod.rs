//! Request, response and report types.
//!
//! The wire types mirror the subset of the Gemini `generateContent` schema
//! this crate uses: text plus one inline image blob in, candidate text out.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A part of a content message: text or inline binary data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Part {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
    /// Inline binary data.
    InlineData {
        /// The inline data blob.
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
}

/// Binary data blob with MIME type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    /// The MIME type of the data.
    pub mime_type: String,
    /// Base64-encoded binary data.
    pub data: String,
}

/// A content message with a role and parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    /// The role of the content author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// The parts of the content.
    pub parts: Vec<Part>,
}

/// The role of a message author.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User role.
    User,
    /// Model role.
    Model,
}

/// Configuration for content generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// The temperature for sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// The top-k sampling parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i32>,
    /// The nucleus sampling probability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    /// The maximum number of tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<i32>,
}

/// Request body for the generateContent endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// The conversation contents.
    pub contents: Vec<Content>,
    /// Generation configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Response body from the generateContent endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// The generated candidates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
    /// Token usage metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
}

/// A candidate response from the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The content of the candidate. Absent when generation was blocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// The reason generation finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    /// The index of this candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
}

/// Metadata about token usage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Number of tokens in the prompt.
    pub prompt_token_count: i32,
    /// Number of tokens in the candidates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates_token_count: Option<i32>,
    /// Total number of tokens.
    pub total_token_count: i32,
}

impl GenerateContentResponse {
    /// The text of the first candidate's first part, when present.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_deref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .and_then(|part| match part {
                Part::Text { text } => Some(text.as_str()),
                _ => None,
            })
    }
}

/// The calorie estimate the model returns: a number in kcal or a
/// free-form string (the sentinel uses `"-"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CalorieValue {
    /// Numeric estimate in kcal.
    Number(f64),
    /// Free-form text.
    Text(String),
}

impl fmt::Display for CalorieValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole-number estimates print without a trailing ".0".
            CalorieValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            CalorieValue::Number(n) => write!(f, "{n}"),
            CalorieValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CalorieValue {
    fn from(s: &str) -> Self {
        CalorieValue::Text(s.to_string())
    }
}

impl From<f64> for CalorieValue {
    fn from(n: f64) -> Self {
        CalorieValue::Number(n)
    }
}

/// The analysis record extracted from the model's reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalorieReport {
    /// Recognized food name.
    pub food: String,
    /// Estimated calories.
    pub calorie: CalorieValue,
    /// Calculation steps, one bullet per entry.
    #[serde(default)]
    pub detail: Vec<String>,
    /// Equivalent exercise suggestion.
    #[serde(default)]
    pub exercise: String,
}

impl CalorieReport {
    /// The fixed sentinel returned when analysis fails for any reason.
    pub fn failure() -> Self {
        Self {
            food: "알 수 없음".to_string(),
            calorie: CalorieValue::from("-"),
            detail: vec!["분석 실패".to_string()],
            exercise: "-".to_string(),
        }
    }

    /// Whether this report is the failure sentinel.
    pub fn is_failure(&self) -> bool {
        *self == Self::failure()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inline_data_serializes_camel_case() {
        let part = Part::InlineData {
            inline_data: Blob {
                mime_type: "image/jpeg".to_string(),
                data: "aGVsbG8=".to_string(),
            },
        };

        let json = serde_json::to_string(&part).unwrap();
        assert_eq!(
            json,
            r#"{"inlineData":{"mimeType":"image/jpeg","data":"aGVsbG8="}}"#
        );
    }

    #[test]
    fn test_first_text() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"hello"}],"role":"model"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.first_text(), Some("hello"));

        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.first_text(), None);
    }

    #[test]
    fn test_report_with_numeric_calorie() {
        let report: CalorieReport = serde_json::from_str(
            r#"{"food":"김치찌개","calorie":450,"detail":["밥 300kcal","국 150kcal"],"exercise":"달리기 40분"}"#,
        )
        .unwrap();

        assert_eq!(report.food, "김치찌개");
        assert_eq!(report.calorie, CalorieValue::Number(450.0));
        assert_eq!(report.calorie.to_string(), "450");
        assert_eq!(report.detail.len(), 2);
    }

    #[test]
    fn test_report_with_string_calorie() {
        let report: CalorieReport =
            serde_json::from_str(r#"{"food":"Pizza","calorie":"약 300","exercise":"walk"}"#)
                .unwrap();

        assert_eq!(report.calorie.to_string(), "약 300");
        // detail absent maps to an empty list.
        assert!(report.detail.is_empty());
    }

    #[test]
    fn test_report_missing_food_is_an_error() {
        let result =
            serde_json::from_str::<CalorieReport>(r#"{"calorie":100,"exercise":"run"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_failure_sentinel() {
        let sentinel = CalorieReport::failure();
        assert_eq!(sentinel.food, "알 수 없음");
        assert_eq!(sentinel.calorie, CalorieValue::from("-"));
        assert_eq!(sentinel.detail, vec!["분석 실패".to_string()]);
        assert_eq!(sentinel.exercise, "-");
        assert!(sentinel.is_failure());
    }

    #[test]
    fn test_fractional_calorie_display() {
        assert_eq!(CalorieValue::Number(320.5).to_string(), "320.5");
    }
}
