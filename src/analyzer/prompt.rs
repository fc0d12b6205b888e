//! Prompt and request construction for calorie analysis.

use crate::encode::DataUrl;
use crate::types::{Blob, Content, GenerateContentRequest, GenerationConfig, Part, Role};

/// The fixed instruction sent with every photo. Asks for the food name,
/// estimated kcal, calculation bullets and an equivalent exercise, with a
/// JSON-shaped answer.
pub const ANALYSIS_PROMPT: &str = "이 이미지는 어떤 음식이고, 예상 칼로리는 몇 kcal인지 알려줘.\n- 음식명\n- 예상 칼로리(kcal)\n- 어떤 계산과정을 거쳤는지 bullet 형태로\n- 이 칼로리를 태우기 위한 운동량(예: 달리기, 등산 등)\n- 답변은 JSON 형식으로: {food: 음식명, calorie: 숫자, detail: [계산과정 bullet], exercise: \"운동량\"}";

/// Builds the generateContent request: prompt text plus the inline image
/// blob, with low-temperature sampling so the answer shape stays stable.
pub(crate) fn build_request(data_url: &DataUrl) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some(Role::User),
            parts: vec![
                Part::Text {
                    text: ANALYSIS_PROMPT.to_string(),
                },
                Part::InlineData {
                    inline_data: Blob {
                        mime_type: data_url.mime_type().to_string(),
                        data: data_url.payload().to_string(),
                    },
                },
            ],
        }],
        generation_config: Some(GenerationConfig {
            temperature: Some(0.2),
            top_k: Some(1),
            top_p: Some(1.0),
            max_output_tokens: None,
        }),
    }
}
