//! Integration tests for the analysis pipeline against the mock transport.

use std::sync::Arc;

use calorie_lens::mocks::MockHttpTransport;
use calorie_lens::transport::{HttpMethod, TransportError};
use calorie_lens::{CalorieReport, CalorieValue, DataUrl, LensClient, LensConfig, LensError, ResponseError};
use pretty_assertions::assert_eq;
use secrecy::SecretString;

fn create_test_client(transport: Arc<MockHttpTransport>) -> LensClient {
    let config = LensConfig::builder()
        .api_key(SecretString::new("test-key".into()))
        .build()
        .unwrap();

    LensClient::from_parts(config, transport).unwrap()
}

fn test_photo() -> DataUrl {
    DataUrl::from_bytes("image/jpeg", b"fake-jpeg-bytes")
}

/// Candidate envelope with `text` as the model's reply.
fn envelope(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{"text": text}],
                "role": "model"
            },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {
            "promptTokenCount": 260,
            "candidatesTokenCount": 48,
            "totalTokenCount": 308
        }
    })
    .to_string()
}

#[tokio::test]
async fn test_analyze_success() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(
        200,
        &envelope(
            "분석 결과:\n{\"food\":\"김치찌개\",\"calorie\":450,\"detail\":[\"밥 300kcal\",\"찌개 150kcal\"],\"exercise\":\"달리기 40분\"}",
        ),
    );

    let client = create_test_client(transport.clone());
    let report = client.analyze(&test_photo()).await;

    assert_eq!(report.food, "김치찌개");
    assert_eq!(report.calorie, CalorieValue::Number(450.0));
    assert_eq!(
        report.detail,
        vec!["밥 300kcal".to_string(), "찌개 150kcal".to_string()]
    );
    assert_eq!(report.exercise, "달리기 40분");

    transport.verify_request_count(1);
    transport.verify_request(0, HttpMethod::Post, "models/gemini-1.5-flash:generateContent");
    transport.verify_request(0, HttpMethod::Post, "key=test-key");
}

#[tokio::test]
async fn test_analyze_request_body_contains_prompt_and_image() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(
        200,
        &envelope(r#"{"food":"사과","calorie":95,"detail":[],"exercise":"걷기 20분"}"#),
    );

    let client = create_test_client(transport.clone());
    let photo = test_photo();
    let _ = client.analyze(&photo).await;

    let request = transport.last_request().unwrap();
    let body = String::from_utf8(request.body.unwrap().to_vec()).unwrap();

    assert!(body.contains("예상 칼로리"));
    assert!(body.contains("\"inlineData\""));
    assert!(body.contains("\"mimeType\":\"image/jpeg\""));
    assert!(body.contains(photo.payload()));
    assert!(body.contains("\"temperature\":0.2"));
}

#[tokio::test]
async fn test_analyze_string_calorie() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(
        200,
        &envelope(r#"{"food":"Pizza","calorie":"약 300","detail":["치즈 150"],"exercise":"walk 60 min"}"#),
    );

    let client = create_test_client(transport);
    let report = client.analyze(&test_photo()).await;

    assert_eq!(report.calorie, CalorieValue::Text("약 300".to_string()));
}

#[tokio::test]
async fn test_analyze_missing_detail_defaults_empty() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(
        200,
        &envelope(r#"{"food":"바나나","calorie":105,"exercise":"요가 30분"}"#),
    );

    let client = create_test_client(transport);
    let report = client.analyze(&test_photo()).await;

    assert_eq!(report.food, "바나나");
    assert!(report.detail.is_empty());
}

#[tokio::test]
async fn test_analyze_sentinel_on_http_error() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(500, r#"{"error":{"message":"internal"}}"#);

    let client = create_test_client(transport);
    let report = client.analyze(&test_photo()).await;

    assert_eq!(report, CalorieReport::failure());
}

#[tokio::test]
async fn test_analyze_sentinel_on_missing_candidates() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, "{}");

    let client = create_test_client(transport);
    let report = client.analyze(&test_photo()).await;

    assert_eq!(report, CalorieReport::failure());
}

#[tokio::test]
async fn test_analyze_sentinel_on_non_json_text() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, &envelope("죄송하지만 음식을 알아볼 수 없어요."));

    let client = create_test_client(transport);
    let report = client.analyze(&test_photo()).await;

    assert_eq!(report, CalorieReport::failure());
}

#[tokio::test]
async fn test_analyze_sentinel_on_malformed_report() {
    let transport = Arc::new(MockHttpTransport::new());
    // An embedded object, but not a calorie report.
    transport.enqueue_json_response(200, &envelope(r#"{"unexpected":"shape"}"#));

    let client = create_test_client(transport);
    let report = client.analyze(&test_photo()).await;

    assert_eq!(report, CalorieReport::failure());
}

#[tokio::test]
async fn test_analyze_sentinel_on_network_error() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_error(TransportError::Connection("connection refused".to_string()));

    let client = create_test_client(transport);
    let report = client.analyze(&test_photo()).await;

    assert_eq!(report, CalorieReport::failure());
}

#[tokio::test]
async fn test_try_analyze_surfaces_cause() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, &envelope("no object here"));

    let client = create_test_client(transport);
    let error = client.try_analyze(&test_photo()).await.unwrap_err();

    assert!(matches!(
        error,
        LensError::Response(ResponseError::NoEmbeddedObject)
    ));
}

#[tokio::test]
async fn test_try_analyze_surfaces_http_status() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(429, r#"{"error":{"message":"Too many requests"}}"#);

    let client = create_test_client(transport);
    let error = client.try_analyze(&test_photo()).await.unwrap_err();

    match error {
        LensError::Response(ResponseError::HttpStatus { status, message }) => {
            assert_eq!(status, 429);
            assert_eq!(message, "Too many requests");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_analyze_uses_configured_model() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(
        200,
        &envelope(r#"{"food":"샐러드","calorie":180,"detail":[],"exercise":"수영 15분"}"#),
    );

    let config = LensConfig::builder()
        .api_key(SecretString::new("test-key".into()))
        .model("gemini-1.5-pro")
        .build()
        .unwrap();
    let client = LensClient::from_parts(config, transport.clone()).unwrap();

    let _ = client.analyze(&test_photo()).await;
    transport.verify_request(0, HttpMethod::Post, "models/gemini-1.5-pro:generateContent");
}

#[tokio::test]
async fn test_requests_are_independent() {
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(500, "oops");
    transport.enqueue_json_response(
        200,
        &envelope(r#"{"food":"라면","calorie":500,"detail":["면 400"],"exercise":"줄넘기 25분"}"#),
    );

    let client = create_test_client(transport.clone());

    let first = client.analyze(&test_photo()).await;
    assert!(first.is_failure());

    let second = client.analyze(&test_photo()).await;
    assert_eq!(second.food, "라면");

    transport.verify_request_count(2);
}
