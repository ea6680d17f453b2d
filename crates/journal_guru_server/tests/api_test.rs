//! Router-level tests for the relay endpoint.

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use journal_guru_error::{ModelsError, ModelsErrorKind, ModelsResult};
use journal_guru_models::TextGenerator;
use journal_guru_server::{
    ErrorBody, GENERATE_PATH, HEALTH_PATH, HealthBody, MAX_OUTPUT_TOKENS, MODEL_ID, RelayService,
    create_router,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

// ============================================================================
// Stub providers
// ============================================================================

#[derive(Debug, Clone)]
struct RecordedCall {
    instruction: String,
    model: String,
    max_tokens: u32,
}

/// Provider stub that replays scripted outcomes and records every call.
#[derive(Default)]
struct StubGenerator {
    outcomes: Mutex<Vec<ModelsResult<String>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubGenerator {
    fn replying(outcomes: Vec<ModelsResult<String>>) -> Arc<Self> {
        let mut outcomes = outcomes;
        outcomes.reverse();
        Arc::new(Self {
            outcomes: Mutex::new(outcomes),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate_text(
        &self,
        instruction: &str,
        model: &str,
        max_tokens: u32,
    ) -> ModelsResult<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            instruction: instruction.to_string(),
            model: model.to_string(),
            max_tokens,
        });
        self.outcomes
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err(ModelsError::new(ModelsErrorKind::EmptyResponse)))
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn router_with(stub: &Arc<StubGenerator>) -> axum::Router {
    let generator: Arc<dyn TextGenerator> = stub.clone();
    create_router(Arc::new(RelayService::new(generator)))
}

async fn post_json(router: axum::Router, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(GENERATE_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn scenario() -> Value {
    json!({ "age": "26-35", "issue": "new job", "lens": "stoic", "numPrompts": "3-5" })
}

// ============================================================================
// Generation
// ============================================================================

#[tokio::test]
async fn test_concrete_scenario_round_trip() {
    let stub = StubGenerator::replying(vec![Ok("1. Reflect...".to_string())]);

    let (status, body) = post_json(router_with(&stub), scenario().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "prompts": "1. Reflect..." }));

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert_eq!(call.model, MODEL_ID);
    assert_eq!(call.max_tokens, MAX_OUTPUT_TOKENS);
    assert!(call.instruction.contains("26-35"));
    assert!(call.instruction.contains("new job"));
    assert!(call.instruction.contains("stoic perspective"));
    assert!(call.instruction.contains("3 to 5 journal prompts"));
}

#[tokio::test]
async fn test_provider_text_is_returned_verbatim() {
    let raw = "\n\n  1. Breathe.\n\t2. Notice.   \n";
    let stub = StubGenerator::replying(vec![Ok(raw.to_string())]);

    let (status, body) = post_json(router_with(&stub), scenario().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prompts"], raw);
}

#[tokio::test]
async fn test_empty_provider_text_is_allowed() {
    let stub = StubGenerator::replying(vec![Ok(String::new())]);

    let (status, body) = post_json(router_with(&stub), scenario().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prompts"], "");
}

#[tokio::test]
async fn test_single_prompt_uses_singular_noun() {
    let stub = StubGenerator::replying(vec![Ok("1. Reflect".to_string())]);
    let mut body = scenario();
    body["numPrompts"] = json!("1");

    post_json(router_with(&stub), body.to_string()).await;

    let instruction = &stub.calls()[0].instruction;
    assert!(instruction.contains("create 1 journal prompt for"));
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_any_empty_field_is_rejected_without_provider_call() {
    for field in ["age", "issue", "lens", "numPrompts"] {
        let stub = StubGenerator::replying(vec![Ok("unused".to_string())]);
        let mut body = scenario();
        body[field] = json!("");

        let (status, value) = post_json(router_with(&stub), body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "field {field}");
        assert_eq!(value, json!({ "error": "Missing required fields" }));
        assert!(stub.calls().is_empty(), "field {field}");
    }
}

#[tokio::test]
async fn test_any_absent_field_is_rejected_without_provider_call() {
    for field in ["age", "issue", "lens", "numPrompts"] {
        let stub = StubGenerator::replying(vec![]);
        let mut body = scenario();
        body.as_object_mut().unwrap().remove(field);

        let (status, value) = post_json(router_with(&stub), body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "field {field}");
        assert_eq!(value["error"], "Missing required fields");
        assert!(stub.calls().is_empty());
    }
}

#[tokio::test]
async fn test_malformed_json_is_a_validation_error() {
    let stub = StubGenerator::replying(vec![]);

    let (status, value) = post_json(router_with(&stub), "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], "Missing required fields");
    assert!(stub.calls().is_empty());
}

// ============================================================================
// Upstream failures
// ============================================================================

#[tokio::test]
async fn test_provider_failure_returns_500_with_details_and_recovers() {
    let stub = StubGenerator::replying(vec![
        Err(ModelsError::new(ModelsErrorKind::Timeout(
            "operation timed out".to_string(),
        ))),
        Ok("1. Reflect...".to_string()),
    ]);
    let router = router_with(&stub);

    let (status, value) = post_json(router.clone(), scenario().to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = serde_json::from_value(value).unwrap();
    assert_eq!(body.error, "Failed to generate prompts");
    assert!(body.details.unwrap().contains("operation timed out"));

    let (status, value) = post_json(router, scenario().to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["prompts"], "1. Reflect...");
}

#[tokio::test]
async fn test_empty_provider_response_is_upstream_error() {
    let stub = StubGenerator::replying(vec![Err(ModelsError::new(
        ModelsErrorKind::EmptyResponse,
    ))]);

    let (status, value) = post_json(router_with(&stub), scenario().to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(value["error"], "Failed to generate prompts");
    assert_eq!(value["details"], "Provider response contained no text content");
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_is_fixed_and_repeatable() {
    let stub = StubGenerator::replying(vec![]);
    let router = router_with(&stub);

    for _ in 0..3 {
        let request = Request::builder()
            .uri(HEALTH_PATH)
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: HealthBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, HealthBody::ok());
        assert_eq!(body.status, "ok");
    }

    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_cors_preflight_is_allowed() {
    let stub = StubGenerator::replying(vec![]);
    let request = Request::builder()
        .method("OPTIONS")
        .uri(GENERATE_PATH)
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = router_with(&stub).oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
