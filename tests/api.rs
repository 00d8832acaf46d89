use axum::http::StatusCode;
use axum::body::Body;
use http_body_util::BodyExt;
use tower::ServiceExt;
use serde_json::{json, Value};
use observer::analysis::ContractAnalyzer;
use observer::api::{build_router, build_router_with_public, AppState};
use observer::db::Database;
use observer::errors::ObserverError;
use observer::knowledge::KnowledgeBase;
use observer::llm::{LLMProvider, LLMResponse};
use observer::registry::VulnerableRegistry;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

const TALA: &str = "0x1234567890123456789012345678901234567890";

/// Model stand-in that answers every prompt with the same text, or fails.
struct ScriptedProvider {
    reply: Result<String, String>,
}

#[async_trait]
impl LLMProvider for ScriptedProvider {
    async fn complete(&self, _prompt: &str, _system: Option<&str>) -> Result<LLMResponse, ObserverError> {
        match &self.reply {
            Ok(text) => Ok(LLMResponse::text(text.clone(), "scripted-model")),
            Err(msg) => Err(ObserverError::Network(msg.clone())),
        }
    }

    fn provider_name(&self) -> &str { "scripted" }
    fn model_name(&self) -> &str { "scripted-model" }
}

fn create_test_state(reply: Result<&str, &str>) -> AppState {
    let knowledge = Arc::new(KnowledgeBase::builtin().unwrap());
    let registry = Arc::new(VulnerableRegistry::builtin().unwrap());
    let provider = Arc::new(ScriptedProvider {
        reply: reply.map(String::from).map_err(String::from),
    });
    AppState {
        analyzer: Arc::new(ContractAnalyzer::new(
            provider,
            knowledge.clone(),
            registry.clone(),
            Duration::from_secs(5),
        )),
        knowledge,
        registry,
        db: Database::in_memory().unwrap(),
    }
}

fn default_state() -> AppState {
    create_test_state(Ok(ANALYSIS_REPLY))
}

fn app(state: &AppState) -> axum::Router {
    build_router(state.clone())
}

fn make_request(method: &str, uri: &str, body: Option<Value>) -> axum::http::Request<Body> {
    let builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    match body {
        Some(b) => builder.body(Body::from(serde_json::to_string(&b).unwrap())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Request with a raw body and no `Content-Type` header.
fn make_raw_request(method: &str, uri: &str, body: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        panic!("Empty response body. Status: {}, Headers: {:?}", parts.status, parts.headers);
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

const ANALYSIS_REPLY: &str = r#"Here is what I observe.
```json
{
  "scamProbability": 78,
  "vulnerabilities": [
    {"severity": "critical", "category": "Arithmetic", "description": "Fee rounds to zero", "location": "transfer()", "implication": "Fees are optional for the patient"}
  ],
  "powerDynamics": {
    "centralizationPoints": ["feeRecipient"],
    "privilegedActors": ["owner"],
    "exitMechanisms": ["transfer"],
    "hiddenIncentives": []
  },
  "recommendation": "Do not hold.",
  "observerInsight": "The TALA lineage repeats itself.",
  "knownVulnerableInteractions": []
}
```"#;

#[tokio::test]
async fn test_health_endpoint() {
    let state = default_state();
    let response = app(&state).oneshot(make_request("GET", "/api/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "observer");
    assert_eq!(body["provider"], "scripted");
    assert_eq!(body["model"], "scripted-model");
}

#[tokio::test]
async fn test_analyze_requires_contract_code() {
    let state = default_state();

    let response = app(&state)
        .oneshot(make_request("POST", "/api/analysis/analyze", Some(json!({}))))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_json(response).await["error"], "Contract code is required");

    let response = app(&state)
        .oneshot(make_request("POST", "/api/analysis/analyze", Some(json!({"contractCode": "   \n"}))))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_replaces_model_matches_with_local_ones() {
    let state = default_state();
    let code = format!("contract Exploit {{ address t = {}; uint fee = a * 3 / 100000; }}", TALA.replace("0x", "0X"));
    let response = app(&state)
        .oneshot(make_request("POST", "/api/analysis/analyze", Some(json!({
            "contractCode": code,
            "contractAddress": "0x9999999999999999999999999999999999999999"
        }))))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["scamProbability"], 78);
    assert_eq!(body["vulnerabilities"][0]["severity"], "critical");
    assert_eq!(body["powerDynamics"]["privilegedActors"][0], "owner");

    let matches = body["knownVulnerableInteractions"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["address"], TALA);
    assert_eq!(matches[0]["matchReason"], "Direct address reference found in contract code");
}

#[tokio::test]
async fn test_analyze_unparseable_reply_is_500() {
    let state = create_test_state(Ok("I would rather not."));
    let response = app(&state)
        .oneshot(make_request("POST", "/api/analysis/analyze", Some(json!({"contractCode": "contract A {}"}))))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Analysis failed");
    assert!(body["message"].as_str().unwrap().starts_with("Failed to parse analysis result"));
}

#[tokio::test]
async fn test_analyze_transport_failure_is_500() {
    let state = create_test_state(Err("connection refused"));
    let response = app(&state)
        .oneshot(make_request("POST", "/api/analysis/analyze", Some(json!({"contractCode": "contract A {}"}))))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Analysis failed");
    assert!(body["message"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_chat_message() {
    let state = create_test_state(Ok("Whoever holds the owner key holds the token."));
    let response = app(&state)
        .oneshot(make_request("POST", "/api/chat/message", Some(json!({
            "message": "Who controls this?",
            "contractContext": "contract T {}"
        }))))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["response"], "Whoever holds the owner key holds the token.");
}

#[tokio::test]
async fn test_chat_requires_message() {
    let state = default_state();
    let response = app(&state)
        .oneshot(make_request("POST", "/api/chat/message", Some(json!({"message": ""}))))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_json(response).await["error"], "Message is required");
}

#[tokio::test]
async fn test_chat_failure_label() {
    let state = create_test_state(Err("upstream down"));
    let response = app(&state)
        .oneshot(make_request("POST", "/api/chat/message", Some(json!({"message": "hi"}))))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response_json(response).await["error"], "Chat failed");
}

#[tokio::test]
async fn test_vulnerable_contracts_listing_and_lookup() {
    let state = default_state();

    let response = app(&state)
        .oneshot(make_request("GET", "/api/analysis/vulnerable-contracts", None))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["contracts"].as_array().unwrap().len(), 5);
    assert_eq!(body["contracts"][0]["dateIdentified"], "2024-01-15");

    let uri = format!("/api/analysis/vulnerable-contracts/{}", TALA.replace("0x", "0X"));
    let body = response_json(app(&state).oneshot(make_request("GET", &uri, None)).await.unwrap()).await;
    assert_eq!(body["found"], true);
    assert_eq!(body["contract"]["name"], "TALA Token");

    let uri = "/api/analysis/vulnerable-contracts/0x0000000000000000000000000000000000000000";
    let body = response_json(app(&state).oneshot(make_request("GET", uri, None)).await.unwrap()).await;
    assert_eq!(body, json!({"found": false}));
}

#[tokio::test]
async fn test_examples_endpoint() {
    let state = default_state();
    let response = app(&state).oneshot(make_request("GET", "/api/examples", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body["examples"]["tala-exploiter"].as_str().unwrap().contains("pragma solidity"));
    assert!(body["examples"]["fee-token"].is_string());
}

#[tokio::test]
async fn test_knowledge_endpoints() {
    let state = default_state();

    let body = response_json(app(&state).oneshot(make_request("GET", "/api/knowledge/patterns", None)).await.unwrap()).await;
    assert_eq!(body["patterns"].as_array().unwrap().len(), 8);
    assert!(body["patterns"][0]["exploitMethod"].is_string());

    let body = response_json(app(&state).oneshot(make_request("GET", "/api/knowledge/vectors", None)).await.unwrap()).await;
    assert_eq!(body["vectors"].as_array().unwrap().len(), 4);

    let body = response_json(app(&state).oneshot(make_request("GET", "/api/knowledge/principles", None)).await.unwrap()).await;
    assert_eq!(body["principles"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_submit_and_list_exploits() {
    let state = default_state();

    let response = app(&state)
        .oneshot(make_request("POST", "/api/exploits", Some(json!({
            "title": "TALA fee bypass",
            "description": "Split transfers below the fee threshold",
            "code": "contract Drip {}",
            "targetContract": TALA,
            "vulnerabilityType": "rounding",
            "severity": "critical",
            "author": "  ",
            "tags": ["defi", " "]
        }))))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response_json(response).await;
    let id = created["exploit"]["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["exploit"]["author"], "Anonymous");
    assert_eq!(created["exploit"]["tags"], json!(["defi"]));

    let body = response_json(app(&state).oneshot(make_request("GET", "/api/exploits", None)).await.unwrap()).await;
    let exploits = body["exploits"].as_array().unwrap();
    assert_eq!(exploits.len(), 1);
    assert_eq!(exploits[0]["id"], id.as_str());
    assert_eq!(exploits[0]["title"], "TALA fee bypass");
    assert!(exploits[0]["submittedAt"].is_string());

    let body = response_json(app(&state).oneshot(make_request("GET", &format!("/api/exploits/{}", id), None)).await.unwrap()).await;
    assert_eq!(body["exploit"]["severity"], "critical");
}

#[tokio::test]
async fn test_submit_exploit_validation() {
    let state = default_state();

    for body in [
        json!({"code": "contract A {}"}),
        json!({"title": "  ", "code": "contract A {}"}),
        json!({"title": "No code"}),
        json!({"title": "Bad severity", "code": "x", "severity": "apocalyptic"}),
    ] {
        let response = app(&state)
            .oneshot(make_request("POST", "/api/exploits", Some(body)))
            .await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let body = response_json(app(&state).oneshot(make_request("GET", "/api/exploits", None)).await.unwrap()).await;
    assert!(body["exploits"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_unknown_exploit_is_404() {
    let state = default_state();
    let response = app(&state)
        .oneshot(make_request("GET", "/api/exploits/does-not-exist", None))
        .await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_exploit_stats() {
    let state = default_state();
    for (severity, kind) in [("critical", "reentrancy"), ("high", "reentrancy"), ("critical", "rounding")] {
        let response = app(&state)
            .oneshot(make_request("POST", "/api/exploits", Some(json!({
                "title": "t", "code": "c", "severity": severity, "vulnerabilityType": kind
            }))))
            .await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let body = response_json(app(&state).oneshot(make_request("GET", "/api/exploits/stats/summary", None)).await.unwrap()).await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["bySeverity"]["critical"], 2);
    assert_eq!(body["byType"]["reentrancy"], 2);
}

#[tokio::test]
async fn test_static_fallback_serves_public_dir() {
    let state = default_state();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>The Observer</h1>").unwrap();

    let router = build_router_with_public(state, Some(dir.path()));
    let response = router.oneshot(make_request("GET", "/index.html", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<h1>The Observer</h1>");
}

#[tokio::test]
async fn test_analyze_empty_or_malformed_body_is_400() {
    let state = default_state();
    let requests = [
        make_raw_request("POST", "/api/analysis/analyze", ""),
        make_request("POST", "/api/analysis/analyze", None),
        make_request("POST", "/api/analysis/analyze", Some(json!({"contractCode": 5}))),
        make_raw_request("POST", "/api/analysis/analyze", "contract A {}"),
    ];
    for req in requests {
        let response = app(&state).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response_json(response).await["error"], "Contract code is required");
    }
}

#[tokio::test]
async fn test_chat_empty_or_malformed_body_is_400() {
    let state = default_state();
    let requests = [
        make_raw_request("POST", "/api/chat/message", ""),
        make_request("POST", "/api/chat/message", None),
        make_request("POST", "/api/chat/message", Some(json!({"message": ["not", "text"]}))),
    ];
    for req in requests {
        let response = app(&state).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response_json(response).await["error"], "Message is required");
    }
}

#[tokio::test]
async fn test_submit_exploit_without_body_is_400() {
    let state = default_state();
    for req in [
        make_raw_request("POST", "/api/exploits", ""),
        make_request("POST", "/api/exploits", None),
    ] {
        let response = app(&state).oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error"], "ValidationError");
        assert_eq!(body["message"], "Validation error: Exploit title is required");
    }
}
