use festive_mailer::agent::{
    AgentClient, AgentError, AgentReply, AgentRequest, AgentSettings, HttpAgentClient,
};
use festive_mailer::agent::types::GENERIC_FAILURE;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

const CHAT_PATH: &str = "/v3/inference/chat/";

fn settings_for(server: &MockServer) -> AgentSettings {
    AgentSettings {
        endpoint: format!("{}{}", server.uri(), CHAT_PATH),
        api_key: "test-key".to_string(),
        user_id: "user@example.com".to_string(),
        agent_id: "agent-123".to_string(),
    }
}

fn request() -> AgentRequest<'static> {
    AgentRequest {
        session_id: "session-1",
        message: "write a happy Diwali mail Priya.\nFrom: Sam",
    }
}

/// Mounts a single POST responder and sends one request through the client.
async fn send_with(template: ResponseTemplate) -> Result<AgentReply, AgentError> {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(template)
        .mount(&mock_server)
        .await;

    let client = HttpAgentClient::new(settings_for(&mock_server));
    client.send(request()).await
}

// ============================================================================
// Request Shape
// ============================================================================

#[tokio::test]
async fn test_request_carries_headers_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(header("x-api-key", "test-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "user_id": "user@example.com",
            "agent_id": "agent-123",
            "session_id": "session-1",
            "message": "write a happy Diwali mail Priya.\nFrom: Sam",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpAgentClient::new(settings_for(&mock_server));
    let result = client.send(request()).await;

    assert!(result.is_ok(), "Expected success, got {:?}", result);
}

// ============================================================================
// Success Shapes
// ============================================================================

#[tokio::test]
async fn test_composed_response() {
    let body = json!({"response": "Subject: Festival of Lights\n\nDear Priya, ..."});
    let reply = send_with(ResponseTemplate::new(200).set_body_json(body))
        .await
        .unwrap();

    assert_eq!(
        reply,
        AgentReply::Composed("Subject: Festival of Lights\n\nDear Priya, ...".to_string())
    );
}

#[tokio::test]
async fn test_confirmed_response_with_message() {
    let body = json!({"status": "success", "message": "Email queued"});
    let reply = send_with(ResponseTemplate::new(200).set_body_json(body))
        .await
        .unwrap();

    assert_eq!(
        reply,
        AgentReply::Confirmed {
            message: Some("Email queued".to_string())
        }
    );
}

#[tokio::test]
async fn test_unrecognised_success_body_is_rejected() {
    let body = json!({"status": "pending"});
    let err = send_with(ResponseTemplate::new(200).set_body_json(body))
        .await
        .unwrap_err();

    assert!(matches!(err, AgentError::Rejected(_)));
    assert_eq!(err.to_string(), GENERIC_FAILURE);
}

#[tokio::test]
async fn test_rejected_body_uses_server_message() {
    let body = json!({"error": {"message": "Recipient blocked"}});
    let err = send_with(ResponseTemplate::new(200).set_body_json(body))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Recipient blocked");
}

#[tokio::test]
async fn test_mistyped_error_field_is_rejected_not_network() {
    let body = json!({"status": "error", "error": "quota exceeded"});
    let err = send_with(ResponseTemplate::new(200).set_body_json(body))
        .await
        .unwrap_err();

    assert!(matches!(err, AgentError::Rejected(_)), "Expected Rejected, got {:?}", err);
    assert_eq!(err.to_string(), GENERIC_FAILURE);
}

// ============================================================================
// Error Handling
// ============================================================================

#[tokio::test]
async fn test_api_error_with_json_message() {
    let body = json!({"error": {"message": "rate limited"}});
    let err = send_with(ResponseTemplate::new(500).set_body_json(body))
        .await
        .unwrap_err();

    match &err {
        AgentError::Api { status, message } => {
            assert_eq!(*status, 500);
            assert_eq!(message, "rate limited");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
    assert_eq!(err.to_string(), "API Error (500): rate limited");
}

#[tokio::test]
async fn test_api_error_with_plain_text_body() {
    let err = send_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "API Error (401): invalid api key");
}

#[tokio::test]
async fn test_api_error_with_empty_body_uses_reason() {
    let err = send_with(ResponseTemplate::new(502)).await.unwrap_err();

    assert_eq!(err.to_string(), "API Error (502): Bad Gateway");
}

#[tokio::test]
async fn test_non_json_success_body() {
    let err = send_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .await
        .unwrap_err();

    assert!(matches!(err, AgentError::Parse(_)));
    assert!(err.to_string().starts_with("Network error: "));
    assert!(err.to_string().ends_with("Please check your connection and try again."));
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    let settings = AgentSettings {
        // Port 9 (discard) is closed on test machines
        endpoint: "http://127.0.0.1:9/v3/inference/chat/".to_string(),
        api_key: "test-key".to_string(),
        user_id: "user@example.com".to_string(),
        agent_id: "agent-123".to_string(),
    };

    let client = HttpAgentClient::new(settings);
    let err = client.send(request()).await.unwrap_err();

    assert!(matches!(err, AgentError::Network(_)));
    assert!(err.to_string().contains("Please check your connection"));
}
