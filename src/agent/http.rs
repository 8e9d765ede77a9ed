//! HTTP agent client for hosted chat-agent inference endpoints.
//!
//! One POST per send, JSON in and JSON out. No timeout or retry: the call
//! waits until the agent answers or the connection fails.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::client::{AgentClient, AgentError, AgentRequest};
use super::types::{AgentReply, ChatRequest, ChatResponse, api_error_message};

/// Everything needed to reach one agent. All values are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSettings {
    pub endpoint: String,
    pub api_key: String,
    pub user_id: String,
    pub agent_id: String,
}

pub struct HttpAgentClient {
    settings: AgentSettings,
    client: reqwest::Client,
}

impl HttpAgentClient {
    pub fn new(settings: AgentSettings) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }

    pub fn settings(&self) -> &AgentSettings {
        &self.settings
    }
}

#[async_trait]
impl AgentClient for HttpAgentClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn send(&self, request: AgentRequest<'_>) -> Result<AgentReply, AgentError> {
        let body = ChatRequest {
            user_id: &self.settings.user_id,
            agent_id: &self.settings.agent_id,
            session_id: request.session_id,
            message: request.message,
        };

        info!(
            "Sending prompt to agent {} (session={}): {}",
            self.settings.agent_id, request.session_id, request.message
        );

        let response = self
            .client
            .post(&self.settings.endpoint)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Agent response status: {}", status);
        debug!("Agent response headers: {:?}", response.headers());

        if !status.is_success() {
            let err_body = response.text().await.unwrap_or_default();
            warn!("Agent API error: {} - {}", status.as_u16(), err_body);
            let reason = status.canonical_reason().unwrap_or("Unknown Status");
            return Err(AgentError::Api {
                status: status.as_u16(),
                message: api_error_message(&err_body, reason),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| AgentError::Network(e.to_string()))?;
        debug!("Agent response body: {}", text);

        let parsed = ChatResponse::parse(&text).map_err(|e| AgentError::Parse(e.to_string()))?;

        parsed.into_reply()
    }
}
