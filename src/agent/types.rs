//! Wire types for the hosted agent's chat endpoint, and the reply shapes the
//! rest of the app understands.

use serde::Serialize;
use serde_json::Value;

use super::client::AgentError;

/// Message shown when a 2xx reply matches neither success shape and carries
/// no message of its own.
pub const GENERIC_FAILURE: &str = "Failed to generate and send email";

/// What the agent told us after a successful call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentReply {
    /// The agent returned the text it wrote (usually starting with a
    /// `Subject:` line).
    Composed(String),
    /// The agent only acknowledged the send.
    Confirmed { message: Option<String> },
}

/// The request body for the chat endpoint.
#[derive(Serialize, Debug)]
pub struct ChatRequest<'a> {
    pub user_id: &'a str,
    pub agent_id: &'a str,
    pub session_id: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ErrorDetail {
    pub message: Option<String>,
}

/// Every field the agent might send back. Which ones are present decides
/// how the reply is read.
///
/// Built leniently from a `serde_json::Value`: a field with an unexpected
/// type (e.g. `"error": "quota exceeded"`) counts as absent.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
    pub error: Option<ErrorDetail>,
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

impl ChatResponse {
    /// Parses a body as JSON. Fails only when it isn't JSON at all.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        Self {
            response: str_field(value, "response"),
            status: str_field(value, "status"),
            message: str_field(value, "message"),
            error: value
                .get("error")
                .filter(|e| e.is_object())
                .map(|e| ErrorDetail {
                    message: str_field(e, "message"),
                }),
        }
    }

    /// Best server-provided explanation: `error.message`, then `message`.
    pub fn server_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|e| e.message.as_deref())
            .or(self.message.as_deref())
            .filter(|m| !m.is_empty())
    }

    /// Classifies a 2xx body into one of the recognised shapes.
    pub fn into_reply(self) -> Result<AgentReply, AgentError> {
        if let Some(text) = self.response.as_deref()
            && !text.is_empty()
        {
            return Ok(AgentReply::Composed(text.to_string()));
        }

        if self.status.as_deref() == Some("success") {
            return Ok(AgentReply::Confirmed {
                message: self.message.filter(|m| !m.is_empty()),
            });
        }

        let message = self.server_message().unwrap_or(GENERIC_FAILURE).to_string();
        Err(AgentError::Rejected(message))
    }
}

/// Extracts a readable message from a non-2xx body: JSON `error.message`,
/// JSON `message`, the raw text, or the status reason when the body is empty.
pub fn api_error_message(body: &str, reason: &str) -> String {
    match ChatResponse::parse(body) {
        Ok(parsed) => parsed
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        Err(_) if body.is_empty() => reason.to_string(),
        Err(_) => body.to_string(),
    }
}
