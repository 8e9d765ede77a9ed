use std::fmt;

use async_trait::async_trait;

use super::types::AgentReply;

/// Errors that can occur while talking to the agent.
/// None of them are retried; each ends up as the error banner text.
#[derive(Debug)]
pub enum AgentError {
    /// Request never completed (DNS, refused connection, broken body).
    Network(String),
    /// Agent answered with a non-success status.
    Api { status: u16, message: String },
    /// A success body that wasn't JSON.
    Parse(String),
    /// A success body in neither recognised shape.
    Rejected(String),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::Network(msg) | AgentError::Parse(msg) => write!(
                f,
                "Network error: {msg}. Please check your connection and try again."
            ),
            AgentError::Api { status, message } => {
                write!(f, "API Error ({status}): {message}")
            }
            AgentError::Rejected(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AgentError {}

/// One prompt for the agent, tagged with the session it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct AgentRequest<'a> {
    pub session_id: &'a str,
    pub message: &'a str,
}

/// Something that accepts a prompt and answers with a structured or
/// unstructured reply. The HTTP agent is one implementation; tests use mocks.
#[async_trait]
pub trait AgentClient: Send + Sync {
    /// Returns the name of the client (for logs).
    fn name(&self) -> &str;

    /// Submits the prompt and waits for the agent's reply.
    async fn send(&self, request: AgentRequest<'_>) -> Result<AgentReply, AgentError>;
}
