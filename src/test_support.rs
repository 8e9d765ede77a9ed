//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::agent::{AgentClient, AgentError, AgentReply, AgentRequest};

/// An agent that never gets called in tests that don't send.
pub struct NoopAgent;

#[async_trait]
impl AgentClient for NoopAgent {
    fn name(&self) -> &str {
        "noop"
    }

    async fn send(&self, _request: AgentRequest<'_>) -> Result<AgentReply, AgentError> {
        Ok(AgentReply::Confirmed { message: None })
    }
}

/// An agent that records prompts and answers with a canned reply.
pub struct ScriptedAgent {
    pub reply: Mutex<Option<Result<AgentReply, AgentError>>>,
    pub seen: Mutex<Vec<(String, String)>>,
}

impl ScriptedAgent {
    pub fn new(reply: Result<AgentReply, AgentError>) -> Self {
        Self {
            reply: Mutex::new(Some(reply)),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AgentClient for ScriptedAgent {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn send(&self, request: AgentRequest<'_>) -> Result<AgentReply, AgentError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push((request.session_id.to_string(), request.message.to_string()));
        }
        self.reply
            .lock()
            .ok()
            .and_then(|mut r| r.take())
            .unwrap_or_else(|| Err(AgentError::Rejected("script exhausted".into())))
    }
}

/// Creates a test App with a NoopAgent and a fixed session id.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::with_session_id(Arc::new(NoopAgent), "test-session".to_string())
}
