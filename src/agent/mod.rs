pub mod client;
pub mod http;
pub mod types;

pub use client::{AgentClient, AgentError, AgentRequest};
pub use http::{AgentSettings, HttpAgentClient};
pub use types::AgentReply;
