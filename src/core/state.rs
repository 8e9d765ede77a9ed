//! # Application State
//!
//! Core business state for FestiveMailer. Domain data only; cursor positions,
//! focus and scroll offsets live in the `tui` module.
//!
//! ```text
//! App
//! ├── agent: Arc<dyn AgentClient>   // where prompts go
//! ├── form: FormState               // what the user typed
//! ├── preview: PreviewData          // what the agent said it sent
//! ├── screen: Screen                // Create | Success
//! ├── session_id: String            // correlation id, fixed per run
//! ├── status_message: String        // title bar text
//! ├── is_loading: bool              // a send is in flight
//! ├── pending: Option<FormState>    // form snapshot taken at submit
//! └── error: Option<String>         // banner text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::agent::AgentClient;
use crate::core::form::FormState;
use crate::core::navigation::Screen;
use crate::core::preview::PreviewData;

pub const WELCOME_STATUS: &str = "Create Stunning Festival Messages";

pub struct App {
    pub agent: Arc<dyn AgentClient>,
    pub form: FormState,
    pub preview: PreviewData,
    pub screen: Screen,
    pub session_id: String,
    pub status_message: String,
    pub is_loading: bool,
    /// Form of the request in flight. The preview is built from this, not
    /// from edits or resets made while waiting.
    pub pending: Option<FormState>,
    pub error: Option<String>,
}

/// Generate a new UUID v4 session ID.
pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl App {
    pub fn new(agent: Arc<dyn AgentClient>) -> Self {
        Self::with_session_id(agent, new_session_id())
    }

    pub fn with_session_id(agent: Arc<dyn AgentClient>, session_id: String) -> Self {
        Self {
            agent,
            form: FormState::default(),
            preview: PreviewData::default(),
            screen: Screen::default(),
            session_id,
            status_message: String::from(WELCOME_STATUS),
            is_loading: false,
            pending: None,
            error: None,
        }
    }
}
