//! # Preview
//!
//! The subject/body pair shown after a send. It is what the agent *said*
//! it sent, not proof that anything was delivered. The form snapshot taken
//! at submit travels with it, so the confirmation card doesn't read the
//! live form.

use std::sync::LazyLock;

use chrono::{DateTime, Local};
use regex::Regex;

use crate::agent::AgentReply;
use crate::core::form::FormState;

/// Body used when the agent only acknowledged the send.
pub const DEFAULT_CONFIRMATION: &str = "Your festival greeting has been sent successfully!";

static SUBJECT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Subject:\s*(.+)").expect("Invalid subject regex"));

/// The subject line plus up to one blank line after it.
static SUBJECT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Subject:\s*.+(\r?\n){0,2}").expect("Invalid subject block regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewData {
    pub subject: String,
    pub body: String,
    pub sent_at: Option<DateTime<Local>>,
    /// The form as it was submitted.
    pub request: FormState,
}

impl PreviewData {
    /// Derives the preview from an agent reply. `occasion` fills in the
    /// subject when the reply doesn't carry one.
    pub fn from_reply(reply: &AgentReply, occasion: &str) -> Self {
        let fallback_subject = format!("{occasion} Greetings");

        let (subject, body) = match reply {
            AgentReply::Composed(text) => match SUBJECT_LINE.captures(text) {
                Some(caps) => {
                    let subject = caps[1].trim().to_string();
                    let body = SUBJECT_BLOCK.replace(text, "").trim().to_string();
                    (subject, body)
                }
                None => (fallback_subject, text.clone()),
            },
            AgentReply::Confirmed { message } => (
                fallback_subject,
                message
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CONFIRMATION.to_string()),
            ),
        };

        Self {
            subject,
            body,
            sent_at: Some(Local::now()),
            request: FormState::default(),
        }
    }

    pub fn with_request(mut self, request: FormState) -> Self {
        self.request = request;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.subject.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    pub fn char_count(&self) -> usize {
        self.body.chars().count()
    }
}
