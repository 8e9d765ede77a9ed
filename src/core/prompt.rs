//! # Prompt Composer
//!
//! Turns a validated form into the one natural-language instruction the agent
//! receives. The agent parses the sentence and performs the send itself, so
//! this string is the entire request.

use crate::core::catalog::DEFAULT_TONE;
use crate::core::form::FormState;

/// Builds the instruction for the agent. Pure: the same form always yields
/// the same string, and the session id never appears in it.
pub fn compose(form: &FormState) -> String {
    let relationship = form.relationship.trim();
    let relationship_clause = if relationship.is_empty() {
        String::new()
    } else {
        format!(" to my {relationship}")
    };

    let notes = form.additional_touches.trim();
    let note_clause = if notes.is_empty() {
        String::new()
    } else {
        format!("\nPersonal note: {notes}")
    };

    let tone_clause = if form.tone == DEFAULT_TONE {
        String::new()
    } else {
        format!(" in a {} tone", form.tone.to_lowercase())
    };

    format!(
        "write a happy {occasion} mail{relationship_clause} {recipient}{tone_clause}.{note_clause}\n\
         From: {sender}\n\
         send this to {email} yourself, just send it yourself dont ask any confirmations okay",
        occasion = form.occasion(),
        recipient = form.recipient_name.trim(),
        sender = form.sender_name.trim(),
        email = form.recipient_email.trim(),
    )
}
