//! # Validator
//!
//! Checks a form before anything is sent. All rules run; the caller gets
//! every violation in a fixed order and joins them for display.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::form::FormState;

/// Deliberately loose: something, `@`, something, `.`, something.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+@.+\..+").expect("Invalid email regex"));

/// Returns the violated constraints in rule order. Empty means valid.
pub fn validate(form: &FormState) -> Vec<String> {
    let mut errors = Vec::new();

    if form.festival.is_empty() {
        errors.push("Festival is required".to_string());
    }
    if form.is_other() && form.custom_occasion.trim().is_empty() {
        errors.push("Custom occasion name is required when \"Other\" is selected".to_string());
    }
    if form.recipient_name.trim().is_empty() {
        errors.push("Recipient name is required".to_string());
    }
    if form.recipient_email.trim().is_empty() {
        errors.push("Recipient email is required".to_string());
    }
    if !EMAIL_SHAPE.is_match(&form.recipient_email) {
        errors.push("Please enter a valid email".to_string());
    }
    if form.sender_name.trim().is_empty() {
        errors.push("Sender name is required".to_string());
    }

    errors
}

/// Joins violations into the single string shown in the error banner.
pub fn error_summary(errors: &[String]) -> Option<String> {
    (!errors.is_empty()).then(|| errors.join(", "))
}
