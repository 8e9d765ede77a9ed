//! # Form State
//!
//! The greeting request as the user is filling it in. Every value is kept as
//! typed; trimming happens in validation and prompt composition.

use crate::core::catalog::{self, DEFAULT_TONE, OTHER_FESTIVAL};

/// Free-text fields that can be edited one keystroke at a time.
///
/// Festival and tone are picked from catalogs and have their own actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CustomOccasion,
    RecipientName,
    RecipientEmail,
    Relationship,
    SenderName,
    AdditionalTouches,
}

impl Field {
    pub const fn label(self) -> &'static str {
        match self {
            Field::CustomOccasion => "Custom Occasion Name *",
            Field::RecipientName => "Recipient Name *",
            Field::RecipientEmail => "Recipient Email *",
            Field::Relationship => "Relationship / Context",
            Field::SenderName => "Your Name / Company *",
            Field::AdditionalTouches => "Additional Personal Touches",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Field::CustomOccasion => "e.g., Graduation, Anniversary, Housewarming",
            Field::RecipientName => "Enter recipient's name",
            Field::RecipientEmail => "recipient@example.com",
            Field::Relationship => "friend, colleague, family, etc.",
            Field::SenderName => "Your name or company name",
            Field::AdditionalTouches => {
                "e.g., Mention their new job, include gratitude for past support, reference shared memories..."
            }
        }
    }

    /// Only the personal-touches box accepts newlines.
    pub const fn is_multiline(self) -> bool {
        matches!(self, Field::AdditionalTouches)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub festival: String,
    pub custom_occasion: String,
    pub recipient_name: String,
    pub recipient_email: String,
    pub relationship: String,
    pub tone: String,
    pub additional_touches: String,
    pub sender_name: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            festival: String::new(),
            custom_occasion: String::new(),
            recipient_name: String::new(),
            recipient_email: String::new(),
            relationship: String::new(),
            tone: DEFAULT_TONE.to_string(),
            additional_touches: String::new(),
            sender_name: String::new(),
        }
    }
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CustomOccasion => &self.custom_occasion,
            Field::RecipientName => &self.recipient_name,
            Field::RecipientEmail => &self.recipient_email,
            Field::Relationship => &self.relationship,
            Field::SenderName => &self.sender_name,
            Field::AdditionalTouches => &self.additional_touches,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::CustomOccasion => &mut self.custom_occasion,
            Field::RecipientName => &mut self.recipient_name,
            Field::RecipientEmail => &mut self.recipient_email,
            Field::Relationship => &mut self.relationship,
            Field::SenderName => &mut self.sender_name,
            Field::AdditionalTouches => &mut self.additional_touches,
        };
        *slot = value;
    }

    pub fn is_other(&self) -> bool {
        self.festival == OTHER_FESTIVAL
    }

    /// The name of the event being celebrated: the custom text for "Other",
    /// otherwise the catalog label.
    pub fn occasion(&self) -> &str {
        if self.is_other() {
            self.custom_occasion.trim()
        } else {
            catalog::festival(&self.festival)
                .map(|f| f.label)
                .unwrap_or(self.festival.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = FormState::default();
        assert!(form.festival.is_empty());
        assert_eq!(form.tone, DEFAULT_TONE);
        assert!(form.sender_name.is_empty());
    }

    #[test]
    fn test_get_set_round_trip_per_field() {
        let mut form = FormState::default();
        form.set(Field::RecipientEmail, "alex@example.com".into());
        form.set(Field::AdditionalTouches, "line one\nline two".into());
        assert_eq!(form.get(Field::RecipientEmail), "alex@example.com");
        assert_eq!(form.additional_touches, "line one\nline two");
        assert!(form.get(Field::SenderName).is_empty());
    }

    #[test]
    fn test_occasion_uses_label_or_custom_text() {
        let mut form = FormState {
            festival: "New Year".into(),
            ..Default::default()
        };
        assert_eq!(form.occasion(), "New Year");

        form.festival = OTHER_FESTIVAL.into();
        form.custom_occasion = "  Graduation ".into();
        assert_eq!(form.occasion(), "Graduation");
    }

    #[test]
    fn test_only_notes_are_multiline() {
        assert!(Field::AdditionalTouches.is_multiline());
        assert!(!Field::RecipientName.is_multiline());
    }
}
