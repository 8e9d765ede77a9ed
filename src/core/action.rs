//! # Actions
//!
//! Everything that can happen in FestiveMailer becomes an `Action`.
//! User edits a field? That's `Action::SetField(field, value)`.
//! Agent answers? That's `Action::SendFinished(result)`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing any I/O the adapter should perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::agent::AgentReply;
use crate::core::catalog;
use crate::core::form::Field;
use crate::core::navigation::Nav;
use crate::core::preview::PreviewData;
use crate::core::prompt::compose;
use crate::core::state::{App, WELCOME_STATUS};
use crate::core::validate::{error_summary, validate};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetField(Field, String),
    /// Pick a festival by catalog value.
    SelectFestival(String),
    /// Pick a tone by catalog value.
    SelectTone(String),
    /// "Generate & Send".
    Submit,
    /// Result of the in-flight send; the error is already display text.
    SendFinished(Result<AgentReply, String>),
    /// Clear everything and go back to the form.
    Reset,
    /// Go back to the form, keeping what was typed.
    ShowCreate,
    Quit,
}

/// A composed prompt ready to go out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnSend(OutgoingMessage),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SetField(field, value) => {
            app.form.set(field, value);
            Effect::None
        }
        Action::SelectFestival(value) => {
            if catalog::festival(&value).is_some() {
                app.form.festival = value;
            } else {
                warn!("Ignoring unknown festival '{}'", value);
            }
            Effect::None
        }
        Action::SelectTone(value) => {
            if catalog::tone_index(&value).is_some() {
                app.form.tone = value;
            } else {
                warn!("Ignoring unknown tone '{}'", value);
            }
            Effect::None
        }
        Action::Submit => submit(app),
        Action::SendFinished(result) => {
            app.is_loading = false;
            let sent = app.pending.take().unwrap_or_else(|| app.form.clone());
            match result {
                Ok(reply) => {
                    let occasion = sent.occasion().to_string();
                    app.preview = PreviewData::from_reply(&reply, &occasion).with_request(sent);
                    app.screen = app.screen.next(Nav::Sent);
                    app.error = None;
                    app.status_message = format!("{occasion} greeting sent");
                    info!("Send succeeded, subject: {}", app.preview.subject);
                }
                Err(message) => {
                    warn!("Send failed: {}", message);
                    app.error = Some(message);
                    app.status_message = String::from("Send failed");
                }
            }
            Effect::None
        }
        Action::Reset => {
            app.form = Default::default();
            app.preview = PreviewData::default();
            app.error = None;
            app.screen = app.screen.next(Nav::Reset);
            app.status_message = String::from(WELCOME_STATUS);
            Effect::None
        }
        Action::ShowCreate => {
            app.screen = app.screen.next(Nav::BackToCreate);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn submit(app: &mut App) -> Effect {
    if app.is_loading {
        debug!("Submit ignored: a send is already in flight");
        return Effect::None;
    }

    if let Some(summary) = error_summary(&validate(&app.form)) {
        app.error = Some(summary);
        return Effect::None;
    }

    let message = compose(&app.form);
    app.is_loading = true;
    app.error = None;
    app.pending = Some(app.form.clone());
    app.status_message = String::from("Sending Magic...");

    Effect::SpawnSend(OutgoingMessage {
        session_id: app.session_id.clone(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::DEFAULT_TONE;
    use crate::core::form::FormState;
    use crate::core::navigation::Screen;
    use crate::test_support::test_app;

    fn fill_christmas(app: &mut App) {
        update(app, Action::SelectFestival("Christmas".into()));
        update(app, Action::SetField(Field::RecipientName, "Alex".into()));
        update(app, Action::SetField(Field::RecipientEmail, "alex@example.com".into()));
        update(app, Action::SetField(Field::SenderName, "Sam".into()));
    }

    fn expect_send(effect: Effect) -> OutgoingMessage {
        match effect {
            Effect::SpawnSend(msg) => msg,
            other => panic!("Expected SpawnSend, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_invalid_form_sets_error_without_effect() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit);
        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        let error = app.error.unwrap();
        assert!(error.starts_with("Festival is required, Recipient name is required"));
    }

    #[test]
    fn test_submit_valid_form_spawns_send() {
        let mut app = test_app();
        fill_christmas(&mut app);
        app.error = Some("stale".into());

        let msg = expect_send(update(&mut app, Action::Submit));
        assert_eq!(msg.session_id, "test-session");
        assert!(msg.message.starts_with("write a happy Christmas mail Alex.\nFrom: Sam"));
        assert!(app.is_loading);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_duplicate_submit_ignored_while_loading() {
        let mut app = test_app();
        fill_christmas(&mut app);
        expect_send(update(&mut app, Action::Submit));
        assert_eq!(update(&mut app, Action::Submit), Effect::None);
    }

    #[test]
    fn test_success_switches_screen_and_fills_preview() {
        let mut app = test_app();
        fill_christmas(&mut app);
        expect_send(update(&mut app, Action::Submit));

        let reply = AgentReply::Composed("Subject: Joyful Christmas!\n\nWishing you...".into());
        update(&mut app, Action::SendFinished(Ok(reply)));

        assert!(!app.is_loading);
        assert_eq!(app.screen, Screen::Success);
        assert_eq!(app.preview.subject, "Joyful Christmas!");
        assert_eq!(app.preview.body, "Wishing you...");
    }

    #[test]
    fn test_confirmation_subject_uses_occasion_at_submit_time() {
        let mut app = test_app();
        fill_christmas(&mut app);
        expect_send(update(&mut app, Action::Submit));
        update(&mut app, Action::SelectFestival("Holi".into()));

        update(&mut app, Action::SendFinished(Ok(AgentReply::Confirmed { message: None })));
        assert_eq!(app.preview.subject, "Christmas Greetings");
    }

    #[test]
    fn test_reset_while_sending_keeps_submitted_details() {
        let mut app = test_app();
        fill_christmas(&mut app);
        expect_send(update(&mut app, Action::Submit));
        update(&mut app, Action::Reset);
        assert!(app.form.recipient_name.is_empty());

        update(&mut app, Action::SendFinished(Ok(AgentReply::Confirmed { message: None })));
        assert_eq!(app.screen, Screen::Success);
        assert_eq!(app.preview.request.recipient_name, "Alex");
        assert_eq!(app.preview.request.occasion(), "Christmas");
        assert_eq!(app.preview.subject, "Christmas Greetings");
        assert_eq!(app.status_message, "Christmas greeting sent");
        assert!(app.pending.is_none());
    }

    #[test]
    fn test_failure_keeps_screen_and_form() {
        let mut app = test_app();
        fill_christmas(&mut app);
        expect_send(update(&mut app, Action::Submit));

        update(&mut app, Action::SendFinished(Err("API Error (500): rate limited".into())));
        assert!(!app.is_loading);
        assert_eq!(app.screen, Screen::Create);
        assert_eq!(app.error.as_deref(), Some("API Error (500): rate limited"));
        assert_eq!(app.form.recipient_name, "Alex");
        assert!(app.preview.is_empty());
    }

    #[test]
    fn test_reset_after_success_restores_defaults() {
        let mut app = test_app();
        fill_christmas(&mut app);
        update(&mut app, Action::SelectTone("Fun & Lighthearted".into()));
        expect_send(update(&mut app, Action::Submit));
        update(&mut app, Action::SendFinished(Ok(AgentReply::Composed("Hi".into()))));

        update(&mut app, Action::Reset);
        assert_eq!(app.form, FormState::default());
        assert_eq!(app.form.tone, DEFAULT_TONE);
        assert!(app.preview.is_empty());
        assert_eq!(app.screen, Screen::Create);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_show_create_keeps_form_and_preview() {
        let mut app = test_app();
        fill_christmas(&mut app);
        expect_send(update(&mut app, Action::Submit));
        update(&mut app, Action::SendFinished(Ok(AgentReply::Composed("Hi".into()))));

        update(&mut app, Action::ShowCreate);
        assert_eq!(app.screen, Screen::Create);
        assert_eq!(app.form.recipient_email, "alex@example.com");
        assert!(!app.preview.is_empty());
    }

    #[test]
    fn test_unknown_catalog_values_ignored() {
        let mut app = test_app();
        update(&mut app, Action::SelectFestival("Halloween".into()));
        update(&mut app, Action::SelectTone("Sarcastic".into()));
        assert!(app.form.festival.is_empty());
        assert_eq!(app.form.tone, DEFAULT_TONE);
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
