//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Sending**: draws every ~80ms so the button spinner animates.
//! - **Idle**: sleeps up to 500ms and only redraws on events or resize.
//!
//! ## Sends
//!
//! `Effect::SpawnSend` becomes one tokio task that calls the agent and posts
//! `Action::SendFinished` back over an mpsc channel. The event loop never
//! awaits network I/O.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::agent::{AgentClient, AgentRequest, HttpAgentClient};
use crate::core::action::{Action, Effect, OutgoingMessage, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CreateForm, CreateFormEvent, CreateFormState, SuccessEvent, SuccessView, SuccessViewState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub create_form: CreateFormState,
    pub success_view: SuccessViewState,
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Keyboard enhancement is harmlessly ignored by terminals without it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // Blinking cursors flicker under continuous redraws
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let agent = Arc::new(HttpAgentClient::new(config.agent));
    info!(
        "Using {} agent {} at {}",
        agent.name(),
        agent.settings().agent_id,
        agent.settings().endpoint
    );
    let mut app = App::new(agent);
    info!("Session id: {}", app.session_id);
    let mut tui = TuiState::default();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain every pending event before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            for action in handle_event(&app, &mut tui, &event) {
                if apply(&mut app, &mut tui, action, &tx) {
                    break 'main;
                }
            }
        }

        // Results from background sends
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if apply(&mut app, &mut tui, action, &tx) {
                break 'main;
            }
        }
    }

    info!("FestiveMailer shutting down");
    ratatui::restore();
    Ok(())
}

/// Runs one action through the reducer and carries out its effect.
/// Returns true when the app should quit.
fn apply(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    if matches!(action, Action::SendFinished(Ok(_))) {
        tui.success_view = SuccessViewState::default();
    }
    if matches!(action, Action::Reset) {
        tui.create_form.reset();
    }
    match update(app, action) {
        Effect::None => false,
        Effect::SpawnSend(outgoing) => {
            spawn_send(app.agent.clone(), outgoing, tx.clone());
            false
        }
        Effect::Quit => true,
    }
}

/// Maps one terminal event to the actions it triggers. Global shortcuts
/// first, then whichever screen is showing.
fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Vec<Action> {
    match event {
        TuiEvent::Resize => return Vec::new(),
        TuiEvent::Quit | TuiEvent::ForceQuit => return vec![Action::Quit],
        TuiEvent::ResetForm => return vec![Action::Reset],
        TuiEvent::ShowCreate => return vec![Action::ShowCreate],
        TuiEvent::SendNow if app.screen == Screen::Create => return vec![Action::Submit],
        _ => {}
    }

    match app.screen {
        Screen::Create => {
            let mut form = CreateForm::new(&app.form, &mut tui.create_form, app.is_loading, 0);
            match form.handle_event(event) {
                Some(CreateFormEvent::Edit(field, value)) => vec![Action::SetField(field, value)],
                Some(CreateFormEvent::SelectFestival(value)) => {
                    vec![Action::SelectFestival(value.to_string())]
                }
                Some(CreateFormEvent::SelectTone(value)) => vec![Action::SelectTone(value.to_string())],
                Some(CreateFormEvent::Submit) => vec![Action::Submit],
                Some(CreateFormEvent::Reset) => vec![Action::Reset],
                None => Vec::new(),
            }
        }
        Screen::Success => {
            let mut view = SuccessView::new(&app.preview, &mut tui.success_view);
            match view.handle_event(event) {
                Some(SuccessEvent::SendAnother) => vec![Action::Reset],
                None => Vec::new(),
            }
        }
    }
}

fn spawn_send(agent: Arc<dyn AgentClient>, outgoing: OutgoingMessage, tx: mpsc::Sender<Action>) {
    info!("Spawning send (session={})", outgoing.session_id);
    tokio::spawn(async move {
        let action = deliver(agent.as_ref(), &outgoing).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver send result: receiver dropped");
        }
    });
}

/// Calls the agent and wraps the outcome as the action the reducer expects.
async fn deliver(agent: &dyn AgentClient, outgoing: &OutgoingMessage) -> Action {
    let request = AgentRequest {
        session_id: &outgoing.session_id,
        message: &outgoing.message,
    };
    match agent.send(request).await {
        Ok(reply) => Action::SendFinished(Ok(reply)),
        Err(e) => {
            warn!("Agent {} failed: {:?}", agent.name(), e);
            Action::SendFinished(Err(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentError, AgentReply};
    use crate::core::form::Field;
    use crate::test_support::{ScriptedAgent, test_app};

    fn outgoing() -> OutgoingMessage {
        OutgoingMessage {
            session_id: "s-1".into(),
            message: "write a happy Holi mail Ravi.".into(),
        }
    }

    #[test]
    fn test_deliver_success_records_request() {
        let agent = ScriptedAgent::new(Ok(AgentReply::Composed("Subject: Hi\n\nBody".into())));
        let action = tokio_test::block_on(deliver(&agent, &outgoing()));

        assert_eq!(
            action,
            Action::SendFinished(Ok(AgentReply::Composed("Subject: Hi\n\nBody".into())))
        );
        let seen = agent.seen.lock().unwrap();
        assert_eq!(seen[0].0, "s-1");
        assert!(seen[0].1.contains("Holi"));
    }

    #[test]
    fn test_deliver_failure_becomes_display_text() {
        let agent = ScriptedAgent::new(Err(AgentError::Api {
            status: 500,
            message: "rate limited".into(),
        }));
        let action = tokio_test::block_on(deliver(&agent, &outgoing()));
        match action {
            Action::SendFinished(Err(message)) => assert!(message.contains("rate limited")),
            other => panic!("Expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_global_shortcuts() {
        let app = test_app();
        let mut tui = TuiState::default();
        assert_eq!(handle_event(&app, &mut tui, &TuiEvent::ForceQuit), vec![Action::Quit]);
        assert_eq!(handle_event(&app, &mut tui, &TuiEvent::SendNow), vec![Action::Submit]);
        assert_eq!(handle_event(&app, &mut tui, &TuiEvent::ResetForm), vec![Action::Reset]);
        assert!(handle_event(&app, &mut tui, &TuiEvent::Resize).is_empty());
    }

    #[test]
    fn test_typing_reaches_core_as_set_field() {
        let mut app = test_app();
        let mut tui = TuiState::default();
        let (tx, _rx) = mpsc::channel();

        for event in [TuiEvent::NextField, TuiEvent::InputChar('R'), TuiEvent::InputChar('a')] {
            for action in handle_event(&app, &mut tui, &event) {
                apply(&mut app, &mut tui, action, &tx);
            }
        }
        assert_eq!(app.form.get(Field::RecipientName), "Ra");
    }

    #[test]
    fn test_success_screen_enter_resets_to_create() {
        let mut app = test_app();
        app.screen = Screen::Success;
        app.form.recipient_name = "Ravi".into();
        let mut tui = TuiState::default();
        let (tx, _rx) = mpsc::channel();

        let actions = handle_event(&app, &mut tui, &TuiEvent::Submit);
        assert_eq!(actions, vec![Action::Reset]);
        for action in actions {
            assert!(!apply(&mut app, &mut tui, action, &tx));
        }
        assert_eq!(app.screen, Screen::Create);
        assert!(app.form.recipient_name.is_empty());
    }

    #[test]
    fn test_send_now_ignored_on_success_screen() {
        let mut app = test_app();
        app.screen = Screen::Success;
        let mut tui = TuiState::default();
        assert!(handle_event(&app, &mut tui, &TuiEvent::SendNow).is_empty());
    }

    #[test]
    fn test_quit_action_stops_loop() {
        let mut app = test_app();
        let mut tui = TuiState::default();
        let (tx, _rx) = mpsc::channel();
        assert!(apply(&mut app, &mut tui, Action::Quit, &tx));
    }
}
