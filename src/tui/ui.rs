use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CreateForm, SuccessView, TitleBar};

const MAX_ERROR_LINES: u16 = 4;

const CREATE_HELP: &str = "Tab/↑↓ move · ←→ pick · Enter next · Ctrl+J newline · Ctrl+S send · Ctrl+R reset · Esc quit";
const SUCCESS_HELP: &str = "Enter send another · Ctrl+N create message · PgUp/PgDn scroll preview · Esc quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let error_height = app
        .error
        .as_deref()
        .map(|e| error_banner_height(e, frame.area().width))
        .unwrap_or(0);
    let [title_area, error_area, main_area, help_area] =
        Layout::vertical([Length(1), Length(error_height), Min(0), Length(1)]).areas(frame.area());

    TitleBar::new(app.screen, &app.status_message).render(frame, title_area);

    if let Some(error) = &app.error {
        draw_error_banner(frame, error_area, error);
    }

    match app.screen {
        Screen::Create => {
            CreateForm::new(&app.form, &mut tui.create_form, app.is_loading, spinner_frame).render(frame, main_area);
        }
        Screen::Success => {
            SuccessView::new(&app.preview, &mut tui.success_view).render(frame, main_area);
        }
    }

    let help = match app.screen {
        Screen::Create => CREATE_HELP,
        Screen::Success => SUCCESS_HELP,
    };
    frame.render_widget(
        Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))),
        help_area,
    );
}

/// Wrapped error lines (at most `MAX_ERROR_LINES`) plus borders.
fn error_banner_height(error: &str, width: u16) -> u16 {
    let inner = width.saturating_sub(2).max(1) as usize;
    let lines = textwrap::wrap(error, inner).len() as u16;
    lines.clamp(1, MAX_ERROR_LINES) + 2
}

fn draw_error_banner(frame: &mut Frame, area: Rect, error: &str) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Red))
        .title("Error");
    let paragraph = Paragraph::new(error)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentReply;
    use crate::core::action::{Action, update};
    use crate::core::form::Field;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_create_screen_with_validation_banner() {
        let mut app = test_app();
        let mut tui = TuiState::default();
        update(&mut app, Action::Submit);

        let text = draw(&app, &mut tui);
        assert!(text.contains("Error"));
        assert!(text.contains("Festival is required"));
        assert!(text.contains("Choose Your Festival"));
        assert!(text.contains("Ctrl+S send"));
    }

    #[test]
    fn test_error_banner_height_grows_with_text() {
        assert_eq!(error_banner_height("short", 80), 3);
        assert_eq!(error_banner_height(&"word ".repeat(100), 40), MAX_ERROR_LINES + 2);
    }

    #[test]
    fn test_success_screen_replaces_form() {
        let mut app = test_app();
        app.screen = Screen::Success;
        let mut tui = TuiState::default();

        let text = draw(&app, &mut tui);
        assert!(text.contains("Message Preview"));
        assert!(!text.contains("Choose Your Festival"));
    }

    #[test]
    fn test_success_card_shows_what_was_sent_after_reset() {
        let mut app = test_app();
        let mut tui = TuiState::default();
        update(&mut app, Action::SelectFestival("Holi".into()));
        update(&mut app, Action::SetField(Field::RecipientName, "Ravi".into()));
        update(&mut app, Action::SetField(Field::RecipientEmail, "ravi@example.com".into()));
        update(&mut app, Action::SetField(Field::SenderName, "Sam".into()));
        update(&mut app, Action::Submit);
        update(&mut app, Action::Reset);
        update(&mut app, Action::SendFinished(Ok(AgentReply::Confirmed { message: None })));

        let text = draw(&app, &mut tui);
        assert!(text.contains("Your Holi greeting has been delivered"));
        assert!(text.contains("ravi@example.com"));
        assert!(!text.contains("Your  greeting"));
    }
}
