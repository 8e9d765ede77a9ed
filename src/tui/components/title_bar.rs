//! # TitleBar Component
//!
//! One line at the top: app name, the "Create Message" tab and the current
//! status message. Purely presentational; every value is a prop.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::navigation::Screen;
use crate::tui::component::Component;

pub struct TitleBar<'a> {
    pub screen: Screen,
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(screen: Screen, status_message: &'a str) -> Self {
        Self {
            screen,
            status_message,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // The tab lights up only while the form is showing
        let tab_style = if self.screen == Screen::Create {
            Style::default().fg(Color::Black).bg(Color::Magenta)
        } else {
            Style::default().fg(Color::Magenta)
        };

        let mut spans = vec![
            Span::styled(
                "✨ FestiveMailer ",
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Create Message ", tab_style),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::Gray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
