//! # SuccessView Component
//!
//! Shown after the agent accepted a request. Left: confirmation, recipient
//! card and next steps, all read from the form captured with the preview.
//! Right: the message preview in a scrollable pane.
//!
//! The preview text is wrapped with textwrap up front so the canvas height
//! handed to the `ScrollView` matches exactly what gets drawn.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog;
use crate::core::preview::PreviewData;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessEvent {
    /// "Send Another Message": clear the form and start over.
    SendAnother,
}

#[derive(Debug, Default)]
pub struct SuccessViewState {
    pub scroll_state: ScrollViewState,
}

pub struct SuccessView<'a> {
    pub preview: &'a PreviewData,
    pub state: &'a mut SuccessViewState,
}

impl<'a> SuccessView<'a> {
    pub fn new(preview: &'a PreviewData, state: &'a mut SuccessViewState) -> Self {
        Self { preview, state }
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        let form = &self.preview.request;
        let festival = catalog::festival(&form.festival);
        let icon = festival.map(|f| f.icon).unwrap_or("🎉");
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().fg(Color::White);
        let dim = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);

        let lines = vec![
            Line::from(Span::styled(
                "Message Sent Successfully! 🎉",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "Your {} greeting has been delivered",
                form.occasion()
            )),
            Line::default(),
            Line::from(vec![Span::styled("To      ", label), Span::styled(form.recipient_name.trim(), value)]),
            Line::from(vec![Span::styled("Email   ", label), Span::styled(form.recipient_email.trim(), value)]),
            Line::from(vec![
                Span::styled("Occasion", label),
                Span::styled(format!(" {icon} {}", form.occasion()), value),
            ]),
            Line::from(vec![Span::styled("Tone    ", label), Span::styled(form.tone.as_str(), value)]),
            Line::from(vec![Span::styled("From    ", label), Span::styled(form.sender_name.trim(), value)]),
            Line::default(),
            Line::from(Span::styled("[Enter]  Send Another Message", Style::default().fg(Color::Magenta))),
            Line::from(Span::styled("[Ctrl+N] Create Message", Style::default().fg(Color::Magenta))),
            Line::from(Span::styled("         View History (coming soon)", dim)),
            Line::default(),
            Line::from(Span::styled("Thank you for using FestiveMailer ✨", dim)),
        ];

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green))
            .title("Sent");
        frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
    }

    fn render_preview(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .title("Message Preview");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let sent_at = self
            .preview
            .sent_at
            .map(|t| t.format("%b %e, %Y %H:%M").to_string())
            .unwrap_or_default();
        let stats = format!(
            "{} words · {} characters · {}",
            self.preview.word_count(),
            self.preview.char_count(),
            sent_at
        );

        let [subject_area, body_area, stats_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let subject = Line::from(vec![
            Span::styled("Subject: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.preview.subject.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(subject), subject_area);
        frame.render_widget(
            Paragraph::new(stats).style(Style::default().fg(Color::DarkGray)),
            stats_area,
        );

        // Leave a column for the scrollbar
        let content_width = body_area.width.saturating_sub(1);
        let lines = wrap_body(&self.preview.body, content_width);
        let height = lines.len() as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>()),
            Rect::new(0, 0, content_width, height),
        );
        frame.render_stateful_widget(scroll_view, body_area, &mut self.state.scroll_state);
    }
}

/// Wraps each paragraph of `body` to `width`, keeping blank lines.
fn wrap_body(body: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    body.lines()
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, width as usize)
                    .into_iter()
                    .map(|l| l.into_owned())
                    .collect()
            }
        })
        .collect()
}

impl Component for SuccessView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);
        self.render_summary(frame, left);
        self.render_preview(frame, right);
    }
}

impl EventHandler for SuccessView<'_> {
    type Event = SuccessEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit => Some(SuccessEvent::SendAnother),
            TuiEvent::ScrollUp | TuiEvent::CursorUp => {
                self.state.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown | TuiEvent::CursorDown => {
                self.state.scroll_state.scroll_down();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.state.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.state.scroll_state.scroll_page_down();
                None
            }
            _ => None,
        }
    }
}
