//! # ChoiceRow Component
//!
//! Picks one entry from a small static catalog (festivals, tones).
//! Left/Right move the selection in either orientation (Up/Down belong to
//! focus movement). The selected index is a prop derived from `FormState`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption<'a> {
    pub icon: &'a str,
    pub label: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceEvent {
    Select(usize),
}

pub struct ChoiceRow<'a> {
    pub title: &'a str,
    pub options: Vec<ChoiceOption<'a>>,
    pub selected: Option<usize>,
    pub focused: bool,
    pub orientation: Orientation,
    /// Extra line under the options (e.g. the festival's description).
    pub detail: Option<String>,
}

impl<'a> ChoiceRow<'a> {
    pub fn new(title: &'a str, options: Vec<ChoiceOption<'a>>, selected: Option<usize>) -> Self {
        Self {
            title,
            options,
            selected,
            focused: false,
            orientation: Orientation::Horizontal,
            detail: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn vertical(mut self) -> Self {
        self.orientation = Orientation::Vertical;
        self
    }

    pub fn detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }

    /// Rows needed, borders included.
    pub fn height(&self) -> u16 {
        let option_rows = match self.orientation {
            Orientation::Horizontal => 2,
            Orientation::Vertical => self.options.len() as u16,
        };
        option_rows + u16::from(self.detail.is_some()) + 2
    }

    fn step(&self, forward: bool) -> Option<ChoiceEvent> {
        let len = self.options.len();
        if len == 0 {
            return None;
        }
        let next = match (self.selected, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        Some(ChoiceEvent::Select(next))
    }

    fn option_span(&self, index: usize, option: &ChoiceOption<'a>) -> Span<'a> {
        let text = format!(" {} {} ", option.icon, option.label);
        let style = if self.selected == Some(index) {
            let base = Style::default().fg(Color::Black).bg(Color::Magenta);
            if self.focused {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            }
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(text, style)
    }
}

impl Component for ChoiceRow<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title);

        let mut lines: Vec<Line> = match self.orientation {
            Orientation::Horizontal => {
                let mut spans = Vec::new();
                for (i, option) in self.options.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(" "));
                    }
                    spans.push(self.option_span(i, option));
                }
                vec![Line::from(spans)]
            }
            Orientation::Vertical => self
                .options
                .iter()
                .enumerate()
                .map(|(i, option)| Line::from(self.option_span(i, option)))
                .collect(),
        };

        if let Some(detail) = &self.detail {
            lines.push(Line::from(Span::styled(
                detail.clone(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        }

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

impl EventHandler for ChoiceRow<'_> {
    type Event = ChoiceEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorRight => self.step(true),
            TuiEvent::CursorLeft => self.step(false),
            TuiEvent::InputChar(' ') if self.selected.is_none() => self.step(true),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn options() -> Vec<ChoiceOption<'static>> {
        vec![
            ChoiceOption { icon: "🪔", label: "Diwali" },
            ChoiceOption { icon: "🎄", label: "Christmas" },
            ChoiceOption { icon: "🎉", label: "Other" },
        ]
    }

    #[test]
    fn test_first_step_selects_first_option() {
        let mut row = ChoiceRow::new("Festival", options(), None);
        assert_eq!(row.handle_event(&TuiEvent::CursorRight), Some(ChoiceEvent::Select(0)));
        assert_eq!(row.handle_event(&TuiEvent::InputChar(' ')), Some(ChoiceEvent::Select(0)));
    }

    #[test]
    fn test_selection_wraps_both_ways() {
        let mut row = ChoiceRow::new("Festival", options(), Some(2));
        assert_eq!(row.handle_event(&TuiEvent::CursorRight), Some(ChoiceEvent::Select(0)));

        let mut row = ChoiceRow::new("Festival", options(), Some(0));
        assert_eq!(row.handle_event(&TuiEvent::CursorLeft), Some(ChoiceEvent::Select(2)));
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut row = ChoiceRow::new("Tone", options(), Some(1)).vertical();
        assert_eq!(row.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(row.handle_event(&TuiEvent::InputChar(' ')), None);
    }

    #[test]
    fn test_height() {
        let row = ChoiceRow::new("Festival", options(), None).detail(Some("desc".into()));
        assert_eq!(row.height(), 5);
        let row = ChoiceRow::new("Tone", options(), None).vertical();
        assert_eq!(row.height(), 5);
    }

    #[test]
    fn test_render_shows_labels_and_detail() {
        let backend = TestBackend::new(60, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut row = ChoiceRow::new("Choose Your Festival", options(), Some(1))
            .focused(true)
            .detail(Some("Season of Joy".into()));

        terminal
            .draw(|f| {
                let area = f.area();
                row.render(f, area);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Choose Your Festival"));
        assert!(text.contains("Christmas"));
        assert!(text.contains("Season of Joy"));
    }
}
