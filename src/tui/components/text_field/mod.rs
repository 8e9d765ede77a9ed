//! # TextField Component
//!
//! One labelled input box bound to a `Field` of the form.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TextFieldState` (cursor, scroll) lives in `TuiState`, one per field
//! - `TextField` is created per frame/event with the current value as a prop
//!
//! The field never mutates the value itself. Edits come back as
//! `TextFieldEvent::Changed(new_value)` and the caller turns that into
//! `Action::SetField`, so the core `FormState` stays the source of truth.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::form::Field;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::FieldCursor;
use text_wrap::{VERTICAL_OVERHEAD, inner_width, next_char_boundary, prev_char_boundary, wrap_options};

/// Visible content lines for multi-line fields.
const MULTILINE_VISIBLE_LINES: u16 = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum TextFieldEvent {
    Changed(String),
    /// Enter pressed: move on to the next field.
    Advance,
}

#[derive(Debug, Default)]
pub struct TextFieldState {
    cursor: FieldCursor,
}

impl TextFieldState {
    /// Puts the cursor after the last character (used when focus arrives).
    pub fn move_to_end(&mut self, value: &str) {
        self.cursor.pos = value.len();
    }
}

pub struct TextField<'a> {
    field: Field,
    value: &'a str,
    state: &'a mut TextFieldState,
    focused: bool,
}

impl<'a> TextField<'a> {
    pub fn new(field: Field, value: &'a str, state: &'a mut TextFieldState, focused: bool) -> Self {
        state.cursor.clamp(value);
        Self {
            field,
            value,
            state,
            focused,
        }
    }

    /// Total rows the field needs, borders included.
    pub fn height(field: Field) -> u16 {
        Self::visible_lines(field) + VERTICAL_OVERHEAD
    }

    fn visible_lines(field: Field) -> u16 {
        if field.is_multiline() {
            MULTILINE_VISIBLE_LINES
        } else {
            1
        }
    }

    fn edited(&mut self, value: String, cursor: usize) -> Option<TextFieldEvent> {
        self.state.cursor.pos = cursor;
        Some(TextFieldEvent::Changed(value))
    }

    fn insert(&mut self, text: &str) -> Option<TextFieldEvent> {
        let text = if self.field.is_multiline() {
            text.to_string()
        } else {
            text.replace(['\r', '\n'], " ")
        };
        if text.is_empty() {
            return None;
        }
        let pos = self.state.cursor.pos;
        let mut value = self.value.to_string();
        value.insert_str(pos, &text);
        self.edited(value, pos + text.len())
    }
}

impl Component for TextField<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width);
        let visible = Self::visible_lines(self.field);
        self.state.cursor.update_scroll_offset(self.value, width, visible);

        let border_style = if self.focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.field.label());

        let paragraph = if self.value.is_empty() {
            Paragraph::new(self.field.placeholder()).style(Style::default().fg(Color::DarkGray))
        } else {
            let lines = if width == 0 {
                Vec::new()
            } else {
                textwrap::wrap(self.value, wrap_options(width))
            };
            let start = self.state.cursor.scroll_offset as usize;
            let visible_text = lines
                .iter()
                .skip(start)
                .take(visible as usize)
                .map(|l| l.as_ref())
                .collect::<Vec<&str>>()
                .join("\n");
            Paragraph::new(visible_text).style(Style::default().fg(Color::White))
        };

        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            frame.set_cursor_position(self.state.cursor.screen_pos(self.value, area));
        }
    }
}

impl EventHandler for TextField<'_> {
    type Event = TextFieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let pos = self.state.cursor.pos;
        match event {
            TuiEvent::InputChar('\n') if !self.field.is_multiline() => Some(TextFieldEvent::Advance),
            TuiEvent::InputChar(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => self.insert(text),
            TuiEvent::Submit => Some(TextFieldEvent::Advance),
            TuiEvent::Backspace if pos > 0 => {
                let prev = prev_char_boundary(self.value, pos);
                let mut value = self.value.to_string();
                value.drain(prev..pos);
                self.edited(value, prev)
            }
            TuiEvent::Delete if pos < self.value.len() => {
                let next = next_char_boundary(self.value, pos);
                let mut value = self.value.to_string();
                value.drain(pos..next);
                self.edited(value, pos)
            }
            TuiEvent::CursorLeft if pos > 0 => {
                self.state.cursor.pos = prev_char_boundary(self.value, pos);
                None
            }
            TuiEvent::CursorRight if pos < self.value.len() => {
                self.state.cursor.pos = next_char_boundary(self.value, pos);
                None
            }
            TuiEvent::CursorHome => {
                self.state.cursor.pos = self.value[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
                None
            }
            TuiEvent::CursorEnd => {
                self.state.cursor.pos = self.value[pos..]
                    .find('\n')
                    .map(|i| pos + i)
                    .unwrap_or(self.value.len());
                None
            }
            _ => None,
        }
    }
}
