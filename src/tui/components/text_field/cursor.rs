//! Cursor position tracking for a text field.
//!
//! `FieldCursor` owns the byte offset and vertical scroll; the text itself is
//! owned by the core `FormState` and passed in on every call.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use super::text_wrap::{BORDER_OFFSET, floor_char_boundary, inner_width, wrap_line_count, wrap_options};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldCursor {
    /// Byte offset in the value (0..=value.len())
    pub pos: usize,
    /// First visible wrapped line
    pub scroll_offset: u16,
}

impl FieldCursor {
    /// Pulls the cursor back inside `buffer` after an outside change.
    pub fn clamp(&mut self, buffer: &str) {
        self.pos = floor_char_boundary(buffer, self.pos);
    }

    /// Which wrapped line (0-based) the cursor is on.
    pub fn calculate_line(&self, buffer: &str, width: u16) -> u16 {
        if width == 0 {
            return 0;
        }

        let text_before_cursor = &buffer[..self.pos];
        let lines = textwrap::wrap(text_before_cursor, wrap_options(width));
        let mut cursor_line = lines.len().saturating_sub(1) as u16;

        // Cursor right after a newline that textwrap didn't represent
        if self.pos > 0
            && buffer.as_bytes()[self.pos - 1] == b'\n'
            && !lines.last().is_some_and(|l| l.is_empty())
        {
            cursor_line += 1;
        }

        cursor_line
    }

    /// Keeps the cursor line inside a window of `visible_lines`.
    pub fn update_scroll_offset(&mut self, buffer: &str, width: u16, visible_lines: u16) {
        let total_lines = wrap_line_count(buffer, width);

        if total_lines <= visible_lines {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.calculate_line(buffer, width);

        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + visible_lines {
            self.scroll_offset = cursor_line.saturating_sub(visible_lines - 1);
        }
    }

    /// Screen (column, row) of the cursor inside a bordered field at `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + BORDER_OFFSET, area.y + BORDER_OFFSET);
        }

        let text_before_cursor = &buffer[..self.pos];
        let cursor_line = self.calculate_line(buffer, width);

        // Column within the current logical line, minus the wrapped segments
        // that precede it. Spaces are preserved by measuring the raw text.
        let last_newline = text_before_cursor.rfind('\n').map(|p| p + 1).unwrap_or(0);
        let logical_line = &text_before_cursor[last_newline..];
        let segments = textwrap::wrap(logical_line, wrap_options(width));
        let before_last: usize = segments
            .iter()
            .take(segments.len().saturating_sub(1))
            .map(|seg| seg.width())
            .sum();
        let cursor_col = logical_line.width().saturating_sub(before_last).min(width as usize) as u16;

        let visible_line = cursor_line.saturating_sub(self.scroll_offset);

        (
            area.x + BORDER_OFFSET + cursor_col,
            area.y + BORDER_OFFSET + visible_line,
        )
    }
}
