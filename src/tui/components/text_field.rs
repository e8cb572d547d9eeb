//! # TextField Component
//!
//! Editable text used by both panes: the image path on the upload pane and
//! the injury description on the describe pane.
//!
//! ## State Management
//!
//! The buffer is internal state; the core only sees it when the user presses
//! Enter. Unlike a chat input, submitting does not clear the buffer, so a
//! failed request can be retried without retyping.
//!
//! Multi-line fields wrap by display width (not by word) so the cursor maps
//! onto the rendered rows exactly.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Top + bottom borders consumed vertically
const VERTICAL_OVERHEAD: u16 = 2;
/// Left + right borders consumed horizontally
const HORIZONTAL_OVERHEAD: u16 = 2;

/// High-level events emitted by the TextField
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// User pressed Enter; carries the whole buffer.
    Submit(String),
    ContentChanged,
}

pub struct TextField {
    pub buffer: String,
    pub title: String,
    pub placeholder: String,
    /// Accept newlines and wrap long lines.
    pub multiline: bool,
    /// Props: dimmed while the owning form is submitting.
    pub dimmed: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl TextField {
    pub fn new(title: &str, placeholder: &str, multiline: bool) -> Self {
        Self {
            buffer: String::new(),
            title: title.to_string(),
            placeholder: placeholder.to_string(),
            multiline,
            dimmed: false,
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Rows needed to show the whole buffer at the given outer width.
    pub fn calculate_height(&self, width: u16, max_rows: u16) -> u16 {
        let rows = if self.multiline {
            wrap_rows(&self.buffer, width.saturating_sub(HORIZONTAL_OVERHEAD)).len() as u16
        } else {
            1
        };
        rows.clamp(1, max_rows.max(1)) + VERTICAL_OVERHEAD
    }

    fn insert(&mut self, text: &str) {
        let text: String = if self.multiline {
            text.to_string()
        } else {
            text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
        };
        self.buffer.insert_str(self.cursor, &text);
        self.cursor += text.len();
    }
}

/// Splits `text` into rows of at most `width` columns. Returns byte ranges.
fn wrap_rows(text: &str, width: u16) -> Vec<(usize, usize)> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    let mut line_start = 0;
    for line in text.split('\n') {
        let mut row_start = line_start;
        let mut row_width = 0;
        for (i, c) in line.char_indices() {
            let w = c.width().unwrap_or(0);
            if row_width + w > width {
                rows.push((row_start, line_start + i));
                row_start = line_start + i;
                row_width = 0;
            }
            row_width += w;
        }
        rows.push((row_start, line_start + line.len()));
        line_start += line.len() + 1;
    }
    rows
}

/// Row and column of the byte offset `pos` within the wrapped rows.
fn cursor_cell(text: &str, rows: &[(usize, usize)], pos: usize, width: u16) -> (u16, u16) {
    let mut cell = (0, 0);
    for (row, &(start, end)) in rows.iter().enumerate() {
        if (start..=end).contains(&pos) {
            let col: usize = text[start..pos].chars().filter_map(|c| c.width()).sum();
            cell = (row as u16, col as u16);
        }
    }
    if cell.1 >= width {
        (cell.0 + 1, 0)
    } else {
        cell
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        let inner_height = area.height.saturating_sub(VERTICAL_OVERHEAD);

        let style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(self.title.as_str());

        if self.buffer.is_empty() {
            let hint = Paragraph::new(self.placeholder.as_str())
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, area);
            frame.set_cursor_position((area.x + 1, area.y + 1));
            return;
        }

        let (lines, cursor_row, cursor_col) = if self.multiline {
            let rows = wrap_rows(&self.buffer, inner_width);
            let (row, col) = cursor_cell(&self.buffer, &rows, self.cursor, inner_width);
            // Keep the cursor row on screen
            let skip = row.saturating_sub(inner_height.saturating_sub(1));
            let lines: Vec<Line> = rows
                .iter()
                .skip(skip as usize)
                .map(|&(start, end)| Line::raw(&self.buffer[start..end]))
                .collect();
            (lines, row - skip, col)
        } else {
            // Single line scrolls horizontally to keep the cursor visible
            let before: usize = self.buffer[..self.cursor]
                .chars()
                .filter_map(|c| c.width())
                .sum();
            let offset = before.saturating_sub(usize::from(inner_width.saturating_sub(1)));
            let mut skipped = 0;
            let visible: String = self
                .buffer
                .chars()
                .skip_while(|c| {
                    let skip = skipped < offset;
                    skipped += c.width().unwrap_or(0);
                    skip
                })
                .collect();
            (vec![Line::raw(visible)], 0, (before - offset) as u16)
        };

        frame.render_widget(Paragraph::new(lines).block(block).style(style), area);
        frame.set_cursor_position((area.x + 1 + cursor_col, area.y + 1 + cursor_row));
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar('\n') if !self.multiline => None,
            TuiEvent::InputChar(c) => {
                self.insert(c.encode_utf8(&mut [0; 4]));
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.insert(text);
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                FieldEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                FieldEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                FieldEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                FieldEvent::ContentChanged
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor != line_start).then(|| {
                    self.cursor = line_start;
                    FieldEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor != line_end).then(|| {
                    self.cursor = line_end;
                    FieldEvent::ContentChanged
                })
            }
            TuiEvent::Submit => Some(FieldEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(field: &mut TextField, text: &str) {
        for c in text.chars() {
            field.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::new("Describe", "", true);
        type_str(&mut field, "ab");
        assert_eq!(field.buffer, "ab");
        assert_eq!(field.cursor(), 2);

        let res = field.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(FieldEvent::ContentChanged));
        assert_eq!(field.buffer, "a");
    }

    #[test]
    fn test_submit_keeps_buffer() {
        let mut field = TextField::new("Describe", "", true);
        type_str(&mut field, "deep cut");
        let res = field.handle_event(&TuiEvent::Submit);
        assert_eq!(res, Some(FieldEvent::Submit("deep cut".to_string())));
        assert_eq!(field.buffer, "deep cut");
    }

    #[test]
    fn test_submit_empty_still_emits() {
        let mut field = TextField::new("Path", "", false);
        assert_eq!(
            field.handle_event(&TuiEvent::Submit),
            Some(FieldEvent::Submit(String::new()))
        );
    }

    #[test]
    fn test_single_line_rejects_newlines() {
        let mut field = TextField::new("Path", "", false);
        assert_eq!(field.handle_event(&TuiEvent::InputChar('\n')), None);
        field.handle_event(&TuiEvent::Paste("/tmp/a\nb.png".to_string()));
        assert_eq!(field.buffer, "/tmp/ab.png");
    }

    #[test]
    fn test_cursor_movement_is_char_aware() {
        let mut field = TextField::new("Describe", "", true);
        type_str(&mut field, "né");
        field.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(field.cursor(), 1);
        field.handle_event(&TuiEvent::Delete);
        assert_eq!(field.buffer, "n");
        assert_eq!(field.handle_event(&TuiEvent::CursorRight), None);
    }

    #[test]
    fn test_home_end_within_line() {
        let mut field = TextField::new("Describe", "", true);
        type_str(&mut field, "one\ntwo");
        field.handle_event(&TuiEvent::CursorHome);
        assert_eq!(field.cursor(), 4);
        field.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(field.cursor(), 7);
    }

    #[test]
    fn test_wrap_rows_by_width() {
        assert_eq!(wrap_rows("abcdef", 4), vec![(0, 4), (4, 6)]);
        assert_eq!(wrap_rows("ab\ncd", 4), vec![(0, 2), (3, 5)]);
        assert_eq!(wrap_rows("", 4), vec![(0, 0)]);
    }

    #[test]
    fn test_cursor_cell_after_wrap() {
        let rows = wrap_rows("abcdef", 4);
        assert_eq!(cursor_cell("abcdef", &rows, 5, 4), (1, 1));
        let rows = wrap_rows("abcd", 4);
        assert_eq!(cursor_cell("abcd", &rows, 4, 4), (1, 0));
    }

    #[test]
    fn test_calculate_height_clamps() {
        let mut field = TextField::new("Describe", "", true);
        field.buffer = "a\nb\nc\nd\ne\nf\ng".to_string();
        assert_eq!(field.calculate_height(40, 5), 7);
        let path = TextField::new("Path", "", false);
        assert_eq!(path.calculate_height(40, 5), 3);
    }

    #[test]
    fn test_render_shows_placeholder_then_text() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut field = TextField::new("Image path", "Type a path", false);

        terminal.draw(|f| field.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Image path"));
        assert!(text.contains("Type a path"));

        type_str(&mut field, "/tmp/burn.png");
        terminal.draw(|f| field.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("/tmp/burn.png"));
    }
}
