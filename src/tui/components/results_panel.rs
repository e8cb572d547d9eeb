//! # Results Panel Component
//!
//! Scrollable view of the last rendered result: the emergency alert (if
//! any), the injury name, and the numbered first-aid steps.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ResultsPanelState` lives in `TuiState` (scroll position)
//! - `ResultsPanel` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::results::ResultsView;
use crate::tui::event::TuiEvent;

pub struct ResultsPanelState {
    pub scroll_state: ScrollViewState,
}

impl Default for ResultsPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsPanelState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
        }
    }

    /// Brings the top of the results into view.
    pub fn scroll_to_top(&mut self) {
        self.scroll_state.scroll_to_top();
    }

    /// Returns true if the event was a scroll event.
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return false,
        }
        true
    }
}

pub struct ResultsPanel<'a> {
    view: &'a ResultsView,
    state: &'a mut ResultsPanelState,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(view: &'a ResultsView, state: &'a mut ResultsPanelState) -> Self {
        Self { view, state }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        if let Some(message) = &self.view.emergency {
            lines.push(Line::from(Span::styled(
                format!("⚠ EMERGENCY: {message}"),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(vec![
            Span::styled("Injury: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.view.injury_name.as_str(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "First-aid steps:",
            Style::default().fg(Color::DarkGray),
        ));
        for (i, step) in self.view.steps.iter().enumerate() {
            lines.push(Line::raw(format!("{:>2}. {}", i + 1, step)));
        }
        lines
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Results ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Leave a column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.lines()).wrap(Wrap { trim: false });
        let height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
