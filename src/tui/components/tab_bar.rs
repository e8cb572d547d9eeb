//! # TabBar Component
//!
//! Renders the tab buttons from `core::tabs::Tabs`. Stateless; the active
//! flag on each button decides the highlight.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Tabs as TabsWidget;

use crate::core::tabs::Tabs;

pub struct TabBar<'a> {
    tabs: &'a Tabs,
}

impl<'a> TabBar<'a> {
    pub fn new(tabs: &'a Tabs) -> Self {
        Self { tabs }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = self
            .tabs
            .buttons
            .iter()
            .enumerate()
            .map(|(i, b)| Line::from(format!(" F{} {} ", i + 1, b.label)))
            .collect();

        let widget = TabsWidget::new(titles)
            .select(self.tabs.active_button())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("|");

        frame.render_widget(widget, area);
    }
}
