//! # SubmitButton Component
//!
//! Draws a form's `SubmitControl`: its current label, greyed out while
//! disabled.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::submission::SubmitControl;

pub struct SubmitButton<'a> {
    control: &'a SubmitControl,
}

impl<'a> SubmitButton<'a> {
    pub fn new(control: &'a SubmitControl) -> Self {
        Self { control }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let style = if self.control.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
        };
        let hint = if self.control.disabled { "" } else { " Enter " };

        let button = Paragraph::new(self.control.label.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title_bottom(hint),
            );
        frame.render_widget(button, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(control: &SubmitControl) -> String {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| SubmitButton::new(control).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_button_shows_label_and_processing() {
        let mut control = SubmitControl::default();
        let text = draw(&control);
        assert!(text.contains("Get First-Aid"));
        assert!(text.contains("Enter"));

        control.begin();
        let text = draw(&control);
        assert!(text.contains("Processing..."));
        assert!(!text.contains("Enter"));
    }
}
