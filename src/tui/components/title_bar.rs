//! # TitleBar Component
//!
//! Top status bar showing the endpoint and the current status message.
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! The title text changes based on state:
//!
//! 1. **Submitting**: `"First-Aid Assistant (server: …) | Processing... | ⠋"` (spinner cycles braille frames)
//! 2. **Status message**: `"First-Aid Assistant (server: …) | Result: Burn"`
//! 3. **Default**: `"First-Aid Assistant (server: …)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    /// Where submissions are sent
    pub endpoint: String,
    /// Status message (e.g., "Processing...", "Result: Burn")
    pub status_message: String,
    /// Any form currently waiting on the server
    pub submitting: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(endpoint: String, status_message: String, submitting: bool) -> Self {
        Self {
            endpoint,
            status_message,
            submitting,
            spinner_frame: 0,
        }
    }

    fn text(&self) -> String {
        let base = format!("First-Aid Assistant (server: {})", self.endpoint);
        if self.submitting {
            format!(
                "{} | {} | {}",
                base,
                self.status_message,
                SPINNER[self.spinner_frame % SPINNER.len()]
            )
        } else if self.status_message.is_empty() {
            base
        } else {
            format!("{} | {}", base, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD).fg(Color::White),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "http://localhost:5000/ask".to_string(),
            "Result: Burn".to_string(),
            false,
        );
        let text = rendered(&mut title_bar);
        assert!(text.contains("First-Aid Assistant"));
        assert!(text.contains("http://localhost:5000/ask"));
        assert!(text.contains("Result: Burn"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("http://x/ask".to_string(), String::new(), false);
        let text = rendered(&mut title_bar);
        assert!(text.contains("First-Aid Assistant"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_title_bar_spinner_while_submitting() {
        let mut title_bar =
            TitleBar::new("http://x/ask".to_string(), "Processing...".to_string(), true);
        title_bar.spinner_frame = 1;
        assert!(title_bar.text().ends_with("| ⠙"));
        let text = rendered(&mut title_bar);
        assert!(text.contains("Processing..."));
    }
}
