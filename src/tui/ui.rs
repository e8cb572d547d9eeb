use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::file_select::FileLabel;
use crate::core::state::App;
use crate::core::tabs::{DESCRIBE_TAB, UPLOAD_TAB};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Notice, ResultsPanel, SubmitButton, TabBar, TitleBar};

/// Maximum visible rows of the description field before it scrolls
const MAX_DESCRIPTION_ROWS: u16 = 6;
const BUTTON_WIDTH: u16 = 24;
const HELP_TEXT: &str =
    " Tab switch pane · Enter submit · Ctrl+J newline · PgUp/PgDn scroll results · Ctrl+C quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let area = frame.area();
    let pane_height = match app.tabs.active_pane() {
        Some(UPLOAD_TAB) => 7,
        Some(DESCRIBE_TAB) => {
            tui.describe_field
                .calculate_height(area.width, MAX_DESCRIPTION_ROWS)
                + 3
        }
        _ => 1,
    };

    let [title_area, tabs_area, pane_area, results_area, help_area] =
        Layout::vertical([Length(1), Length(1), Length(pane_height), Min(0), Length(1)])
            .areas(area);

    let mut title_bar = TitleBar::new(
        app.endpoint.clone(),
        app.status_message.clone(),
        app.is_submitting(),
    );
    title_bar.spinner_frame = spinner_frame;
    title_bar.render(frame, title_area);

    TabBar::new(&app.tabs).render(frame, tabs_area);

    match app.tabs.active_pane() {
        Some(UPLOAD_TAB) => draw_upload_pane(frame, pane_area, app, tui),
        Some(DESCRIBE_TAB) => draw_describe_pane(frame, pane_area, app, tui),
        _ => frame.render_widget(
            Paragraph::new("No pane selected").style(Style::default().fg(Color::DarkGray)),
            pane_area,
        ),
    }

    if app.results.visible {
        ResultsPanel::new(&app.results, &mut tui.results).render(frame, results_area);
    }

    frame.render_widget(
        Line::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(message) = app.current_notice() {
        Notice::new(message).render(frame, area);
    }
}

fn draw_upload_pane(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::Length;

    let [field_area, label_area, button_area] =
        Layout::vertical([Length(3), Length(1), Length(3)]).areas(area);

    tui.upload_field.dimmed = app.upload.control.disabled;
    tui.upload_field.render(frame, field_area);
    frame.render_widget(file_label_line(&app.upload.file_label), label_area);

    let [button_area, _] = Layout::horizontal([Length(BUTTON_WIDTH), Constraint::Min(0)])
        .areas(button_area);
    SubmitButton::new(&app.upload.control).render(frame, button_area);
}

fn draw_describe_pane(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let [field_area, button_area] = Layout::vertical([Min(3), Length(3)]).areas(area);

    tui.describe_field.dimmed = app.describe.control.disabled;
    tui.describe_field.render(frame, field_area);

    let [button_area, _] = Layout::horizontal([Length(BUTTON_WIDTH), Min(0)]).areas(button_area);
    SubmitButton::new(&app.describe.control).render(frame, button_area);
}

/// Confirmed labels turn green, the way a picked file is acknowledged.
fn file_label_line(label: &FileLabel) -> Line<'_> {
    let style = if label.confirmed {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![Span::raw(" File: "), Span::styled(label.text.as_str(), style)])
}
