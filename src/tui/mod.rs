//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Submissions
//!
//! `update()` returns `Effect::SpawnSubmission` once a form has passed
//! validation and its control is disabled. The exchange runs on a tokio task
//! holding a `SubmissionLease`; its outcome comes back through the action
//! channel and is applied on the next loop iteration. The loop itself never
//! awaits the network.
//!
//! ## Redraw Strategy
//!
//! - **Submitting**: draws every ~80ms so the title bar spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events or settled submissions.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::path::PathBuf;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::api::{AskClient, HttpAskClient, SubmissionRequest};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::submission::{SubmissionLease, run_submission};
use crate::core::tabs::{DESCRIBE_TAB, UPLOAD_TAB};
use crate::tui::component::EventHandler;
use crate::tui::components::{FieldEvent, Notice, ResultsPanelState, TextField};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub upload_field: TextField,
    pub describe_field: TextField,
    pub results: ResultsPanelState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            upload_field: TextField::new(
                " Image path ",
                "Type the path of a photo of the injury",
                false,
            ),
            describe_field: TextField::new(
                " Describe the injury ",
                "What happened? Where does it hurt?",
                true,
            ),
            results: ResultsPanelState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = HttpAskClient::new(&config.base_url, &config.ask_path);
    let mut app = App::from_config(client.url().to_string(), &config);
    let client: Arc<dyn AskClient> = Arc::new(client);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for settled submissions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_submitting();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            for action in translate_event(&app, &mut tui, event) {
                match update(&mut app, action) {
                    Effect::Quit => should_quit = true,
                    Effect::SpawnSubmission(request) => {
                        spawn_submission(client.clone(), request, tx.clone());
                    }
                    Effect::None => {}
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle settled submissions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if app.results.take_scroll_request() {
            tui.results.scroll_to_top();
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Maps one terminal event to the core actions it triggers. Field editing
/// and results scrolling are handled here without involving the core.
fn translate_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Vec<Action> {
    // Ctrl+C always quits, even behind a notice
    if matches!(event, TuiEvent::ForceQuit) {
        return vec![Action::Quit];
    }

    // A pending notice blocks everything until dismissed
    if app.current_notice().is_some() {
        return if Notice::dismisses(&event) {
            vec![Action::DismissNotice]
        } else {
            Vec::new()
        };
    }

    match event {
        TuiEvent::Resize => return Vec::new(),
        TuiEvent::NextTab => return vec![Action::CycleTab(1)],
        TuiEvent::PrevTab => return vec![Action::CycleTab(-1)],
        TuiEvent::SelectTab(index) => return vec![Action::ActivateTab(index)],
        _ => {}
    }

    if tui.results.handle_event(&event) {
        return Vec::new();
    }

    match app.tabs.active_pane() {
        Some(UPLOAD_TAB) => match tui.upload_field.handle_event(&event) {
            // Enter commits the typed path as the file selection, then submits
            Some(FieldEvent::Submit(path)) => {
                let path = path.trim();
                let selection = (!path.is_empty()).then(|| PathBuf::from(path));
                vec![Action::SelectFile(selection), Action::SubmitImage]
            }
            _ => Vec::new(),
        },
        Some(DESCRIBE_TAB) => match tui.describe_field.handle_event(&event) {
            Some(FieldEvent::Submit(text)) => vec![Action::SubmitDescription(text)],
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn spawn_submission(
    client: Arc<dyn AskClient>,
    request: SubmissionRequest,
    tx: mpsc::Sender<Action>,
) {
    let pathway = request.pathway();
    info!("Spawning {:?} submission", pathway);
    let lease = SubmissionLease::new(pathway, tx);
    let handle = tokio::spawn(run_submission(client, request, lease));
    // The lease reports panics as failures; this only records them
    tokio::spawn(async move {
        if let Err(e) = handle.await
            && e.is_panic()
        {
            warn!("{:?} submission task panicked", pathway);
        }
    });
}
