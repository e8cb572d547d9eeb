//! # Actions
//!
//! Everything that can happen becomes an `Action`.
//! User presses Enter on the description? That's `Action::SubmitDescription(text)`.
//! Server answers? That's `Action::SubmissionSettled { .. }`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter has to carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};
use std::path::PathBuf;

use crate::api::SubmissionRequest;
use crate::core::file_select::pick_file;
use crate::core::state::App;
use crate::core::submission::{Pathway, SubmissionOutcome};
use crate::core::validate::{validate_image_submission, validate_text_submission};

#[derive(Debug)]
pub enum Action {
    /// Tab button at this index was pressed.
    ActivateTab(usize),
    /// Cycle tabs forward (1) or backward (-1).
    CycleTab(isize),
    /// File field changed; `None` means the selection was cleared.
    SelectFile(Option<PathBuf>),
    SubmitImage,
    SubmitDescription(String),
    SubmissionSettled {
        pathway: Pathway,
        outcome: SubmissionOutcome,
    },
    DismissNotice,
    Quit,
}

#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Run this exchange in the background; the form's control is already disabled.
    SpawnSubmission(SubmissionRequest),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::ActivateTab(index) => {
            app.tabs.activate(index);
            Effect::None
        }
        Action::CycleTab(step) => {
            app.tabs.cycle(step);
            Effect::None
        }
        Action::SelectFile(path) => {
            let file = path.and_then(|p| pick_file(&p.to_string_lossy()));
            app.upload.select(file);
            Effect::None
        }
        Action::SubmitImage => {
            if app.upload.control.disabled {
                return Effect::None;
            }
            match validate_image_submission(app.upload.selected_file.as_ref()) {
                Ok(file) => {
                    let request = SubmissionRequest::Image(file.clone());
                    begin(app, Pathway::Image);
                    Effect::SpawnSubmission(request)
                }
                Err(e) => {
                    app.notices.push_back(e.to_string());
                    Effect::None
                }
            }
        }
        Action::SubmitDescription(text) => {
            if app.describe.control.disabled {
                return Effect::None;
            }
            match validate_text_submission(&text) {
                Ok(message) => {
                    begin(app, Pathway::Text);
                    Effect::SpawnSubmission(SubmissionRequest::Text { message })
                }
                Err(e) => {
                    app.notices.push_back(e.to_string());
                    Effect::None
                }
            }
        }
        Action::SubmissionSettled { pathway, outcome } => {
            app.control_mut(pathway).restore();
            match outcome {
                SubmissionOutcome::Success(payload) => {
                    info!("{:?} submission rendered", pathway);
                    app.results.render(&payload);
                    app.status_message = format!("Result: {}", app.results.injury_name);
                }
                SubmissionOutcome::Failure(message) => {
                    app.status_message = String::from("Request failed");
                    app.notices.push_back(message);
                }
            }
            Effect::None
        }
        Action::DismissNotice => {
            app.notices.pop_front();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn begin(app: &mut App, pathway: Pathway) {
    app.control_mut(pathway).begin();
    app.status_message = String::from("Processing...");
}
