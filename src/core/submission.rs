//! # Submission Coordinator
//!
//! One submission per pathway moves through:
//!
//! ```text
//! Idle → Validating → (rejected) Idle
//!                   → Submitting → Success → Rendering → Idle
//!                                → Failure → NotifyingError → Idle
//! ```
//!
//! The reducer handles validation and disables the form's control. The
//! network exchange runs on a tokio task that owns a `SubmissionLease`.
//! Dropping the lease always posts `Action::SubmissionSettled` back to the
//! event loop, so the control is restored on every exit path, including a
//! panicking or aborted task.

use log::{debug, warn};
use std::sync::Arc;
use std::sync::mpsc::Sender;

use crate::api::{AskClient, AskError, ResultPayload, SubmissionRequest};
use crate::core::action::Action;

pub const PROCESSING_LABEL: &str = "Processing...";
pub const DEFAULT_SUBMIT_LABEL: &str = "Get First-Aid";

/// The two input modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pathway {
    Image,
    Text,
}

impl Pathway {
    /// Shown when the server fails without an `error` field.
    pub fn default_failure(self) -> &'static str {
        match self {
            Pathway::Image => "Failed to process image",
            Pathway::Text => "Failed to process description",
        }
    }

    /// Shown when the exchange itself breaks down.
    pub fn generic_failure(self) -> &'static str {
        match self {
            Pathway::Image => "Sorry, there was an error processing your image. Please try again.",
            Pathway::Text => {
                "Sorry, there was an error processing your description. Please try again."
            }
        }
    }
}

impl SubmissionRequest {
    pub fn pathway(&self) -> Pathway {
        match self {
            SubmissionRequest::Image(_) => Pathway::Image,
            SubmissionRequest::Text { .. } => Pathway::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Success(ResultPayload),
    Failure(String),
}

impl SubmissionOutcome {
    pub fn from_result(pathway: Pathway, result: Result<ResultPayload, AskError>) -> Self {
        match result {
            Ok(payload) => SubmissionOutcome::Success(payload),
            Err(AskError::Application {
                message: Some(message),
                ..
            }) if !message.is_empty() => SubmissionOutcome::Failure(message),
            Err(AskError::Application { .. }) => {
                SubmissionOutcome::Failure(pathway.default_failure().to_string())
            }
            Err(AskError::Transport(_) | AskError::Parse(_)) => {
                SubmissionOutcome::Failure(pathway.generic_failure().to_string())
            }
        }
    }
}

/// A form's submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
    saved_label: Option<String>,
}

impl SubmitControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            saved_label: None,
        }
    }

    /// Saves the current label, shows the processing label and disables the control.
    pub fn begin(&mut self) {
        let label = std::mem::replace(&mut self.label, PROCESSING_LABEL.to_string());
        self.saved_label = Some(label);
        self.disabled = true;
    }

    /// Puts the saved label back and re-enables. Safe to call when idle.
    pub fn restore(&mut self) {
        if let Some(label) = self.saved_label.take() {
            self.label = label;
        }
        self.disabled = false;
    }
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_LABEL)
    }
}

/// Held by the task running an exchange. Settles exactly once: either
/// explicitly via `settle`, or on drop with the pathway's generic failure.
pub struct SubmissionLease {
    pathway: Pathway,
    tx: Sender<Action>,
    outcome: Option<SubmissionOutcome>,
}

impl SubmissionLease {
    pub fn new(pathway: Pathway, tx: Sender<Action>) -> Self {
        Self {
            pathway,
            tx,
            outcome: None,
        }
    }

    pub fn settle(mut self, outcome: SubmissionOutcome) {
        self.outcome = Some(outcome);
    }
}

impl Drop for SubmissionLease {
    fn drop(&mut self) {
        let outcome = self.outcome.take().unwrap_or_else(|| {
            warn!("{:?} submission ended without an outcome", self.pathway);
            SubmissionOutcome::Failure(self.pathway.generic_failure().to_string())
        });
        let action = Action::SubmissionSettled {
            pathway: self.pathway,
            outcome,
        };
        if self.tx.send(action).is_err() {
            warn!("Failed to send submission outcome: receiver dropped");
        }
    }
}

/// Performs the exchange and settles the lease with its outcome.
pub async fn run_submission(
    client: Arc<dyn AskClient>,
    request: SubmissionRequest,
    lease: SubmissionLease,
) {
    let pathway = request.pathway();
    let result = client.ask(&request).await;
    if let Err(e) = &result {
        warn!("{:?} submission failed: {}", pathway, e);
    } else {
        debug!("{:?} submission succeeded", pathway);
    }
    lease.settle(SubmissionOutcome::from_result(pathway, result));
}
