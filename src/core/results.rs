//! # Result Renderer
//!
//! Turns a `ResultPayload` into the state of the results surface. Rendering
//! always starts from a cleared surface, so repeated calls never leave steps
//! from an earlier payload behind.

use crate::api::ResultPayload;

pub const NOT_SPECIFIED: &str = "Not specified";
pub const EMERGENCY_MESSAGE: &str = "This condition requires immediate medical attention.";
const SEVERE: &str = "severe";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsView {
    pub injury_name: String,
    pub steps: Vec<String>,
    /// Emergency alert text; None means the alert is hidden.
    pub emergency: Option<String>,
    /// Hidden until the first successful render.
    pub visible: bool,
    /// Set by `render`, consumed by the presentation layer to bring the
    /// surface into view.
    pub scroll_requested: bool,
}

impl ResultsView {
    pub fn render(&mut self, payload: &ResultPayload) {
        self.injury_name.clear();
        self.steps.clear();

        self.injury_name = payload
            .injury_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(NOT_SPECIFIED)
            .to_string();

        if let Some(steps) = &payload.first_aid_steps {
            self.steps.extend(steps.iter().cloned());
        }

        self.emergency = (payload.severity.as_deref() == Some(SEVERE))
            .then(|| EMERGENCY_MESSAGE.to_string());

        self.visible = true;
        self.scroll_requested = true;
    }

    pub fn alert_visible(&self) -> bool {
        self.emergency.is_some()
    }

    /// Returns and clears the pending scroll request.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }
}
