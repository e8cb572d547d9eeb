//! # Application State
//!
//! Everything the screen shows, in one struct. No TUI types live here; the
//! text typed into the fields belongs to the presentation layer until it is
//! submitted.
//!
//! ```text
//! App
//! ├── tabs: Tabs                    // active tab button + pane
//! ├── upload: UploadForm
//! │   ├── selected_file             // picked image, if any
//! │   ├── file_label                // name shown beside the field
//! │   └── control                   // submit button (label, disabled)
//! ├── describe: DescribeForm
//! │   └── control
//! ├── results: ResultsView          // last rendered result
//! ├── notices: VecDeque<String>     // blocking notices, oldest first
//! ├── status_message: String        // title bar text
//! └── endpoint: String              // where submissions go
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::warn;
use std::collections::VecDeque;

use crate::api::SelectedFile;
use crate::core::config::ResolvedConfig;
use crate::core::file_select::FileLabel;
use crate::core::results::ResultsView;
use crate::core::submission::{Pathway, SubmitControl};
use crate::core::tabs::Tabs;

#[derive(Debug, Default)]
pub struct UploadForm {
    pub selected_file: Option<SelectedFile>,
    pub file_label: FileLabel,
    pub control: SubmitControl,
}

impl UploadForm {
    /// Applies a file-field change. Only a present file touches the label.
    pub fn select(&mut self, file: Option<SelectedFile>) {
        if let Some(file) = &file {
            self.file_label.reflect(file);
        }
        self.selected_file = file;
    }
}

#[derive(Debug, Default)]
pub struct DescribeForm {
    pub control: SubmitControl,
}

#[derive(Debug)]
pub struct App {
    pub tabs: Tabs,
    pub upload: UploadForm,
    pub describe: DescribeForm,
    pub results: ResultsView,
    pub notices: VecDeque<String>,
    pub status_message: String,
    pub endpoint: String,
}

impl App {
    pub fn new(endpoint: String) -> Self {
        Self {
            tabs: Tabs::default(),
            upload: UploadForm::default(),
            describe: DescribeForm::default(),
            results: ResultsView::default(),
            notices: VecDeque::new(),
            status_message: String::from("Describe or upload an injury to get first-aid steps."),
            endpoint,
        }
    }

    pub fn from_config(endpoint: String, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(endpoint);
        app.upload.control = SubmitControl::new(config.submit_label.clone());
        app.describe.control = SubmitControl::new(config.submit_label.clone());
        if !app.tabs.activate_id(&config.start_tab) {
            warn!("Unknown start tab {:?}, staying on the first pane", config.start_tab);
        }
        app
    }

    pub fn control_mut(&mut self, pathway: Pathway) -> &mut SubmitControl {
        match pathway {
            Pathway::Image => &mut self.upload.control,
            Pathway::Text => &mut self.describe.control,
        }
    }

    /// The notice currently blocking input, if any.
    pub fn current_notice(&self) -> Option<&str> {
        self.notices.front().map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.upload.control.disabled || self.describe.control.disabled
    }
}
