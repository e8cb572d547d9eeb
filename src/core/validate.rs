//! Pre-flight gates. These run before any control is disabled and before
//! anything touches the network.

use std::fmt;

use crate::api::SelectedFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFile,
    EmptyDescription,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFile => write!(f, "Please select an image file."),
            ValidationError::EmptyDescription => write!(f, "Please describe the injury."),
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_image_submission(
    selection: Option<&SelectedFile>,
) -> Result<&SelectedFile, ValidationError> {
    selection.ok_or(ValidationError::MissingFile)
}

/// Returns the trimmed description.
pub fn validate_text_submission(text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyDescription)
    } else {
        Ok(trimmed.to_string())
    }
}
