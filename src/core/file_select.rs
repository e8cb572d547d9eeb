//! # File Selection Feedback
//!
//! Reflects the picked file back next to the path field. No type or size
//! checks happen here; the server decides what it accepts.

use log::info;
use std::path::Path;

use crate::api::SelectedFile;

pub const NO_FILE_LABEL: &str = "Choose an image";

/// The label shown beside the file field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLabel {
    pub text: String,
    /// Rendered with the "file chosen" colour once a file was picked.
    pub confirmed: bool,
}

impl Default for FileLabel {
    fn default() -> Self {
        Self {
            text: NO_FILE_LABEL.to_string(),
            confirmed: false,
        }
    }
}

impl FileLabel {
    pub fn reflect(&mut self, file: &SelectedFile) {
        self.text = file.name.clone();
        self.confirmed = true;
    }
}

/// Resolves a typed path into a selection. Empty input, missing paths and
/// directories yield no file.
pub fn pick_file(input: &str) -> Option<SelectedFile> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let path = Path::new(input);
    let metadata = std::fs::metadata(path).ok().filter(|m| m.is_file())?;
    let file = SelectedFile::new(path.to_path_buf(), metadata.len());
    info!(
        "File selected: {} Size: {} Type: {}",
        file.name, file.size, file.content_type
    );
    Some(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_pick_existing_file() {
        let mut tmp = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        tmp.write_all(b"\x89PNG").unwrap();

        let file = pick_file(&tmp.path().display().to_string()).unwrap();
        assert_eq!(file.size, 4);
        assert_eq!(file.content_type, "image/png");
        assert!(file.name.ends_with(".png"));
    }

    #[test]
    fn test_pick_nothing() {
        assert!(pick_file("").is_none());
        assert!(pick_file("   ").is_none());
        assert!(pick_file("/definitely/not/here.jpg").is_none());
    }

    #[test]
    fn test_pick_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(pick_file(&dir.path().display().to_string()).is_none());
    }

    #[test]
    fn test_label_reflects_name() {
        let mut label = FileLabel::default();
        assert!(!label.confirmed);
        label.reflect(&SelectedFile::new("/tmp/cut.jpg".into(), 3));
        assert_eq!(label.text, "cut.jpg");
        assert!(label.confirmed);
    }
}
