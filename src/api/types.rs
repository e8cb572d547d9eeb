//! Wire types for the `/ask` endpoint.
//!
//! The service's contract is weak: any field may be missing or carry the
//! wrong type. Everything is deserialized leniently so that a malformed field
//! degrades to `None` instead of failing the whole response.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// Successful response body.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ResultPayload {
    #[serde(default, deserialize_with = "lenient_string")]
    pub injury_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_steps")]
    pub first_aid_steps: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub severity: Option<String>,
}

/// Failure response body. `error` is optional; callers fall back to a
/// pathway default when it is missing.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "lenient_string")]
    pub error: Option<String>,
}

/// JSON body of the text pathway.
#[derive(Serialize, Debug)]
pub struct DescribeBody<'a> {
    pub message: &'a str,
}

/// A file picked on the upload pane.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub path: PathBuf,
    /// File name sent as the multipart filename and shown in the label.
    pub name: String,
    pub content_type: String,
    pub size: u64,
}

impl SelectedFile {
    /// Builds a selection from a path, guessing the content type from the extension.
    pub fn new(path: PathBuf, size: u64) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let content_type = content_type_for(&name).to_string();
        Self {
            path,
            name,
            content_type,
            size,
        }
    }
}

/// What gets sent to the server. Both variants are already validated.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionRequest {
    Image(SelectedFile),
    Text { message: String },
}

fn content_type_for(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Anything other than an array is treated as absent. Non-string elements
/// keep their JSON text so no step is silently dropped.
fn lenient_steps<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => None,
    })
}
