//! HTTP client for the single `/ask` endpoint.
//!
//! Both pathways post to the same URL. The image pathway sends a multipart
//! body with one `image` part; the text pathway sends `{"message": ...}` as
//! JSON. The response is JSON in both cases.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::fmt;

use super::types::{DescribeBody, ErrorBody, ResultPayload, SelectedFile, SubmissionRequest};

pub const DEFAULT_ASK_PATH: &str = "/ask";

/// Errors that can occur while exchanging a submission with the server.
#[derive(Debug)]
pub enum AskError {
    /// The request could not be completed (connection refused, file unreadable, ...).
    Transport(String),
    /// A success response whose body is not a valid result payload.
    Parse(String),
    /// The server answered with a non-success status.
    Application { status: u16, message: Option<String> },
}

impl fmt::Display for AskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AskError::Transport(msg) => write!(f, "transport error: {msg}"),
            AskError::Parse(msg) => write!(f, "parse error: {msg}"),
            AskError::Application {
                status,
                message: Some(message),
            } => write!(f, "server error (HTTP {status}): {message}"),
            AskError::Application {
                status,
                message: None,
            } => write!(f, "server error (HTTP {status})"),
        }
    }
}

impl std::error::Error for AskError {}

#[async_trait]
pub trait AskClient: Send + Sync {
    /// Sends one submission and waits for the server's verdict.
    async fn ask(&self, request: &SubmissionRequest) -> Result<ResultPayload, AskError>;
}

/// reqwest-backed client posting to `<base_url><ask_path>`.
pub struct HttpAskClient {
    url: String,
    client: reqwest::Client,
}

impl HttpAskClient {
    pub fn new(base_url: &str, ask_path: &str) -> Self {
        let url = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            ask_path.trim_start_matches('/')
        );
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn image_form(file: &SelectedFile) -> Result<Form, AskError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|e| AskError::Transport(format!("reading {}: {e}", file.path.display())))?;
        debug!("Read {} bytes from {}", bytes.len(), file.path.display());
        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| AskError::Transport(e.to_string()))?;
        Ok(Form::new().part("image", part))
    }
}

#[async_trait]
impl AskClient for HttpAskClient {
    async fn ask(&self, request: &SubmissionRequest) -> Result<ResultPayload, AskError> {
        let builder = self.client.post(&self.url);
        let builder = match request {
            SubmissionRequest::Image(file) => {
                info!(
                    "POST {} (image: {}, {}, {} bytes)",
                    self.url, file.name, file.content_type, file.size
                );
                builder.multipart(Self::image_form(file).await?)
            }
            SubmissionRequest::Text { message } => {
                info!("POST {} (description: {} chars)", self.url, message.len());
                builder.json(&DescribeBody { message })
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| AskError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("Ask response status: {}", status);

        let body = response
            .bytes()
            .await
            .map_err(|e| AskError::Transport(e.to_string()))?;

        if !status.is_success() {
            // An unparsable error body still counts as a server failure, just without a message
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            warn!("Ask failed: HTTP {} ({:?})", status.as_u16(), message);
            return Err(AskError::Application {
                status: status.as_u16(),
                message,
            });
        }

        parse_result(&body).inspect_err(|e| warn!("Ask response did not parse: {}", e))
    }
}

/// Parses a success body. Only a JSON object counts as a result; serde would
/// otherwise map an array onto the fields by position.
fn parse_result(body: &[u8]) -> Result<ResultPayload, AskError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| AskError::Parse(e.to_string()))?;
    if !value.is_object() {
        return Err(AskError::Parse(format!(
            "expected a JSON object, got {}",
            value
        )));
    }
    serde_json::from_value(value).map_err(|e| AskError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = HttpAskClient::new("http://localhost:5000/", "/ask");
        assert_eq!(client.url(), "http://localhost:5000/ask");

        let client = HttpAskClient::new("http://localhost:5000", "ask");
        assert_eq!(client.url(), "http://localhost:5000/ask");
    }

    #[test]
    fn test_parse_result_requires_object() {
        let payload = parse_result(br#"{"injury_name": "Burn", "severity": "severe"}"#).unwrap();
        assert_eq!(payload.injury_name.as_deref(), Some("Burn"));

        let bodies: [&[u8]; 4] = [br#"["Burn", ["Cool"], "severe"]"#, b"\"severe\"", b"42", b"null"];
        for body in bodies {
            assert!(matches!(parse_result(body), Err(AskError::Parse(_))));
        }
    }

    #[test]
    fn test_error_display() {
        let err = AskError::Application {
            status: 400,
            message: Some("Unsupported file type".to_string()),
        };
        assert_eq!(err.to_string(), "server error (HTTP 400): Unsupported file type");

        let err = AskError::Application {
            status: 502,
            message: None,
        };
        assert_eq!(err.to_string(), "server error (HTTP 502)");

        let err = AskError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "transport error: connection refused");
    }
}
