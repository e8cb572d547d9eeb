//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::api::{AskClient, AskError, ResultPayload, SubmissionRequest};

/// Always answers with the same payload.
pub struct FixedClient(pub ResultPayload);

#[async_trait]
impl AskClient for FixedClient {
    async fn ask(&self, _request: &SubmissionRequest) -> Result<ResultPayload, AskError> {
        Ok(self.0.clone())
    }
}

/// Fails every request before a response arrives.
pub struct FailingClient;

#[async_trait]
impl AskClient for FailingClient {
    async fn ask(&self, _request: &SubmissionRequest) -> Result<ResultPayload, AskError> {
        Err(AskError::Transport("connection refused".to_string()))
    }
}

/// Creates a test App pointed at a dummy endpoint.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new("http://test.invalid/ask".to_string())
}
