pub mod client;
pub mod types;

pub use client::{AskClient, AskError, DEFAULT_ASK_PATH, HttpAskClient};
pub use types::{ResultPayload, SelectedFile, SubmissionRequest};
