//! # Core Application Logic
//!
//! The first-aid client's state machine. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect::SpawnSubmission
//!                                ▼
//!                    ┌─────────────────────────┐
//!                    │  TUI adapter (ratatui)  │──► api::AskClient (POST /ask)
//!                    └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`tabs`]: Tab buttons and panes
//! - [`validate`]: Pre-flight checks on submissions
//! - [`submission`]: Control lifecycle and the guarded network exchange
//! - [`results`]: Result rendering into the results surface
//! - [`file_select`]: File picking and label feedback
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod file_select;
pub mod results;
pub mod state;
pub mod submission;
pub mod tabs;
pub mod validate;
