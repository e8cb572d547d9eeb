//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing endpoint and status
//! - `TabBar`: Tab buttons, active one highlighted
//! - `SubmitButton`: A form's submit control
//! - `Notice`: Blocking modal for validation and server messages
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `TextField`: Path and description editing
//! - `ResultsPanel`: Scrollable results surface
//!
//! Components receive external data as props (fields or constructor
//! arguments), never by reaching into `App` themselves.

pub mod notice;
pub mod results_panel;
pub mod submit_button;
pub mod tab_bar;
pub mod text_field;
pub mod title_bar;

pub use notice::Notice;
pub use results_panel::{ResultsPanel, ResultsPanelState};
pub use submit_button::SubmitButton;
pub use tab_bar::TabBar;
pub use text_field::{FieldEvent, TextField};
pub use title_bar::TitleBar;
