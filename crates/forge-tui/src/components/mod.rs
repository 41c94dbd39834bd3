//! UI components for the TUI.
//!
//! This module contains all the widget implementations for rendering
//! different parts of the interface.
//!
//! # Component Types
//!
//! - **Widgets** (`Widget` trait): Stateless rendering - `HeaderBar`, `OptionsPanel`, `StatusBar`
//! - **Stateful Widgets** (`StatefulWidget` trait): Selection/scroll state - `CaseListView`, `CodePane`
//! - **Overlays**: Modal overlays - `HelpPanel`, `PathPrompt`, `SettingsView`, `AlertView`
//!
//! # Usage
//!
//! ```ignore
//! use forge_tui::components::{CaseListView, HeaderBar};
//! ```

mod alert;
mod case_list;
mod code_pane;
mod header;
mod help;
mod options_panel;
mod path_prompt;
mod settings_form;
mod status_bar;

pub use alert::AlertView;
pub use case_list::CaseListView;
pub use code_pane::CodePane;
pub use header::HeaderBar;
pub use help::HelpPanel;
pub use options_panel::OptionsPanel;
pub use path_prompt::PathPrompt;
pub use settings_form::SettingsView;
pub use status_bar::StatusBar;
