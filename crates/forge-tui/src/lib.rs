//! Terminal user interface for apiforge using Ratatui.
//!
//! This crate provides the interactive client for the test-generation
//! service, featuring an async event loop with tokio, background HTTP
//! and file-read tasks feeding outcomes back as events, stateful widgets
//! with selection/scroll, and a component-based architecture.
//!
//! # Architecture
//!
//! ```text
//! crates/forge-tui/src/
//!   lib.rs            # Public API exports + run()
//!   app.rs            # Application state and lifecycle
//!   event.rs          # Event types (Key, Tick, Render, task outcomes)
//!   tui.rs            # Terminal wrapper with async event streaming
//!   action.rs         # User actions (commands from key bindings)
//!   ui.rs             # Main layout rendering orchestration
//!   theme.rs          # Color scheme and styling constants
//!   error.rs          # TUI-specific error types
//!   components/
//!     mod.rs          # Component exports
//!     case_list.rs    # CaseListView for the test plan
//!     code_pane.rs    # CodePane for the selected case
//!     options_panel.rs # OptionsPanel with document + options
//!     header.rs       # HeaderBar component
//!     status_bar.rs   # StatusBar component
//!     help.rs         # HelpPanel modal overlay
//!     path_prompt.rs  # Document path input overlay
//!     settings_form.rs # Settings form overlay
//!     alert.rs        # Blocking error overlay
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use forge_core::Config;
//! use forge_tui::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), forge_tui::TuiError> {
//!     run(Config::default()).await
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod action;
pub mod app;
pub mod components;
pub mod error;
pub mod event;
pub mod theme;
pub mod tui;
pub mod ui;

use camino::Utf8PathBuf;
use forge_client::Client;
use forge_core::{Config, Document, DocumentError};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

// Public re-exports
pub use action::Action;
pub use app::{
    App, AppMode, CaseListState, CodePaneState, Focus, GenerationPhase, SettingsForm,
    StatusMessage,
};
pub use error::TuiError;
pub use event::Event;
pub use theme::Theme;
pub use tui::Tui;

/// Runs the TUI application with the given configuration.
///
/// This is the main entry point for the forge-tui crate. It:
///
/// 1. Initializes the terminal
/// 2. Fetches persisted settings in the background
/// 3. Runs the main event loop
/// 4. Cleans up on exit
///
/// # Errors
///
/// Returns an error if terminal initialization fails or the event
/// channel closes unexpectedly.
pub async fn run(config: Config) -> Result<(), TuiError> {
    // tick_rate_ms and frame_rate are small UI timing values, precision loss is acceptable
    #[allow(clippy::cast_precision_loss)]
    let tick_rate = config.tui.tick_rate_ms as f64 / 1000.0;
    #[allow(clippy::cast_precision_loss)]
    let frame_rate = config.tui.frame_rate as f64;

    let mut tui = Tui::new(tick_rate)?.with_frame_rate(frame_rate);

    let client = Client::new(&config.service);
    let theme = Theme::from_scheme(config.tui.color_scheme);
    let mut app = App::new(config);

    // Enter terminal
    tui.enter()?;

    // Fetch persisted settings in the background; the outcome arrives as
    // an event like any other task result.
    spawn_settings_fetch(client.clone(), tui.event_sender());

    // Main event loop
    info!("Entering main event loop");
    let result = run_event_loop(&mut tui, &mut app, &client, &theme).await;

    // Exit terminal (restore state)
    tui.exit()?;

    result
}

/// Runs the main event loop.
async fn run_event_loop(
    tui: &mut Tui,
    app: &mut App,
    client: &Client,
    theme: &Theme,
) -> Result<(), TuiError> {
    loop {
        // Draw the UI
        tui.draw(|frame| ui::render(app, frame, theme))?;

        // Wait for next event
        let Some(event) = tui.next_event().await else {
            return Err(TuiError::ChannelClosed);
        };

        // Process event
        let action = match event {
            Event::Key(key) => app.handle_key(key),
            Event::Resize { width, height } => {
                app.set_terminal_size(ratatui::layout::Rect::new(0, 0, width, height));
                Action::Render
            }
            Event::DocumentLoaded(outcome) => {
                app.document_loaded(outcome);
                Action::Render
            }
            Event::GenerationFinished(outcome) => {
                app.finish_generation(outcome);
                Action::Render
            }
            Event::SettingsLoaded(outcome) => {
                app.settings_loaded(outcome);
                Action::Render
            }
            Event::SettingsSaved(outcome) => {
                app.settings_saved(outcome);
                Action::Render
            }
            Event::Tick => {
                app.tick();
                Action::None
            }
            Event::Render => Action::Render,
            Event::FocusGained | Event::FocusLost => Action::None,
        };

        // Apply action
        app.update(action);

        // Drain pending side effects into background tasks
        if let Some(path) = app.take_pending_document_read() {
            spawn_document_read(path, tui.event_sender());
        }
        if let Some(request) = app.take_pending_request() {
            spawn_generation(client.clone(), request, tui.event_sender());
        }
        if let Some(snapshot) = app.take_pending_settings_save() {
            spawn_settings_save(client.clone(), snapshot, tui.event_sender());
        }

        // Check for quit
        if app.should_quit {
            info!("Quit requested");
            break;
        }
    }

    Ok(())
}

/// Reads a document from disk in the background.
fn spawn_document_read(path: Utf8PathBuf, events: mpsc::Sender<Event>) {
    tokio::spawn(async move {
        debug!(path = %path, "Reading document");
        let outcome = match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Document::new(content, Document::display_name(&path))),
            Err(source) => Err(DocumentError::Read { path, source }),
        };
        send_event(&events, Event::DocumentLoaded(outcome)).await;
    });
}

/// Submits a generation request in the background.
fn spawn_generation(
    client: Client,
    request: forge_client::GenerateRequest,
    events: mpsc::Sender<Event>,
) {
    tokio::spawn(async move {
        let outcome = client.generate(&request).await;
        send_event(&events, Event::GenerationFinished(outcome)).await;
    });
}

/// Fetches persisted settings in the background.
fn spawn_settings_fetch(client: Client, events: mpsc::Sender<Event>) {
    tokio::spawn(async move {
        let outcome = client.fetch_settings().await;
        send_event(&events, Event::SettingsLoaded(outcome)).await;
    });
}

/// Persists a settings snapshot in the background.
fn spawn_settings_save(
    client: Client,
    snapshot: forge_client::SettingsSnapshot,
    events: mpsc::Sender<Event>,
) {
    tokio::spawn(async move {
        let outcome = client.save_settings(&snapshot).await;
        send_event(&events, Event::SettingsSaved(outcome)).await;
    });
}

async fn send_event(events: &mpsc::Sender<Event>, event: Event) {
    if events.send(event).await.is_err() {
        warn!("Event channel closed before a task outcome could be delivered");
    }
}
