//! Application state and lifecycle management.
//!
//! This module provides the core [`App`] struct which manages the entire
//! application state, including the loaded document, generation options,
//! the request lifecycle, and event handling.
//!
//! # Architecture
//!
//! ```text
//! App
//!  ├── options: GenerationOptions  # Language, tier, flags, connection
//!  ├── document: Option<Document>  # Loaded specification text
//!  ├── phase: GenerationPhase      # Request lifecycle state
//!  ├── result: Option<GenerationResult>
//!  ├── mode: AppMode               # Current UI mode
//!  ├── focus: Focus                # Active panel
//!  ├── case_list_state: CaseListState
//!  ├── code_pane_state: CodePaneState
//!  └── status: Option<StatusMessage>
//! ```
//!
//! Side effects (document reads, HTTP calls) are never performed here.
//! The app records them as pending work; the event loop drains the
//! pending slots, spawns the async tasks, and feeds the outcomes back
//! as events.

use std::time::Instant;

use camino::Utf8PathBuf;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use forge_client::{ClientError, GenerateRequest, RemoteSettings, SettingsSnapshot};
use forge_core::{Config, Document, DocumentError, GenerationOptions, GenerationResult, TestCase};
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::action::Action;

/// The current mode of the application UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal browsing mode.
    #[default]
    Normal,

    /// Document path prompt is displayed.
    DocumentPrompt,

    /// Settings form is displayed.
    Settings,

    /// Help panel is displayed.
    Help,

    /// Blocking alert is displayed.
    Alert,
}

/// Which panel has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Case list panel is focused.
    #[default]
    CaseList,

    /// Code pane is focused.
    CodePane,
}

impl Focus {
    /// Toggles between `CaseList` and `CodePane`.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::CaseList => Self::CodePane,
            Self::CodePane => Self::CaseList,
        }
    }
}

/// Lifecycle state of the current generation request.
///
/// Transitions:
///
/// ```text
/// Idle ──submit──► InFlight ──success──► Completed
///                     │                      │
///                     └──failure──► Failed ──┘──resubmit──► InFlight
/// ```
///
/// At most one request is in flight at a time; submitting while
/// `InFlight` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationPhase {
    /// No request has been submitted yet (or the document was replaced).
    #[default]
    Idle,

    /// A request has been submitted and its outcome has not arrived.
    InFlight,

    /// The last request produced a result.
    Completed,

    /// The last request failed; no result is retained.
    Failed,
}

impl GenerationPhase {
    /// Returns `true` if a request is currently in flight.
    #[inline]
    #[must_use]
    pub const fn is_in_flight(self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Returns a short display label for the phase.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::InFlight => "Generating",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
        }
    }
}

/// State for the test case list widget.
#[derive(Debug, Clone, Default)]
pub struct CaseListState {
    /// Currently selected index (if any).
    pub selected: Option<usize>,

    /// Scroll offset for virtualized rendering.
    pub scroll_offset: usize,

    /// Height of the visible area (for scroll clamping).
    pub visible_height: usize,
}

impl CaseListState {
    /// Creates a new case list state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves selection to the next case.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }

        self.selected = Some(match self.selected {
            Some(i) if i + 1 < len => i + 1,
            Some(_) | None => 0, // Wrap to start
        });

        self.ensure_visible();
    }

    /// Moves selection to the previous case.
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }

        self.selected = Some(match self.selected {
            Some(0) | None => len.saturating_sub(1), // Wrap to end
            Some(i) => i - 1,
        });

        self.ensure_visible();
    }

    /// Moves selection to the first case.
    pub fn select_first(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
        } else {
            self.selected = Some(0);
            self.scroll_offset = 0;
        }
    }

    /// Moves selection to the last case.
    pub fn select_last(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
        } else {
            self.selected = Some(len - 1);
            self.ensure_visible();
        }
    }

    /// Selects a specific case by index.
    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.selected = Some(index);
            self.ensure_visible();
        }
    }

    /// Clears the selection and resets scrolling.
    pub fn clear(&mut self) {
        self.selected = None;
        self.scroll_offset = 0;
    }

    /// Ensures the selected case is visible.
    fn ensure_visible(&mut self) {
        let height = self.visible_height.max(1);
        if let Some(selected) = self.selected {
            if selected < self.scroll_offset {
                self.scroll_offset = selected;
            } else if selected >= self.scroll_offset + height {
                self.scroll_offset = selected.saturating_sub(height - 1);
            }
        }
    }
}

/// State for the code pane widget.
#[derive(Debug, Clone, Default)]
pub struct CodePaneState {
    /// Scroll offset within the code view.
    pub scroll_offset: usize,
}

/// Field focus for the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    /// API base URL.
    BaseUrl,
    /// API key.
    ApiKey,
    /// Model name.
    ModelName,
}

impl SettingsField {
    /// Returns the next field in focus order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::BaseUrl => Self::ApiKey,
            Self::ApiKey => Self::ModelName,
            Self::ModelName => Self::BaseUrl,
        }
    }

    /// Returns the previous field in focus order.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::BaseUrl => Self::ModelName,
            Self::ApiKey => Self::BaseUrl,
            Self::ModelName => Self::ApiKey,
        }
    }
}

/// Settings form input state.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    /// Input value for the API base URL.
    pub base_url_input: String,
    /// Input value for the API key.
    pub api_key_input: String,
    /// Input value for the model name.
    pub model_name_input: String,
    /// Which field is active.
    pub active_field: SettingsField,
}

impl SettingsForm {
    /// Creates form state from the current options.
    #[must_use]
    pub fn from_options(options: &GenerationOptions) -> Self {
        Self {
            base_url_input: options.connection.base_url.clone(),
            api_key_input: options.connection.api_key.clone(),
            model_name_input: options.connection.model_name.clone(),
            active_field: SettingsField::BaseUrl,
        }
    }

    /// Refreshes input values from the current options.
    pub fn refresh_from_options(&mut self, options: &GenerationOptions) {
        self.base_url_input = options.connection.base_url.clone();
        self.api_key_input = options.connection.api_key.clone();
        self.model_name_input = options.connection.model_name.clone();
        self.active_field = SettingsField::BaseUrl;
    }

    /// Moves focus to the next input field.
    pub fn focus_next(&mut self) {
        self.active_field = self.active_field.next();
    }

    /// Moves focus to the previous input field.
    pub fn focus_previous(&mut self) {
        self.active_field = self.active_field.previous();
    }

    /// Returns a mutable reference to the active input field.
    pub fn active_input_mut(&mut self) -> &mut String {
        match self.active_field {
            SettingsField::BaseUrl => &mut self.base_url_input,
            SettingsField::ApiKey => &mut self.api_key_input,
            SettingsField::ModelName => &mut self.model_name_input,
        }
    }
}

/// Status message to display in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text.
    pub text: String,

    /// When the message was created.
    pub timestamp: Instant,

    /// Whether this is an error message.
    pub is_error: bool,
}

impl StatusMessage {
    /// Creates a new info message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: false,
        }
    }

    /// Creates a new error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: true,
        }
    }

    /// Returns `true` if the message should be auto-hidden.
    ///
    /// Messages are hidden after 5 seconds.
    #[must_use]
    pub fn should_hide(&self) -> bool {
        self.timestamp.elapsed().as_secs() > 5
    }
}

/// The main application state.
pub struct App {
    /// The configuration.
    pub config: Config,

    /// Current generation options.
    pub options: GenerationOptions,

    /// The loaded specification document, if any.
    pub document: Option<Document>,

    /// Lifecycle state of the current generation request.
    pub phase: GenerationPhase,

    /// Result of the last completed generation, if any.
    pub result: Option<GenerationResult>,

    /// Current UI mode.
    pub mode: AppMode,

    /// Which panel has focus.
    pub focus: Focus,

    /// Case list widget state.
    pub case_list_state: CaseListState,

    /// Code pane widget state.
    pub code_pane_state: CodePaneState,

    /// Settings form input state.
    pub settings_form: SettingsForm,

    /// Input value for the document path prompt.
    pub path_input: String,

    /// Text of the blocking alert, if one is displayed.
    pub alert: Option<String>,

    /// Mode to return to when the alert is dismissed.
    alert_return: AppMode,

    /// Status message to display.
    pub status: Option<StatusMessage>,

    /// Pending generation request (drained by the event loop).
    pending_request: Option<GenerateRequest>,

    /// Pending document read (drained by the event loop).
    pending_document_read: Option<Utf8PathBuf>,

    /// Pending settings save (drained by the event loop).
    pending_settings_save: Option<SettingsSnapshot>,

    /// Whether the application should quit.
    pub should_quit: bool,

    /// Terminal size (updated on resize).
    pub terminal_size: Rect,
}

impl App {
    /// Creates a new application with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let options = GenerationOptions::default();
        let settings_form = SettingsForm::from_options(&options);
        Self {
            config,
            options,
            document: None,
            phase: GenerationPhase::Idle,
            result: None,
            mode: AppMode::Normal,
            focus: Focus::CaseList,
            case_list_state: CaseListState::new(),
            code_pane_state: CodePaneState::default(),
            settings_form,
            path_input: String::new(),
            alert: None,
            alert_return: AppMode::Normal,
            status: None,
            pending_request: None,
            pending_document_read: None,
            pending_settings_save: None,
            should_quit: false,
            terminal_size: Rect::default(),
        }
    }

    /// Handles a key event and returns the resulting action.
    #[must_use]
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Global quit handling
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::DocumentPrompt => self.handle_prompt_key(key),
            AppMode::Settings => self.handle_settings_key(key),
            AppMode::Help => self.handle_help_key(key),
            AppMode::Alert => self.handle_alert_key(key),
        }
    }

    /// Handles a key event in normal mode.
    fn handle_normal_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ToggleHelp,
            KeyCode::Char('j') | KeyCode::Down => match self.focus {
                Focus::CaseList => Action::NextCase,
                Focus::CodePane => Action::ScrollCodeDown,
            },
            KeyCode::Char('k') | KeyCode::Up => match self.focus {
                Focus::CaseList => Action::PreviousCase,
                Focus::CodePane => Action::ScrollCodeUp,
            },
            KeyCode::Char('g') | KeyCode::Home => Action::FirstCase,
            KeyCode::Char('G') | KeyCode::End => Action::LastCase,
            KeyCode::Tab => Action::ToggleFocus,
            KeyCode::Char('o') => Action::OpenDocumentPrompt,
            KeyCode::Char('x') => Action::ClearDocument,
            KeyCode::Char('l') => Action::CycleLanguage,
            KeyCode::Char('t') => Action::ToggleTier,
            KeyCode::Char('b') => Action::ToggleBoundary,
            KeyCode::Char('n') => Action::ToggleNegative,
            KeyCode::Char('s') => Action::OpenSettings,
            KeyCode::Char('r') | KeyCode::Enter => Action::Generate,
            _ => Action::None,
        }
    }

    /// Handles a key event in the document path prompt.
    fn handle_prompt_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::CloseDocumentPrompt,
            KeyCode::Enter => Action::AcceptDocumentPath,
            KeyCode::Backspace => {
                self.path_input.pop();
                Action::None
            }
            KeyCode::Char(c) => {
                self.path_input.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Handles a key event in the settings form.
    fn handle_settings_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::CloseSettings,
            KeyCode::Enter => Action::SaveSettings,
            KeyCode::Tab | KeyCode::Down => {
                self.settings_form.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.settings_form.focus_previous();
                Action::None
            }
            KeyCode::Backspace => {
                self.settings_form.active_input_mut().pop();
                Action::None
            }
            KeyCode::Char(c) => {
                self.settings_form.active_input_mut().push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Handles a key event in help mode.
    #[allow(clippy::unused_self)] // Keep &mut self for consistency
    fn handle_help_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => Action::HideHelp,
            _ => Action::None,
        }
    }

    /// Handles a key event while a blocking alert is displayed.
    #[allow(clippy::unused_self)]
    fn handle_alert_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Action::DismissAlert,
            _ => Action::None,
        }
    }

    /// Updates the application state based on an action.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::NextCase => {
                self.case_list_state.select_next(self.case_count());
                self.code_pane_state.scroll_offset = 0;
            }
            Action::PreviousCase => {
                self.case_list_state.select_previous(self.case_count());
                self.code_pane_state.scroll_offset = 0;
            }
            Action::FirstCase => {
                self.case_list_state.select_first(self.case_count());
                self.code_pane_state.scroll_offset = 0;
            }
            Action::LastCase => {
                self.case_list_state.select_last(self.case_count());
                self.code_pane_state.scroll_offset = 0;
            }
            Action::SelectCase(idx) => {
                self.case_list_state.select(idx, self.case_count());
                self.code_pane_state.scroll_offset = 0;
            }
            Action::ScrollCodeDown => {
                self.code_pane_state.scroll_offset =
                    self.code_pane_state.scroll_offset.saturating_add(1);
            }
            Action::ScrollCodeUp => {
                self.code_pane_state.scroll_offset =
                    self.code_pane_state.scroll_offset.saturating_sub(1);
            }

            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
            }
            Action::FocusCaseList => {
                self.focus = Focus::CaseList;
            }
            Action::FocusCodePane => {
                self.focus = Focus::CodePane;
            }

            Action::CycleLanguage => {
                self.options.target_language = self.options.target_language.cycle();
            }
            Action::ToggleTier => {
                self.options.tier = self.options.tier.toggle();
            }
            Action::ToggleBoundary => {
                self.options.include_boundary = !self.options.include_boundary;
            }
            Action::ToggleNegative => {
                self.options.include_negative = !self.options.include_negative;
            }

            Action::OpenDocumentPrompt => {
                if self.phase.is_in_flight() {
                    self.status = Some(StatusMessage::error(
                        "Cannot change the document while generating",
                    ));
                } else {
                    self.mode = AppMode::DocumentPrompt;
                }
            }
            Action::CloseDocumentPrompt => {
                self.mode = AppMode::Normal;
            }
            Action::AcceptDocumentPath => {
                self.request_document_load();
            }
            Action::ClearDocument => {
                self.clear_document();
            }

            Action::Generate => {
                self.begin_generation();
            }

            Action::OpenSettings => {
                self.settings_form.refresh_from_options(&self.options);
                self.mode = AppMode::Settings;
            }
            Action::CloseSettings => {
                self.mode = AppMode::Normal;
            }
            Action::SaveSettings => {
                self.save_settings();
            }

            Action::ToggleHelp => {
                self.mode = if self.mode == AppMode::Help {
                    AppMode::Normal
                } else {
                    AppMode::Help
                };
            }
            Action::ShowHelp => {
                self.mode = AppMode::Help;
            }
            Action::HideHelp => {
                self.mode = AppMode::Normal;
            }
            Action::DismissAlert => {
                self.alert = None;
                self.mode = self.alert_return;
                self.alert_return = AppMode::Normal;
            }

            Action::ShowStatus(text) => {
                self.status = Some(StatusMessage::info(text));
            }
            Action::ClearStatus => {
                self.status = None;
            }

            Action::Render | Action::Tick | Action::None => {}
        }
    }

    /// Handles a tick event (periodic update).
    pub fn tick(&mut self) {
        // Clear stale status messages
        if let Some(ref status) = self.status {
            if status.should_hide() {
                self.status = None;
            }
        }
    }

    // =========================================================================
    // Generation lifecycle
    // =========================================================================

    /// Submits a generation request for the current document and options.
    ///
    /// Ignored when a request is already in flight or when no non-empty
    /// document is loaded. On submission the previous result and case
    /// selection are discarded immediately so the UI never shows stale
    /// output next to an in-flight request.
    fn begin_generation(&mut self) {
        if self.phase.is_in_flight() {
            debug!("Generation already in flight, ignoring submit");
            return;
        }

        let Some(document) = self.document.as_ref().filter(|d| d.has_content()) else {
            self.status = Some(StatusMessage::error(
                "Load a specification document before generating",
            ));
            return;
        };

        info!(
            document = %document.name,
            language = %self.options.target_language.as_str(),
            "Submitting generation request"
        );

        self.pending_request = Some(GenerateRequest::new(document, &self.options));
        self.result = None;
        self.case_list_state.clear();
        self.code_pane_state.scroll_offset = 0;
        self.phase = GenerationPhase::InFlight;
        self.status = Some(StatusMessage::info("Generating tests..."));
    }

    /// Records the outcome of the in-flight generation request.
    ///
    /// On success the result is stored, the phase moves to `Completed`,
    /// and the first test case is selected when the plan is non-empty.
    /// On failure the phase moves to `Failed`, nothing is stored, and a
    /// blocking alert shows the error.
    pub fn finish_generation(&mut self, outcome: Result<GenerationResult, ClientError>) {
        if !self.phase.is_in_flight() {
            warn!("Received a generation outcome with no request in flight, ignoring");
            return;
        }

        match outcome {
            Ok(result) => {
                let count = result.test_plan.len();
                info!(cases = count, "Generation completed");

                self.case_list_state.clear();
                if count > 0 {
                    self.case_list_state.selected = Some(0);
                }
                self.result = Some(result);
                self.phase = GenerationPhase::Completed;
                self.status = Some(StatusMessage::info(format!(
                    "Generated {count} test case{}",
                    if count == 1 { "" } else { "s" }
                )));
            }
            Err(e) => {
                warn!(error = %e, "Generation failed");
                self.phase = GenerationPhase::Failed;
                self.status = None;
                self.show_alert(e.to_string(), AppMode::Normal);
            }
        }
    }

    // =========================================================================
    // Document lifecycle
    // =========================================================================

    /// Validates the prompt input and schedules the document read.
    ///
    /// Unsupported extensions are rejected before any I/O; the prompt
    /// stays open so the path can be corrected.
    fn request_document_load(&mut self) {
        let trimmed = self.path_input.trim();
        if trimmed.is_empty() {
            self.status = Some(StatusMessage::error("Document path is required"));
            return;
        }

        let path = Utf8PathBuf::from(trimmed);
        if let Err(e) = Document::check_path(&path) {
            self.status = Some(StatusMessage::error(e.to_string()));
            return;
        }

        debug!(path = %path, "Scheduling document read");
        self.pending_document_read = Some(path);
        self.mode = AppMode::Normal;
    }

    /// Records the outcome of a background document read.
    ///
    /// A successful load replaces the document and resets the request
    /// lifecycle; the previous result no longer describes what is
    /// loaded. A failed read leaves all state untouched.
    pub fn document_loaded(&mut self, outcome: Result<Document, DocumentError>) {
        match outcome {
            Ok(document) => {
                info!(document = %document.name, "Document loaded");
                self.status = Some(StatusMessage::info(format!("Loaded {}", document.name)));
                self.document = Some(document);
                self.result = None;
                self.case_list_state.clear();
                self.code_pane_state.scroll_offset = 0;
                self.phase = GenerationPhase::Idle;
            }
            Err(e) => {
                warn!(error = %e, "Document load failed");
                self.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    /// Clears the loaded document and any result derived from it.
    ///
    /// Ignored while a request is in flight; the in-flight request was
    /// built from this document and its outcome must stay attributable.
    fn clear_document(&mut self) {
        if self.phase.is_in_flight() {
            self.status = Some(StatusMessage::error(
                "Cannot clear the document while generating",
            ));
            return;
        }

        if self.document.take().is_some() {
            self.result = None;
            self.case_list_state.clear();
            self.code_pane_state.scroll_offset = 0;
            self.phase = GenerationPhase::Idle;
            self.status = Some(StatusMessage::info("Document cleared"));
        }
    }

    // =========================================================================
    // Settings lifecycle
    // =========================================================================

    /// Overlays persisted settings onto the current options.
    ///
    /// Only fields present in the overlay are applied. A language value
    /// that does not name a supported target is ignored so a remote
    /// record written by a different client cannot poison local state.
    pub fn apply_remote_settings(&mut self, settings: RemoteSettings) {
        if let Some(base_url) = settings.base_url {
            self.options.connection.base_url = base_url;
        }
        if let Some(api_key) = settings.api_key {
            self.options.connection.api_key = api_key;
        }
        if let Some(model_name) = settings.model_name {
            self.options.connection.model_name = model_name;
        }
        if let Some(language) = settings.language {
            match language.parse() {
                Ok(parsed) => self.options.target_language = parsed,
                Err(_) => debug!(language, "Ignoring unrecognized persisted language"),
            }
        }
    }

    /// Records the outcome of the startup settings fetch.
    ///
    /// Failure is non-fatal: the defaults stay in place and the app
    /// remains usable.
    pub fn settings_loaded(&mut self, outcome: Result<RemoteSettings, ClientError>) {
        match outcome {
            Ok(settings) => self.apply_remote_settings(settings),
            Err(e) => warn!(error = %e, "Settings fetch failed, keeping defaults"),
        }
    }

    /// Applies the settings form and schedules the save.
    ///
    /// The form values take effect locally right away; persistence runs
    /// in the background and a failure is reported without rolling the
    /// local values back.
    fn save_settings(&mut self) {
        self.options.connection.base_url = self.settings_form.base_url_input.trim().to_owned();
        self.options.connection.api_key = self.settings_form.api_key_input.trim().to_owned();
        self.options.connection.model_name = self.settings_form.model_name_input.trim().to_owned();

        self.pending_settings_save = Some(SettingsSnapshot::from_options(&self.options));
    }

    /// Records the outcome of a background settings save.
    pub fn settings_saved(&mut self, outcome: Result<(), ClientError>) {
        match outcome {
            Ok(()) => {
                self.mode = AppMode::Normal;
                self.status = Some(StatusMessage::info("Settings saved"));
            }
            Err(e) => {
                warn!(error = %e, "Settings save failed");
                self.show_alert(format!("Failed to save settings: {e}"), AppMode::Settings);
            }
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the number of test cases in the current result.
    #[must_use]
    pub fn case_count(&self) -> usize {
        self.result.as_ref().map_or(0, |r| r.test_plan.len())
    }

    /// Returns the currently selected test case, if any.
    #[must_use]
    pub fn selected_case(&self) -> Option<&TestCase> {
        let result = self.result.as_ref()?;
        let index = self.case_list_state.selected?;
        result.test_plan.get(index)
    }

    /// Returns the id of the currently selected test case, if any.
    #[must_use]
    pub fn selected_case_id(&self) -> Option<&str> {
        self.selected_case().map(|case| case.id.as_str())
    }

    /// Resolves the code to display for the current selection.
    ///
    /// Falls back to the first case in plan order that has code when the
    /// selected case has none.
    #[must_use]
    pub fn resolved_code(&self) -> Option<&str> {
        self.result
            .as_ref()
            .and_then(|r| r.code_for(self.selected_case_id()))
    }

    /// Shows a blocking alert, remembering which mode to return to.
    pub fn show_alert(&mut self, text: impl Into<String>, return_mode: AppMode) {
        self.alert = Some(text.into());
        self.alert_return = return_mode;
        self.mode = AppMode::Alert;
    }

    /// Updates the terminal size.
    pub fn set_terminal_size(&mut self, size: Rect) {
        self.terminal_size = size;
    }

    // =========================================================================
    // Pending side effects (drained by the event loop)
    // =========================================================================

    /// Takes the pending generation request, if any.
    pub fn take_pending_request(&mut self) -> Option<GenerateRequest> {
        self.pending_request.take()
    }

    /// Takes the pending document read path, if any.
    pub fn take_pending_document_read(&mut self) -> Option<Utf8PathBuf> {
        self.pending_document_read.take()
    }

    /// Takes the pending settings save, if any.
    pub fn take_pending_settings_save(&mut self) -> Option<SettingsSnapshot> {
        self.pending_settings_save.take()
    }
}

#[cfg(test)]
mod tests {
    use forge_core::TargetLanguage;
    use rustc_hash::FxHashMap;

    use super::*;

    fn app() -> App {
        App::new(Config::default())
    }

    fn app_with_document() -> App {
        let mut app = app();
        app.document_loaded(Ok(Document::new("openapi: 3.0.0", "api.yaml")));
        app
    }

    fn sample_result() -> GenerationResult {
        let mut generated_code = FxHashMap::default();
        generated_code.insert("t1".to_owned(), "curl -X GET /users".to_owned());
        GenerationResult {
            test_plan: vec![
                TestCase {
                    id: "t1".to_owned(),
                    name: "list users".to_owned(),
                    ..sample_case()
                },
                TestCase {
                    id: "t2".to_owned(),
                    name: "create user".to_owned(),
                    ..sample_case()
                },
            ],
            generated_code,
        }
    }

    fn sample_case() -> TestCase {
        TestCase {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            kind: forge_core::CaseKind::Positive,
            endpoint: String::new(),
            method: String::new(),
            expected_status: 200,
            data_requirements: None,
        }
    }

    #[test]
    fn test_app_mode_default() {
        assert_eq!(AppMode::default(), AppMode::Normal);
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::CaseList.toggle(), Focus::CodePane);
        assert_eq!(Focus::CodePane.toggle(), Focus::CaseList);
    }

    #[test]
    fn test_case_list_state_navigation() {
        let mut state = CaseListState::new();
        state.visible_height = 10;

        // With 0 cases
        state.select_next(0);
        assert!(state.selected.is_none());

        // With 5 cases
        state.select_next(5);
        assert_eq!(state.selected, Some(0));

        state.select_next(5);
        assert_eq!(state.selected, Some(1));

        state.select_last(5);
        assert_eq!(state.selected, Some(4));

        state.select_next(5);
        assert_eq!(state.selected, Some(0)); // Wrap

        state.select_previous(5);
        assert_eq!(state.selected, Some(4)); // Wrap back

        state.select_first(5);
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn test_status_message() {
        let msg = StatusMessage::info("Test message");
        assert!(!msg.is_error);
        assert!(!msg.should_hide()); // Just created, shouldn't hide yet

        let err = StatusMessage::error("Error!");
        assert!(err.is_error);
    }

    #[test]
    fn test_generate_without_document_is_rejected() {
        let mut app = app();
        app.update(Action::Generate);

        assert_eq!(app.phase, GenerationPhase::Idle);
        assert!(app.take_pending_request().is_none());
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));
    }

    #[test]
    fn test_generate_with_empty_document_is_rejected() {
        let mut app = app();
        app.document_loaded(Ok(Document::new("", "empty.json")));
        app.update(Action::Generate);

        assert_eq!(app.phase, GenerationPhase::Idle);
        assert!(app.take_pending_request().is_none());
    }

    #[test]
    fn test_generate_happy_path_selects_first_case() {
        let mut app = app_with_document();
        app.update(Action::Generate);

        assert_eq!(app.phase, GenerationPhase::InFlight);
        let request = app.take_pending_request().unwrap();
        assert_eq!(request.openapi_content, "openapi: 3.0.0");

        app.finish_generation(Ok(sample_result()));

        assert_eq!(app.phase, GenerationPhase::Completed);
        assert_eq!(app.case_list_state.selected, Some(0));
        assert_eq!(app.selected_case_id(), Some("t1"));
        assert_eq!(app.resolved_code(), Some("curl -X GET /users"));
    }

    #[test]
    fn test_completion_with_empty_plan_selects_nothing() {
        let mut app = app_with_document();
        app.update(Action::Generate);
        app.finish_generation(Ok(GenerationResult::default()));

        assert_eq!(app.phase, GenerationPhase::Completed);
        assert!(app.case_list_state.selected.is_none());
        assert!(app.resolved_code().is_none());
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let mut app = app_with_document();
        app.update(Action::Generate);
        let first = app.take_pending_request();
        assert!(first.is_some());

        app.update(Action::Generate);
        assert!(app.take_pending_request().is_none());
        assert_eq!(app.phase, GenerationPhase::InFlight);
    }

    #[test]
    fn test_resubmit_clears_previous_result() {
        let mut app = app_with_document();
        app.update(Action::Generate);
        app.finish_generation(Ok(sample_result()));
        app.update(Action::NextCase);
        assert_eq!(app.case_list_state.selected, Some(1));

        app.update(Action::Generate);

        assert_eq!(app.phase, GenerationPhase::InFlight);
        assert!(app.result.is_none());
        assert!(app.case_list_state.selected.is_none());
    }

    #[test]
    fn test_failure_shows_alert_and_stores_nothing() {
        let mut app = app_with_document();
        app.update(Action::Generate);
        app.finish_generation(Err(ClientError::rejected(Some(
            "invalid spec".to_owned(),
        ))));

        assert_eq!(app.phase, GenerationPhase::Failed);
        assert!(app.result.is_none());
        assert_eq!(app.mode, AppMode::Alert);
        assert!(app.alert.as_ref().is_some_and(|a| a.contains("invalid spec")));

        app.update(Action::DismissAlert);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_resubmit_after_failure_is_allowed() {
        let mut app = app_with_document();
        app.update(Action::Generate);
        app.finish_generation(Err(ClientError::rejected(None)));
        app.update(Action::DismissAlert);

        app.update(Action::Generate);
        assert_eq!(app.phase, GenerationPhase::InFlight);
        assert!(app.take_pending_request().is_some());
    }

    #[test]
    fn test_unexpected_outcome_is_ignored() {
        let mut app = app_with_document();
        app.finish_generation(Ok(sample_result()));

        assert_eq!(app.phase, GenerationPhase::Idle);
        assert!(app.result.is_none());
    }

    #[test]
    fn test_prompt_rejects_unsupported_extension() {
        let mut app = app();
        app.update(Action::OpenDocumentPrompt);
        app.path_input = "spec.txt".to_owned();
        app.update(Action::AcceptDocumentPath);

        assert_eq!(app.mode, AppMode::DocumentPrompt);
        assert!(app.take_pending_document_read().is_none());
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));
    }

    #[test]
    fn test_prompt_accepts_supported_extension() {
        let mut app = app();
        app.update(Action::OpenDocumentPrompt);
        app.path_input = "specs/api.yaml".to_owned();
        app.update(Action::AcceptDocumentPath);

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(
            app.take_pending_document_read(),
            Some(Utf8PathBuf::from("specs/api.yaml"))
        );
    }

    #[test]
    fn test_failed_document_load_keeps_previous_document() {
        let mut app = app_with_document();
        app.update(Action::Generate);
        app.finish_generation(Ok(sample_result()));

        app.document_loaded(Err(DocumentError::Read {
            path: Utf8PathBuf::from("missing.yaml"),
            source: std::io::Error::other("not found"),
        }));

        assert!(app.document.is_some());
        assert!(app.result.is_some());
        assert_eq!(app.phase, GenerationPhase::Completed);
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));
    }

    #[test]
    fn test_new_document_resets_lifecycle() {
        let mut app = app_with_document();
        app.update(Action::Generate);
        app.finish_generation(Ok(sample_result()));

        app.document_loaded(Ok(Document::new("{}", "other.json")));

        assert_eq!(app.phase, GenerationPhase::Idle);
        assert!(app.result.is_none());
        assert!(app.case_list_state.selected.is_none());
    }

    #[test]
    fn test_document_changes_blocked_while_in_flight() {
        let mut app = app_with_document();
        app.update(Action::Generate);

        app.update(Action::OpenDocumentPrompt);
        assert_eq!(app.mode, AppMode::Normal);

        app.update(Action::ClearDocument);
        assert!(app.document.is_some());
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));
    }

    #[test]
    fn test_option_toggles() {
        let mut app = app();
        assert_eq!(app.options.target_language, TargetLanguage::Curl);

        app.update(Action::CycleLanguage);
        assert_eq!(app.options.target_language, TargetLanguage::Go);

        assert!(app.options.include_negative);
        app.update(Action::ToggleNegative);
        assert!(!app.options.include_negative);

        assert!(!app.options.include_boundary);
        app.update(Action::ToggleBoundary);
        assert!(app.options.include_boundary);
    }

    #[test]
    fn test_remote_settings_partial_overlay() {
        let mut app = app();
        app.options.connection.model_name = "local-model".to_owned();

        app.settings_loaded(Ok(RemoteSettings {
            base_url: Some("https://api.example.test".to_owned()),
            api_key: None,
            model_name: None,
            language: Some("go".to_owned()),
        }));

        assert_eq!(app.options.connection.base_url, "https://api.example.test");
        assert_eq!(app.options.connection.model_name, "local-model");
        assert_eq!(app.options.target_language, TargetLanguage::Go);
    }

    #[test]
    fn test_remote_settings_unknown_language_ignored() {
        let mut app = app();
        app.settings_loaded(Ok(RemoteSettings {
            base_url: None,
            api_key: None,
            model_name: None,
            language: Some("python".to_owned()),
        }));

        assert_eq!(app.options.target_language, TargetLanguage::Curl);
    }

    #[test]
    fn test_settings_fetch_failure_keeps_defaults() {
        let mut app = app();
        app.settings_loaded(Err(ClientError::rejected(None)));

        assert_eq!(app.options, App::new(Config::default()).options);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_settings_save_applies_locally_first() {
        let mut app = app();
        app.update(Action::OpenSettings);
        app.settings_form.base_url_input = " https://api.example.test ".to_owned();
        app.settings_form.model_name_input = "gpt-test".to_owned();
        app.update(Action::SaveSettings);

        assert_eq!(app.options.connection.base_url, "https://api.example.test");
        assert_eq!(app.options.connection.model_name, "gpt-test");

        let snapshot = app.take_pending_settings_save().unwrap();
        assert_eq!(snapshot.base_url, "https://api.example.test");
    }

    #[test]
    fn test_settings_save_failure_returns_to_form() {
        let mut app = app();
        app.update(Action::OpenSettings);
        app.update(Action::SaveSettings);
        app.settings_saved(Err(ClientError::rejected(None)));

        assert_eq!(app.mode, AppMode::Alert);
        app.update(Action::DismissAlert);
        assert_eq!(app.mode, AppMode::Settings);
    }

    #[test]
    fn test_settings_save_success_closes_form() {
        let mut app = app();
        app.update(Action::OpenSettings);
        app.update(Action::SaveSettings);
        app.settings_saved(Ok(()));

        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_code_scroll_when_code_pane_focused() {
        let mut app = app_with_document();
        app.update(Action::Generate);
        app.finish_generation(Ok(sample_result()));
        app.update(Action::ToggleFocus);

        let action = app.handle_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
        assert_eq!(action, Action::ScrollCodeDown);

        app.update(action);
        assert_eq!(app.code_pane_state.scroll_offset, 1);
    }

    #[test]
    fn test_ctrl_c_quits_in_any_mode() {
        let mut app = app();
        app.update(Action::OpenSettings);

        let action = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(action, Action::Quit);
    }
}
