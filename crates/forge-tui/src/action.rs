//! User actions for the TUI.
//!
//! This module defines the [`Action`] enum representing all user-initiated
//! actions that can be performed in the TUI. Actions are the result of
//! processing input events (key presses) and are used to update
//! application state.
//!
//! # Action Flow
//!
//! ```text
//! Key Event → App::handle_key → Action → App::update
//! ```

/// User-initiated actions in the TUI.
///
/// Actions represent commands that modify application state. They are
/// produced from input events and processed by the application's
/// update loop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Action {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Move selection to the next test case.
    NextCase,

    /// Move selection to the previous test case.
    PreviousCase,

    /// Move selection to the first test case.
    FirstCase,

    /// Move selection to the last test case.
    LastCase,

    /// Select a specific test case by index.
    SelectCase(usize),

    /// Scroll the code pane down by one line.
    ScrollCodeDown,

    /// Scroll the code pane up by one line.
    ScrollCodeUp,

    // =========================================================================
    // Focus Management
    // =========================================================================
    /// Toggle focus between the case list and the code pane.
    ToggleFocus,

    /// Focus the case list panel.
    FocusCaseList,

    /// Focus the code pane.
    FocusCodePane,

    // =========================================================================
    // Generation Options
    // =========================================================================
    /// Cycle through target languages (curl → Go → Java → curl).
    CycleLanguage,

    /// Toggle between the deep and fast processing tiers.
    ToggleTier,

    /// Toggle inclusion of boundary test cases.
    ToggleBoundary,

    /// Toggle inclusion of negative test cases.
    ToggleNegative,

    // =========================================================================
    // Document Operations
    // =========================================================================
    /// Open the document path prompt.
    OpenDocumentPrompt,

    /// Close the document path prompt without loading.
    CloseDocumentPrompt,

    /// Accept the entered document path and load it.
    AcceptDocumentPath,

    /// Clear the loaded document.
    ClearDocument,

    // =========================================================================
    // Generation
    // =========================================================================
    /// Submit a generation request for the current document and options.
    Generate,

    // =========================================================================
    // Settings
    // =========================================================================
    /// Open the settings form.
    OpenSettings,

    /// Close the settings form without saving.
    CloseSettings,

    /// Save the settings form.
    SaveSettings,

    // =========================================================================
    // UI State
    // =========================================================================
    /// Toggle the help panel.
    ToggleHelp,

    /// Show the help panel.
    ShowHelp,

    /// Hide the help panel.
    HideHelp,

    /// Dismiss the blocking alert.
    DismissAlert,

    /// Show a status message.
    ShowStatus(String),

    /// Clear the status message.
    ClearStatus,

    // =========================================================================
    // Application Control
    // =========================================================================
    /// Quit the application.
    Quit,

    /// Render the UI.
    Render,

    /// Tick (periodic update).
    Tick,

    /// No operation (used for event handling that doesn't produce an action).
    #[default]
    None,
}

impl Action {
    /// Returns `true` if this action requires a re-render.
    #[must_use]
    pub const fn needs_render(&self) -> bool {
        !matches!(self, Self::None | Self::Tick)
    }

    /// Returns `true` if this is a navigation action.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NextCase
                | Self::PreviousCase
                | Self::FirstCase
                | Self::LastCase
                | Self::SelectCase(_)
                | Self::ScrollCodeDown
                | Self::ScrollCodeUp
        )
    }

    /// Returns `true` if this action edits the generation options.
    #[must_use]
    pub const fn edits_options(&self) -> bool {
        matches!(
            self,
            Self::CycleLanguage | Self::ToggleTier | Self::ToggleBoundary | Self::ToggleNegative
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_needs_render() {
        assert!(Action::NextCase.needs_render());
        assert!(Action::ToggleHelp.needs_render());
        assert!(!Action::None.needs_render());
        assert!(!Action::Tick.needs_render());
    }

    #[test]
    fn test_action_is_navigation() {
        assert!(Action::NextCase.is_navigation());
        assert!(Action::PreviousCase.is_navigation());
        assert!(Action::FirstCase.is_navigation());
        assert!(Action::SelectCase(5).is_navigation());
        assert!(Action::ScrollCodeDown.is_navigation());

        assert!(!Action::Quit.is_navigation());
        assert!(!Action::Generate.is_navigation());
    }

    #[test]
    fn test_action_edits_options() {
        assert!(Action::CycleLanguage.edits_options());
        assert!(Action::ToggleTier.edits_options());
        assert!(Action::ToggleBoundary.edits_options());
        assert!(Action::ToggleNegative.edits_options());

        assert!(!Action::Generate.edits_options());
        assert!(!Action::NextCase.edits_options());
    }

    #[test]
    fn test_action_default() {
        assert_eq!(Action::default(), Action::None);
    }
}
