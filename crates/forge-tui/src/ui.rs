//! Main UI layout and rendering orchestration.
//!
//! This module provides the main [`render`] function that orchestrates
//! rendering of all UI components based on the current application state.
//!
//! # Layout Structure
//!
//! ```text
//! +------------------------------------------------------------------+
//! | Header: apiforge | petstore.yaml | Completed | ? for help        |
//! +------------------------------------------------------------------+
//! |  Options        |  Test Plan            |  Code                  |
//! |  --------       |  -------------------  |  --------------------  |
//! |  Document       |  > [+] GET  list pets |  Case: list pets       |
//! |  Language       |    [-] POST bad pet   |  Endpoint: GET /pets   |
//! |  ...            |    ...                |  curl -X GET ...       |
//! +------------------------------------------------------------------+
//! | Status: NORMAL | Generated 12 test cases | cURL · Deep | 1/12    |
//! +------------------------------------------------------------------+
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{App, AppMode, Focus};
use crate::components::{
    AlertView, CaseListView, CodePane, HeaderBar, HelpPanel, OptionsPanel, PathPrompt,
    SettingsView, StatusBar,
};
use crate::theme::Theme;

/// Renders the entire UI based on the current application state.
pub fn render(app: &App, frame: &mut Frame, theme: &Theme) {
    let area = frame.area();

    // Main vertical layout:
    // - Header (3 lines)
    // - Main Content (flexible)
    // - Status Bar (1 line)
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Render header
    let header = HeaderBar::new(app.document.as_ref(), app.phase, theme);
    frame.render_widget(&header, main_chunks[0]);

    // Render main content (options + case list + code pane)
    render_main_content(app, frame, main_chunks[1], theme);

    // Render status bar
    let status_bar = StatusBar::new(app, theme);
    frame.render_widget(&status_bar, main_chunks[2]);

    // Render overlays by mode
    match app.mode {
        AppMode::DocumentPrompt => {
            let prompt = PathPrompt::new(&app.path_input, theme);
            frame.render_widget(&prompt, centered_rect(60, 15, area));
        }
        AppMode::Settings => {
            let settings = SettingsView::new(&app.settings_form, theme);
            frame.render_widget(&settings, centered_rect(60, 30, area));
        }
        AppMode::Help => {
            let help_panel = HelpPanel::new(theme);
            frame.render_widget(&help_panel, centered_rect(60, 70, area));
        }
        AppMode::Alert => {
            if let Some(ref message) = app.alert {
                let alert = AlertView::new(message, theme);
                frame.render_widget(&alert, centered_rect(50, 30, area));
            }
        }
        AppMode::Normal => {}
    }
}

/// Renders the main content area (options panel, case list, code pane).
fn render_main_content(app: &App, frame: &mut Frame, area: Rect, theme: &Theme) {
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(34),     // Options panel
            Constraint::Percentage(38), // Case list
            Constraint::Min(30),        // Code pane
        ])
        .split(area);

    let options_panel = OptionsPanel::new(
        app.document.as_ref(),
        &app.options,
        &app.config.service.base_url,
        theme,
    );
    frame.render_widget(&options_panel, content_chunks[0]);

    let case_list = CaseListView::new(
        app.result.as_ref(),
        app.phase,
        app.focus == Focus::CaseList,
        theme,
    );
    frame.render_stateful_widget(
        &case_list,
        content_chunks[1],
        &mut app.case_list_state.clone(),
    );

    let code_pane = CodePane::new(
        app.selected_case(),
        app.resolved_code(),
        app.focus == Focus::CodePane,
        theme,
    );
    frame.render_stateful_widget(
        &code_pane,
        content_chunks[2],
        &mut app.code_pane_state.clone(),
    );
}

/// Creates a centered rectangle with the given percentage width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 100);
        let centered = centered_rect(50, 50, area);

        // Should be roughly centered
        assert!(centered.x > 0);
        assert!(centered.y > 0);
        assert!(centered.width < area.width);
        assert!(centered.height < area.height);
    }
}
