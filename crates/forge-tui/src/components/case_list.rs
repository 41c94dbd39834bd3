//! Test case list component.
//!
//! Displays a scrollable, selectable list of planned test cases with
//! their kind and HTTP method.

use forge_core::{GenerationResult, TestCase};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Block, Borders, Cell, HighlightSpacing, Paragraph, Row, StatefulWidget, Table, TableState,
    Widget,
};

use unicode_width::UnicodeWidthStr;

use crate::app::{CaseListState, GenerationPhase};
use crate::theme::Theme;

/// A stateful test case list widget.
///
/// Displays the test plan in a table with:
/// - Kind indicator
/// - HTTP method
/// - Case name (truncated if needed)
/// - Marker for cases that have generated code
///
/// Uses [`StatefulWidget`] to maintain scroll and selection state.
pub struct CaseListView<'a> {
    /// The generation result to display (if any).
    result: Option<&'a GenerationResult>,
    /// Current generation phase, for the placeholder text.
    phase: GenerationPhase,
    /// Whether this widget has focus.
    focused: bool,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> CaseListView<'a> {
    /// Creates a new case list view.
    #[must_use]
    pub const fn new(
        result: Option<&'a GenerationResult>,
        phase: GenerationPhase,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            result,
            phase,
            focused,
            theme,
        }
    }

    /// Builds a single table row for a test case.
    fn build_row(&self, result: &GenerationResult, case: &TestCase) -> Row<'a> {
        let kind_indicator = Theme::kind_indicator(case.kind);
        let kind_style = self.theme.kind_style(case.kind);

        let has_code = result.generated_code.contains_key(&case.id);
        let code_marker = if has_code { "●" } else { " " };

        let name_display = truncate_name(&case.name, 48);

        let cells = vec![
            Cell::from(Span::styled(kind_indicator, kind_style)),
            Cell::from(Span::styled(
                case.method.clone(),
                self.theme.method_style(&case.method),
            )),
            Cell::from(Span::styled(name_display, self.theme.base_style())),
            Cell::from(Span::styled(code_marker, self.theme.accent_style())),
        ];

        Row::new(cells).height(1)
    }

    /// Renders the placeholder shown before any plan exists.
    fn render_placeholder(&self, area: Rect, buf: &mut Buffer, block: Block<'_>) {
        let message = match self.phase {
            GenerationPhase::InFlight => "Generating...",
            GenerationPhase::Failed => "Generation failed",
            GenerationPhase::Idle | GenerationPhase::Completed => "No test plan yet",
        };
        let hint = match self.phase {
            GenerationPhase::InFlight => "Waiting for the service to respond.",
            _ => "Load a document and press 'r' to generate.",
        };

        let text = Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(message, self.theme.dimmed_style())),
            Line::from(""),
            Line::from(Span::styled(hint, self.theme.dimmed_style())),
        ]);

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center);
        paragraph.render(area, buf);
    }
}

impl StatefulWidget for &CaseListView<'_> {
    type State = CaseListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // Update visible height for scroll clamping
        let inner_height = area.height.saturating_sub(2); // Account for borders
        state.visible_height = inner_height as usize;

        let border_style = if self.focused {
            self.theme.focused_border_style
        } else {
            self.theme.border_style
        };

        let count = self.result.map_or(0, |r| r.test_plan.len());
        let title = format!(" Test Plan ({count}) ");

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(title, self.theme.header_style));

        let Some(result) = self.result.filter(|r| !r.test_plan.is_empty()) else {
            self.render_placeholder(area, buf, block);
            return;
        };

        let rows: Vec<Row<'_>> = result
            .test_plan
            .iter()
            .map(|case| self.build_row(result, case))
            .collect();

        let widths = [
            Constraint::Length(4),  // Kind indicator
            Constraint::Length(7),  // Method
            Constraint::Min(20),    // Name
            Constraint::Length(2),  // Code marker
        ];

        let table = Table::new(rows, widths)
            .block(block)
            .row_highlight_style(self.theme.highlight_style)
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_symbol("▸ ");

        // Convert CaseListState to TableState for rendering
        let mut table_state = TableState::default();
        table_state.select(state.selected);
        *table_state.offset_mut() = state.scroll_offset;

        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}

/// Truncates a case name to fit within the given display width.
fn truncate_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_owned();
    }

    let budget = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut width = 0;
    for ch in name.chars() {
        let char_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + char_width > budget {
            break;
        }
        width += char_width;
        truncated.push(ch);
    }
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_name_short() {
        assert_eq!(truncate_name("create pet", 20), "create pet");
    }

    #[test]
    fn test_truncate_name_long() {
        let name = "a very long test case name that keeps going and going";
        let truncated = truncate_name(name, 20);
        assert!(truncated.ends_with("..."));
        assert!(truncated.chars().count() <= 20);
    }
}
