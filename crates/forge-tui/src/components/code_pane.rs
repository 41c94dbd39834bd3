//! Code pane component.
//!
//! Displays the selected test case's details and its generated code,
//! falling back to the first case with code when the selection has none.

use forge_core::TestCase;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget,
    Widget,
};

use crate::app::CodePaneState;
use crate::theme::Theme;

/// A stateful code pane widget.
///
/// Displays for the selected case:
/// - Name, endpoint, method, and expected status
/// - Data requirements, when the service provided them
/// - The generated code snippet (or a "no code" placeholder)
///
/// Uses [`StatefulWidget`] to maintain scroll state.
pub struct CodePane<'a> {
    /// The selected test case (if any).
    case: Option<&'a TestCase>,
    /// The resolved code snippet to display (if any).
    code: Option<&'a str>,
    /// Whether this widget has focus.
    focused: bool,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> CodePane<'a> {
    /// Creates a new code pane.
    #[must_use]
    pub const fn new(
        case: Option<&'a TestCase>,
        code: Option<&'a str>,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            case,
            code,
            focused,
            theme,
        }
    }

    /// Renders the "no selection" placeholder.
    fn render_placeholder(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style)
            .title(Span::styled(" Code ", self.theme.header_style));

        let text = Text::from(vec![
            Line::from(""),
            Line::from(Span::styled("No test case selected", self.theme.dimmed_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Select a case from the test plan",
                self.theme.dimmed_style(),
            )),
            Line::from(Span::styled(
                "to view its generated code.",
                self.theme.dimmed_style(),
            )),
        ]);

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);

        paragraph.render(area, buf);
    }

    /// Builds the case detail header lines.
    fn build_header(&self, case: &TestCase) -> Vec<Line<'a>> {
        let label_style = Style::default().fg(Color::DarkGray);
        let mut lines = Vec::new();

        lines.push(Line::from(vec![
            Span::styled("Case: ", label_style),
            Span::styled(
                case.name.clone(),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(case.kind.label(), self.theme.kind_style(case.kind)),
        ]));

        if !case.endpoint.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Endpoint: ", label_style),
                Span::styled(case.method.clone(), self.theme.method_style(&case.method)),
                Span::raw(" "),
                Span::styled(case.endpoint.clone(), self.theme.base_style()),
            ]));
        }

        if case.expected_status != 0 {
            lines.push(Line::from(vec![
                Span::styled("Expects: ", label_style),
                Span::styled(
                    format!("HTTP {}", case.expected_status),
                    self.theme.base_style(),
                ),
            ]));
        }

        if let Some(ref requirements) = case.data_requirements {
            lines.push(Line::from(vec![
                Span::styled("Data: ", label_style),
                Span::styled(requirements.clone(), self.theme.base_style()),
            ]));
        }

        if !case.description.is_empty() {
            lines.push(Line::from(Span::styled(
                case.description.clone(),
                self.theme.dimmed_style(),
            )));
        }

        lines
    }

    /// Renders the case details and code.
    fn render_details(
        &self,
        case: &TestCase,
        area: Rect,
        buf: &mut Buffer,
        state: &mut CodePaneState,
    ) {
        let border_style = if self.focused {
            self.theme.focused_border_style
        } else {
            self.theme.border_style
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(" Code ", self.theme.header_style));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = self.build_header(case);

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "─── Generated Code ───",
            Style::default().fg(Color::DarkGray),
        )));

        match self.code {
            Some(code) => {
                for code_line in code.lines() {
                    lines.push(Line::from(Span::styled(
                        code_line.to_owned(),
                        self.theme.base_style(),
                    )));
                }
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "No code generated for this plan.",
                    self.theme.dimmed_style(),
                )));
            }
        }

        let total_lines = lines.len();

        // Clamp scroll offset
        let max_scroll = total_lines.saturating_sub(inner.height as usize);
        if state.scroll_offset > max_scroll {
            state.scroll_offset = max_scroll;
        }

        // Terminal scroll offset is bounded by terminal height, which is always < 65535
        #[allow(clippy::cast_possible_truncation)]
        let scroll_offset = state.scroll_offset as u16;

        let paragraph = Paragraph::new(Text::from(lines)).scroll((scroll_offset, 0));
        paragraph.render(inner, buf);

        // Render scrollbar if content overflows
        if total_lines > inner.height as usize {
            let scrollbar = Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            let mut scrollbar_state = ScrollbarState::new(total_lines)
                .position(state.scroll_offset)
                .viewport_content_length(inner.height as usize);

            scrollbar.render(
                inner.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                buf,
                &mut scrollbar_state,
            );
        }
    }
}

impl StatefulWidget for &CodePane<'_> {
    type State = CodePaneState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        match self.case {
            Some(case) => self.render_details(case, area, buf, state),
            None => self.render_placeholder(area, buf),
        }
    }
}
