//! Document path prompt component.
//!
//! Displays a text input overlay for entering the path of a
//! specification document to load.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::theme::Theme;

/// A document path prompt overlay widget.
///
/// Displays a centered text input for entering a file path.
/// This is typically shown as a modal overlay when the prompt is open.
pub struct PathPrompt<'a> {
    /// The current path text.
    text: &'a str,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> PathPrompt<'a> {
    /// Creates a new path prompt widget.
    #[must_use]
    pub const fn new(text: &'a str, theme: &'a Theme) -> Self {
        Self { text, theme }
    }
}

impl Widget for &PathPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first for overlay effect
        Clear.render(area, buf);

        // Build the input content with cursor
        let input_content = if self.text.is_empty() {
            Line::from(vec![
                Span::styled(
                    "path/to/openapi.yaml",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
                Span::styled("▌", Style::default().fg(self.theme.accent)),
            ])
        } else {
            Line::from(vec![
                Span::styled(self.text, self.theme.base_style()),
                Span::styled("▌", Style::default().fg(self.theme.accent)),
            ])
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(
                " Open Document (.json/.yaml/.yml, Esc to cancel) ",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(Color::Rgb(30, 30, 40)));

        let paragraph = Paragraph::new(input_content)
            .block(block)
            .alignment(ratatui::layout::Alignment::Left);

        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_prompt_new() {
        let theme = Theme::dark();
        let prompt = PathPrompt::new("api.yaml", &theme);
        assert_eq!(prompt.text, "api.yaml");
    }

    #[test]
    fn test_path_prompt_empty() {
        let theme = Theme::dark();
        let prompt = PathPrompt::new("", &theme);
        assert!(prompt.text.is_empty());
    }
}
