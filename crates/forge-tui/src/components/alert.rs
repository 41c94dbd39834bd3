//! Alert component.
//!
//! Displays a blocking modal with an error message that must be
//! dismissed before any other interaction.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

use crate::theme::Theme;

/// A blocking alert overlay widget.
pub struct AlertView<'a> {
    /// The alert message.
    message: &'a str,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> AlertView<'a> {
    /// Creates a new alert view.
    #[must_use]
    pub const fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for &AlertView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.error_style())
            .title(Span::styled(
                " Error ",
                Style::default()
                    .fg(self.theme.error_fg)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(Color::Rgb(40, 25, 25)));

        let text = Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(self.message, self.theme.base_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter or Esc to dismiss",
                self.theme.dimmed_style(),
            )),
        ]);

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_view_new() {
        let theme = Theme::dark();
        let alert = AlertView::new("generation failed: invalid spec", &theme);
        assert_eq!(alert.message, "generation failed: invalid spec");
    }
}
