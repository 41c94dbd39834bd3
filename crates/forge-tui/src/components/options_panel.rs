//! Generation options panel component.
//!
//! Displays the current document, target language, tier, case-kind
//! flags, and connection summary, together with the keys that edit them.

use forge_core::{Document, GenerationOptions};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;

/// The options panel component.
pub struct OptionsPanel<'a> {
    /// The loaded document (if any).
    document: Option<&'a Document>,
    /// Current generation options.
    options: &'a GenerationOptions,
    /// Service endpoint, for display only.
    service_url: &'a str,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> OptionsPanel<'a> {
    /// Creates a new options panel.
    #[must_use]
    pub const fn new(
        document: Option<&'a Document>,
        options: &'a GenerationOptions,
        service_url: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            document,
            options,
            service_url,
            theme,
        }
    }

    fn build_lines(&self) -> Vec<Line<'a>> {
        let label_style = Style::default().fg(Color::DarkGray);
        let key_style = Style::default().fg(Color::Yellow);

        let mut lines = Vec::new();

        // Document
        lines.push(Line::from(vec![
            Span::styled("Document ", label_style),
            Span::styled("(o)", key_style),
        ]));
        match self.document {
            Some(doc) => lines.push(Line::from(Span::styled(
                format!("  {}", doc.name),
                self.theme.accent_style().add_modifier(Modifier::BOLD),
            ))),
            None => lines.push(Line::from(Span::styled(
                "  <none loaded>",
                self.theme.dimmed_style(),
            ))),
        }
        lines.push(Line::from(""));

        // Language
        lines.push(Line::from(vec![
            Span::styled("Language ", label_style),
            Span::styled("(l)", key_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", self.options.target_language.label()),
            self.theme.base_style(),
        )));
        lines.push(Line::from(""));

        // Tier
        lines.push(Line::from(vec![
            Span::styled("Mode ", label_style),
            Span::styled("(t)", key_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", self.options.tier.label()),
            self.theme.base_style(),
        )));
        lines.push(Line::from(""));

        // Case kind flags
        lines.push(Line::from(Span::styled("Include", label_style)));
        lines.push(flag_line(
            "negative (n)",
            self.options.include_negative,
            self.theme,
        ));
        lines.push(flag_line(
            "boundary (b)",
            self.options.include_boundary,
            self.theme,
        ));
        lines.push(Line::from(""));

        // Connection summary
        lines.push(Line::from(vec![
            Span::styled("Connection ", label_style),
            Span::styled("(s)", key_style),
        ]));
        lines.push(connection_line(
            "url",
            &self.options.connection.base_url,
            false,
            self.theme,
        ));
        lines.push(connection_line(
            "key",
            &self.options.connection.api_key,
            true,
            self.theme,
        ));
        lines.push(connection_line(
            "model",
            &self.options.connection.model_name,
            false,
            self.theme,
        ));
        lines.push(Line::from(""));

        // Service endpoint
        lines.push(Line::from(Span::styled("Service", label_style)));
        lines.push(Line::from(Span::styled(
            format!("  {}", self.service_url),
            self.theme.dimmed_style(),
        )));
        lines.push(Line::from(""));

        lines.push(Line::from(vec![
            Span::styled("Generate ", label_style),
            Span::styled("(r)", key_style),
        ]));

        lines
    }
}

impl Widget for &OptionsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style)
            .title(Span::styled(" Options ", self.theme.header_style));

        let paragraph = Paragraph::new(self.build_lines()).block(block);
        paragraph.render(area, buf);
    }
}

fn flag_line<'a>(label: &'a str, enabled: bool, theme: &Theme) -> Line<'a> {
    let (mark, style) = if enabled {
        ("[x]", Style::default().fg(theme.positive_fg))
    } else {
        ("[ ]", theme.dimmed_style())
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(mark, style),
        Span::raw(" "),
        Span::styled(label, theme.base_style()),
    ])
}

fn connection_line<'a>(label: &'a str, value: &str, mask: bool, theme: &Theme) -> Line<'a> {
    let display = if value.is_empty() {
        "<default>".to_owned()
    } else if mask {
        mask_secret(value)
    } else {
        value.to_owned()
    };
    let style = if value.is_empty() {
        theme.dimmed_style()
    } else {
        theme.base_style()
    };
    Line::from(vec![
        Span::styled(format!("  {label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(display, style),
    ])
}

/// Masks a credential for display, keeping only a short prefix.
fn mask_secret(value: &str) -> String {
    let prefix: String = value.chars().take(4).collect();
    format!("{prefix}****")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("sk-abcdef123456"), "sk-a****");
        assert_eq!(mask_secret("ab"), "ab****");
    }

    #[test]
    fn test_options_panel_lines() {
        let theme = Theme::dark();
        let options = GenerationOptions::default();
        let panel = OptionsPanel::new(None, &options, "http://localhost:8000/api/v1", &theme);
        let lines = panel.build_lines();
        assert!(!lines.is_empty());
    }
}
