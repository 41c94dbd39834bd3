//! Settings form component.
//!
//! Displays a modal overlay for editing the LLM connection settings.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::app::{SettingsField, SettingsForm};
use crate::theme::Theme;

/// Settings form overlay widget.
pub struct SettingsView<'a> {
    form: &'a SettingsForm,
    theme: &'a Theme,
}

impl<'a> SettingsView<'a> {
    /// Creates a new settings view widget.
    #[must_use]
    pub const fn new(form: &'a SettingsForm, theme: &'a Theme) -> Self {
        Self { form, theme }
    }
}

impl Widget for &SettingsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(
                " Settings (Tab to switch, Enter to save, Esc to cancel) ",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(Color::Rgb(30, 30, 40)));

        let base_url = build_field_line(
            "Base URL",
            &self.form.base_url_input,
            false,
            self.form.active_field == SettingsField::BaseUrl,
            self.theme,
        );
        let api_key = build_field_line(
            "API key",
            &self.form.api_key_input,
            true,
            self.form.active_field == SettingsField::ApiKey,
            self.theme,
        );
        let model_name = build_field_line(
            "Model",
            &self.form.model_name_input,
            false,
            self.form.active_field == SettingsField::ModelName,
            self.theme,
        );

        let lines = vec![
            base_url,
            api_key,
            model_name,
            Line::from(""),
            Line::from(Span::styled(
                "Empty fields fall back to the service defaults.",
                self.theme.dimmed_style(),
            )),
        ];
        let paragraph = Paragraph::new(lines).block(block);
        paragraph.render(area, buf);
    }
}

fn build_field_line<'a>(
    label: &'a str,
    value: &'a str,
    mask: bool,
    focused: bool,
    theme: &'a Theme,
) -> Line<'a> {
    let label_style = if focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if focused {
        theme.base_style()
    } else {
        Style::default().fg(Color::Gray)
    };

    // The focused field shows its real value so it can be edited; a
    // masked field only hides while unfocused.
    let display_value = if value.is_empty() {
        "<unset>".to_owned()
    } else if mask && !focused {
        "*".repeat(value.chars().count())
    } else {
        value.to_owned()
    };

    let mut spans = vec![
        Span::styled(format!("{label}: "), label_style),
        Span::styled(display_value, value_style),
    ];

    if focused {
        spans.push(Span::styled("▌", Style::default().fg(theme.accent)));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_view_new() {
        let theme = Theme::dark();
        let form = SettingsForm {
            base_url_input: "https://api.example.test".to_owned(),
            api_key_input: "sk-test".to_owned(),
            model_name_input: "gpt-test".to_owned(),
            active_field: SettingsField::BaseUrl,
        };

        let _view = SettingsView::new(&form, &theme);
    }

    #[test]
    fn test_masked_field_hides_value_when_unfocused() {
        let theme = Theme::dark();
        let line = build_field_line("API key", "secret", true, false, &theme);
        let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("******"));
    }
}
