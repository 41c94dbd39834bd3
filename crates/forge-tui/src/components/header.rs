//! Header bar component.
//!
//! Displays the application title, loaded document, and request phase.

use forge_core::Document;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::app::GenerationPhase;
use crate::theme::Theme;

/// The header bar component.
///
/// Displays:
/// - Application title
/// - Loaded document name
/// - Generation phase
/// - Help indicator
pub struct HeaderBar<'a> {
    /// The loaded document (if any).
    document: Option<&'a Document>,
    /// Current generation phase.
    phase: GenerationPhase,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> HeaderBar<'a> {
    /// Creates a new header bar.
    #[must_use]
    pub const fn new(
        document: Option<&'a Document>,
        phase: GenerationPhase,
        theme: &'a Theme,
    ) -> Self {
        Self {
            document,
            phase,
            theme,
        }
    }
}

impl Widget for &HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let help_style = Style::default().fg(Color::Yellow);

        let document_display = self.document.map_or_else(
            || "<no document>".to_owned(),
            |doc| {
                let count = doc.name.chars().count();
                if count > 40 {
                    let tail: String = doc.name.chars().skip(count - 37).collect();
                    format!("...{tail}")
                } else {
                    doc.name.clone()
                }
            },
        );
        let document_style = if self.document.is_some() {
            Style::default().fg(Color::White)
        } else {
            self.theme.dimmed_style()
        };

        let line = Line::from(vec![
            Span::styled("apiforge", title_style),
            Span::raw(" │ "),
            Span::styled(document_display, document_style),
            Span::raw(" │ "),
            Span::styled(self.phase.label(), self.theme.phase_style(self.phase)),
            Span::raw(" │ "),
            Span::styled("? for help", help_style),
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));

        let paragraph = Paragraph::new(line).block(block);
        paragraph.render(area, buf);
    }
}
