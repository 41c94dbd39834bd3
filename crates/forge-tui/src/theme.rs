//! Theme and styling for the TUI.
//!
//! This module provides the [`Theme`] struct for managing colors and styles
//! throughout the terminal interface. It supports both dark and light color
//! schemes.
//!
//! # Example
//!
//! ```
//! use forge_tui::Theme;
//! use forge_core::CaseKind;
//!
//! let theme = Theme::dark();
//! let style = theme.kind_style(CaseKind::Negative);
//! ```

use forge_core::{CaseKind, ColorScheme};
use ratatui::style::{Color, Modifier, Style};

use crate::app::GenerationPhase;

/// Theme configuration for the TUI.
///
/// Contains all colors and styles used throughout the interface.
/// Use [`Theme::dark()`] or [`Theme::light()`] to get predefined themes,
/// or [`Theme::from_scheme()`] to create a theme based on configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // =========================================================================
    // Case Kind Colors
    // =========================================================================
    /// Foreground color for positive test cases.
    pub positive_fg: Color,

    /// Foreground color for negative test cases.
    pub negative_fg: Color,

    /// Foreground color for boundary test cases.
    pub boundary_fg: Color,

    /// Foreground color for unrecognized test case kinds.
    pub unknown_fg: Color,

    // =========================================================================
    // Phase Colors
    // =========================================================================
    /// Foreground color for an in-flight request.
    pub in_flight_fg: Color,

    /// Foreground color for a completed request.
    pub completed_fg: Color,

    /// Foreground color for a failed request.
    pub failed_fg: Color,

    // =========================================================================
    // Selection Colors
    // =========================================================================
    /// Background color for selected items.
    pub selected_bg: Color,

    /// Foreground color for selected items.
    pub selected_fg: Color,

    // =========================================================================
    // Base Colors
    // =========================================================================
    /// Primary foreground color.
    pub fg: Color,

    /// Primary background color.
    pub bg: Color,

    /// Dimmed/secondary text color.
    pub dimmed_fg: Color,

    /// Accent color for highlights.
    pub accent: Color,

    /// Error/warning color.
    pub error_fg: Color,

    // =========================================================================
    // Border Styles
    // =========================================================================
    /// Style for normal borders.
    pub border_style: Style,

    /// Style for focused borders.
    pub focused_border_style: Style,

    // =========================================================================
    // Component Styles
    // =========================================================================
    /// Style for highlighted/selected items.
    pub highlight_style: Style,

    /// Style for the header bar.
    pub header_style: Style,

    /// Style for the status bar.
    pub status_bar_style: Style,
}

impl Theme {
    /// Creates a dark theme (light text on dark background).
    ///
    /// This is the default theme, optimized for dark terminal backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            // Case kind colors
            positive_fg: Color::Rgb(100, 255, 100), // Soft green
            negative_fg: Color::Rgb(255, 100, 100), // Soft red
            boundary_fg: Color::Rgb(255, 200, 100), // Soft yellow/orange
            unknown_fg: Color::Rgb(128, 128, 128),  // Gray

            // Phase colors
            in_flight_fg: Color::Rgb(255, 200, 100),
            completed_fg: Color::Rgb(100, 255, 100),
            failed_fg: Color::Rgb(255, 80, 80),

            // Selection colors
            selected_bg: Color::Rgb(60, 60, 80),
            selected_fg: Color::White,

            // Base colors
            fg: Color::Rgb(220, 220, 220),
            bg: Color::Reset,
            dimmed_fg: Color::Rgb(128, 128, 128),
            accent: Color::Rgb(100, 150, 255), // Soft blue
            error_fg: Color::Rgb(255, 80, 80),

            // Border styles
            border_style: Style::default().fg(Color::Rgb(80, 80, 100)),
            focused_border_style: Style::default().fg(Color::Rgb(100, 150, 255)),

            // Component styles
            highlight_style: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(60, 60, 80))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(100, 150, 255))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(180, 180, 180))
                .bg(Color::Rgb(40, 40, 50)),
        }
    }

    /// Creates a light theme (dark text on light background).
    ///
    /// Optimized for light terminal backgrounds.
    #[must_use]
    pub fn light() -> Self {
        Self {
            // Case kind colors
            positive_fg: Color::Rgb(50, 150, 50), // Dark green
            negative_fg: Color::Rgb(180, 50, 50), // Dark red
            boundary_fg: Color::Rgb(180, 130, 50), // Dark yellow/orange
            unknown_fg: Color::Rgb(100, 100, 100), // Dark gray

            // Phase colors
            in_flight_fg: Color::Rgb(180, 130, 50),
            completed_fg: Color::Rgb(50, 150, 50),
            failed_fg: Color::Rgb(180, 50, 50),

            // Selection colors
            selected_bg: Color::Rgb(200, 200, 220),
            selected_fg: Color::Black,

            // Base colors
            fg: Color::Rgb(30, 30, 30),
            bg: Color::Reset,
            dimmed_fg: Color::Rgb(100, 100, 100),
            accent: Color::Rgb(50, 100, 200), // Dark blue
            error_fg: Color::Rgb(180, 50, 50),

            // Border styles
            border_style: Style::default().fg(Color::Rgb(150, 150, 170)),
            focused_border_style: Style::default().fg(Color::Rgb(50, 100, 200)),

            // Component styles
            highlight_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(200, 200, 220))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(50, 100, 200))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(60, 60, 60))
                .bg(Color::Rgb(220, 220, 230)),
        }
    }

    /// Creates a theme from a [`ColorScheme`] configuration.
    ///
    /// If the scheme is [`ColorScheme::Auto`], defaults to dark theme.
    #[must_use]
    pub fn from_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark | ColorScheme::Auto | _ => Self::dark(),
        }
    }

    /// Returns the style for a given test case kind.
    #[must_use]
    pub fn kind_style(&self, kind: CaseKind) -> Style {
        let color = self.kind_color(kind);
        Style::default().fg(color)
    }

    /// Returns the color for a given test case kind.
    #[must_use]
    pub const fn kind_color(&self, kind: CaseKind) -> Color {
        match kind {
            CaseKind::Positive => self.positive_fg,
            CaseKind::Negative => self.negative_fg,
            CaseKind::Boundary => self.boundary_fg,
            CaseKind::Unknown | _ => self.unknown_fg,
        }
    }

    /// Returns the indicator string for a test case kind.
    #[must_use]
    pub const fn kind_indicator(kind: CaseKind) -> &'static str {
        match kind {
            CaseKind::Positive => "[+]",
            CaseKind::Negative => "[-]",
            CaseKind::Boundary => "[~]",
            CaseKind::Unknown | _ => "[?]",
        }
    }

    /// Returns the style for a generation phase indicator.
    #[must_use]
    pub fn phase_style(&self, phase: GenerationPhase) -> Style {
        match phase {
            GenerationPhase::Idle => Style::default().fg(self.dimmed_fg),
            GenerationPhase::InFlight => Style::default()
                .fg(self.in_flight_fg)
                .add_modifier(Modifier::BOLD),
            GenerationPhase::Completed => Style::default().fg(self.completed_fg),
            GenerationPhase::Failed => Style::default()
                .fg(self.failed_fg)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Returns the style for an HTTP method label.
    #[must_use]
    pub fn method_style(&self, method: &str) -> Style {
        let color = match method {
            "GET" => self.accent,
            "POST" => self.positive_fg,
            "PUT" | "PATCH" => self.boundary_fg,
            "DELETE" => self.negative_fg,
            _ => self.dimmed_fg,
        };
        Style::default().fg(color)
    }

    /// Returns a style with the base foreground color.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Returns a style for dimmed/secondary text.
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed_fg)
    }

    /// Returns a style for accent/highlighted text.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Returns a style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error_fg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.fg, Color::Rgb(220, 220, 220));
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.fg, Color::Rgb(30, 30, 30));
    }

    #[test]
    fn test_theme_from_scheme() {
        let dark = Theme::from_scheme(ColorScheme::Dark);
        let light = Theme::from_scheme(ColorScheme::Light);
        let auto = Theme::from_scheme(ColorScheme::Auto);

        assert_eq!(dark, Theme::dark());
        assert_eq!(light, Theme::light());
        assert_eq!(auto, Theme::dark()); // Auto defaults to dark
    }

    #[test]
    fn test_kind_color() {
        let theme = Theme::dark();

        assert_eq!(theme.kind_color(CaseKind::Positive), theme.positive_fg);
        assert_eq!(theme.kind_color(CaseKind::Negative), theme.negative_fg);
        assert_eq!(theme.kind_color(CaseKind::Boundary), theme.boundary_fg);
        assert_eq!(theme.kind_color(CaseKind::Unknown), theme.unknown_fg);
    }

    #[test]
    fn test_kind_indicator() {
        assert_eq!(Theme::kind_indicator(CaseKind::Positive), "[+]");
        assert_eq!(Theme::kind_indicator(CaseKind::Negative), "[-]");
        assert_eq!(Theme::kind_indicator(CaseKind::Boundary), "[~]");
        assert_eq!(Theme::kind_indicator(CaseKind::Unknown), "[?]");
    }

    #[test]
    fn test_phase_style_varies() {
        let theme = Theme::dark();
        assert_ne!(
            theme.phase_style(GenerationPhase::Idle),
            theme.phase_style(GenerationPhase::Failed)
        );
    }

    #[test]
    fn test_theme_default() {
        assert_eq!(Theme::default(), Theme::dark());
    }
}
