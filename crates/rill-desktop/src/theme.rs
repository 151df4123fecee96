//! Visual constants for the desktop app

/// Colors shared across screens, lifted from the controller's web UI.
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)] // All colors defined for completeness, not all used yet
pub struct ColorPalette {
    /// Primary accent, used for active controls and highlights
    pub accent: &'static str,
    /// Softer companion accent, used for borders and inactive marks
    pub accent_soft: &'static str,
    /// Default body text
    pub text_primary: &'static str,
    /// Secondary text such as slide descriptions
    pub text_muted: &'static str,
    /// Error text and load-failure borders
    pub error: &'static str,
}

/// The single light palette. The controller UI has no dark mode.
pub const PALETTE: ColorPalette = ColorPalette {
    accent: "#84a7b8",
    accent_soft: "#aec1ca",
    text_primary: "#333333",
    text_muted: "#777777",
    error: "#b3452e",
};
