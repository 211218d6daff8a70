//! Color theme.

use ratatui::style::Color;
use tracing::warn;

use crate::infrastructure::AppConfig;

/// Resolved presentation theme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent color for highlights and selection.
    pub accent: Color,
    /// Render with plain ASCII instead of unicode block glyphs.
    pub ascii: bool,
}

impl Theme {
    /// Resolves the theme from configuration. An unparseable accent color
    /// falls back to the default with a warning.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let accent = parse_color(&config.theme.accent_color).unwrap_or_else(|| {
            warn!(
                value = %config.theme.accent_color,
                "Unrecognized accent color, falling back to cyan"
            );
            Color::Cyan
        });
        Self {
            accent,
            ascii: config.ui.ascii,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            ascii: false,
        }
    }
}

/// Parses a color name or `#rrggbb` hex code.
#[must_use]
pub fn parse_color(value: &str) -> Option<Color> {
    let trimmed = value.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "white" => Some(Color::White),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        _ => None,
    }
}
