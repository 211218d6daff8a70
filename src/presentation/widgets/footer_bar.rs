//! Footer bar with key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One-line footer listing the active keybindings.
pub struct FooterBar<'a> {
    hints: &'a [(&'a str, &'a str)],
    accent: Color,
}

impl<'a> FooterBar<'a> {
    /// Creates a footer from `(key, action)` pairs.
    #[must_use]
    pub const fn new(hints: &'a [(&'a str, &'a str)], accent: Color) -> Self {
        Self { hints, accent }
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let key_style = Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        for (i, (key, label)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ·  ", label_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {label}"), label_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
