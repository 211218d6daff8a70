//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One-line status bar with left- and right-aligned sections.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    left: String,
    right: String,
    accent: Color,
}

impl StatusBar {
    /// Creates an empty status bar.
    #[must_use]
    pub fn new(accent: Color) -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            accent,
        }
    }

    /// Sets left content.
    #[must_use]
    pub fn left(mut self, content: impl Into<String>) -> Self {
        self.left = content.into();
        self
    }

    /// Sets right content.
    #[must_use]
    pub fn right(mut self, content: impl Into<String>) -> Self {
        self.right = content.into();
        self
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let left_style = Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD);
        let right_style = Style::default().fg(Color::DarkGray);

        let width = area.width as usize;
        let padding = width
            .saturating_sub(self.left.chars().count())
            .saturating_sub(self.right.chars().count());

        let line = Line::from(vec![
            Span::styled(&self.left, left_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(&self.right, right_style),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
