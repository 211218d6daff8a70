//! Horizontal labeled bar panel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// One horizontal bar.
#[derive(Debug, Clone)]
pub struct BarRow {
    /// Category label on the left.
    pub label: String,
    /// Bar length relative to the panel maximum.
    pub value: f64,
    /// Formatted value shown after the bar.
    pub display: String,
}

/// Renders rows as horizontal bars scaled to the largest value.
pub struct BarPanel<'a> {
    rows: &'a [BarRow],
    accent: Color,
    ascii: bool,
}

impl<'a> BarPanel<'a> {
    /// Creates the panel.
    #[must_use]
    pub const fn new(rows: &'a [BarRow], accent: Color, ascii: bool) -> Self {
        Self {
            rows,
            accent,
            ascii,
        }
    }
}

impl Widget for BarPanel<'_> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.rows.is_empty() || area.width < 20 || area.height == 0 {
            return;
        }

        let max = self
            .rows
            .iter()
            .map(|row| row.value)
            .fold(0.0_f64, f64::max);

        let label_width = self
            .rows
            .iter()
            .map(|row| row.label.width())
            .max()
            .unwrap_or(0)
            .min(20);
        let display_width = self
            .rows
            .iter()
            .map(|row| row.display.width())
            .max()
            .unwrap_or(0);

        let bar_space = (area.width as usize)
            .saturating_sub(label_width + display_width + 4)
            .max(1);

        let block = if self.ascii { '#' } else { '█' };
        let bar_style = Style::default().fg(self.accent);

        let mut lines: Vec<Line> = Vec::with_capacity(self.rows.len());
        for row in self.rows {
            let filled = if max > 0.0 {
                ((row.value / max) * bar_space as f64).round() as usize
            } else {
                0
            };
            // Never render a populated row as fully empty.
            let filled = if row.value > 0.0 { filled.max(1) } else { filled };

            // Char-wise truncation; country names are free text and may
            // not be ASCII.
            let label: String = if row.label.width() > label_width {
                row.label.chars().take(label_width).collect()
            } else {
                row.label.clone()
            };

            lines.push(Line::from(vec![
                Span::styled(
                    format!("{label:>label_width$} "),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    std::iter::repeat_n(block, filled).collect::<String>(),
                    bar_style,
                ),
                Span::styled(
                    format!(" {:>display_width$}", row.display),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
