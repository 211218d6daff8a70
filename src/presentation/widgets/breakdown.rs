//! Proportional category breakdown panel.
//!
//! The terminal stand-in for the pie charts: one stacked proportion bar
//! plus a legend row per category with absolute value and share.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::presentation::ui::utils::format_count;

/// Renders labeled category totals as proportions.
pub struct BreakdownPanel<'a> {
    slices: &'a [(&'a str, u64)],
    accent: Color,
    ascii: bool,
    /// Shown under the legend, e.g. which users this chart excludes.
    note: Option<&'a str>,
}

const PALETTE: [Color; 5] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Blue,
];

impl<'a> BreakdownPanel<'a> {
    /// Creates the panel.
    #[must_use]
    pub const fn new(slices: &'a [(&'a str, u64)], accent: Color, ascii: bool) -> Self {
        Self {
            slices,
            accent,
            ascii,
            note: None,
        }
    }

    /// Adds a footnote under the legend.
    #[must_use]
    pub const fn note(mut self, note: &'a str) -> Self {
        self.note = Some(note);
        self
    }

    fn slice_color(&self, index: usize) -> Color {
        // The first slice takes the theme accent, the rest walk the
        // fixed palette, skipping a duplicate of the accent.
        if index == 0 {
            return self.accent;
        }
        let mut palette = PALETTE
            .into_iter()
            .filter(|color| *color != self.accent);
        palette.nth(index - 1).unwrap_or(Color::Gray)
    }
}

impl Widget for BreakdownPanel<'_> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 12 || self.slices.is_empty() {
            return;
        }

        let total: u64 = self.slices.iter().map(|(_, value)| value).sum();
        let share = |value: u64| -> f64 {
            if total == 0 {
                0.0
            } else {
                value as f64 / total as f64
            }
        };

        // Stacked proportion bar across the top.
        let bar_y = area.y + 1;
        let bar_width = area.width.saturating_sub(2);
        let mut x = area.x + 1;
        let block = if self.ascii { '#' } else { '█' };
        for (index, (_, value)) in self.slices.iter().enumerate() {
            let cells = (f64::from(bar_width) * share(*value)).round() as u16;
            let cells = cells.min(area.x + 1 + bar_width - x);
            let style = Style::default().fg(self.slice_color(index));
            for dx in 0..cells {
                buf[(x + dx, bar_y)].set_char(block).set_style(style);
            }
            x += cells;
        }

        // Legend: one line per slice.
        let label_width = self
            .slices
            .iter()
            .map(|(label, _)| label.width())
            .max()
            .unwrap_or(0);

        let mut lines: Vec<Line> = Vec::new();
        for (index, (label, value)) in self.slices.iter().enumerate() {
            let marker = if self.ascii { "*" } else { "■" };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{marker} "),
                    Style::default().fg(self.slice_color(index)),
                ),
                Span::styled(
                    format!("{label:<label_width$}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "  {:>10}  ({:>5.1}%)",
                    format_count(*value),
                    share(*value) * 100.0
                )),
            ]));
        }
        if let Some(note) = self.note {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                note,
                Style::default().fg(Color::DarkGray),
            )));
        }

        let legend_area = Rect::new(
            area.x + 1,
            bar_y + 2,
            area.width.saturating_sub(2),
            area.height.saturating_sub(3),
        );
        Paragraph::new(lines).render(legend_area, buf);
    }
}
