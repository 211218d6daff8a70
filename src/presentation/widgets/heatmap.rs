//! Heat-map grid panel.
//!
//! Shared by the retention cohort (months by months, blues) and the
//! purchase-trend grid (weekday by hour, reds). Cells carry their value as
//! text over a background whose intensity scales with the value; `None`
//! cells render empty rather than as zero.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Color ramp family for the cell backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatPalette {
    /// Dark-to-light blues.
    Blues,
    /// Dark-to-light reds.
    Reds,
}

impl HeatPalette {
    /// Background color for a cell at `value` out of `max`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    #[must_use]
    pub fn color(self, value: u64, max: u64) -> Color {
        let t = if max == 0 {
            0.0
        } else {
            (value as f64 / max as f64).clamp(0.0, 1.0)
        };
        let channel = |lo: u8, hi: u8| -> u8 {
            (f64::from(lo) + (f64::from(hi) - f64::from(lo)) * t).round() as u8
        };
        match self {
            Self::Blues => Color::Rgb(channel(25, 90), channel(35, 160), channel(55, 255)),
            Self::Reds => Color::Rgb(channel(55, 255), channel(30, 80), channel(25, 50)),
        }
    }
}

/// A labeled heat-map grid.
pub struct Heatmap {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    /// `cells[row][col]`; `None` renders empty.
    cells: Vec<Vec<Option<u64>>>,
    max: u64,
    palette: HeatPalette,
}

impl Heatmap {
    /// Creates the grid. `cells` must be `row_labels.len()` rows of
    /// `col_labels.len()` columns.
    #[must_use]
    pub fn new(
        row_labels: Vec<String>,
        col_labels: Vec<String>,
        cells: Vec<Vec<Option<u64>>>,
        max: u64,
        palette: HeatPalette,
    ) -> Self {
        Self {
            row_labels,
            col_labels,
            cells,
            max,
            palette,
        }
    }

    fn cell_width(&self) -> u16 {
        let value_width = self.max.to_string().len() + 1;
        let label_width = self
            .col_labels
            .iter()
            .map(String::len)
            .max()
            .unwrap_or(0)
            + 1;
        #[allow(clippy::cast_possible_truncation)]
        {
            value_width.max(label_width).max(3) as u16
        }
    }

    fn row_label_width(&self) -> u16 {
        #[allow(clippy::cast_possible_truncation)]
        {
            (self.row_labels.iter().map(String::len).max().unwrap_or(0) + 1) as u16
        }
    }
}

impl Widget for &Heatmap {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.row_labels.is_empty() || self.col_labels.is_empty() {
            buf.set_string(
                area.x,
                area.y,
                "No data to display",
                Style::default().fg(Color::DarkGray),
            );
            return;
        }
        if area.height < 2 {
            return;
        }

        let label_width = self.row_label_width();
        let cell_width = self.cell_width();
        let grid_x = area.x + label_width;

        let visible_cols = self
            .col_labels
            .len()
            .min(((area.width.saturating_sub(label_width)) / cell_width) as usize);
        let visible_rows = self
            .row_labels
            .len()
            .min((area.height - 1) as usize);

        let header_style = Style::default().fg(Color::DarkGray);

        // Column headers.
        for (col, label) in self.col_labels.iter().take(visible_cols).enumerate() {
            let x = grid_x + col as u16 * cell_width;
            buf.set_string(x, area.y, format!("{label:>w$}", w = cell_width as usize - 1), header_style);
        }

        for (row, label) in self.row_labels.iter().take(visible_rows).enumerate() {
            let y = area.y + 1 + row as u16;
            buf.set_string(area.x, y, label, header_style);

            for col in 0..visible_cols {
                let x = grid_x + col as u16 * cell_width;
                let cell = self.cells[row][col];
                match cell {
                    Some(value) => {
                        let bg = self.palette.color(value, self.max);
                        let fg = if value * 2 > self.max.max(1) {
                            Color::Black
                        } else {
                            Color::White
                        };
                        let text = format!("{value:>w$}", w = cell_width as usize - 1);
                        buf.set_string(x, y, text, Style::default().fg(fg).bg(bg));
                        buf[(x + cell_width - 1, y)].set_style(Style::default().bg(bg));
                    }
                    None => {
                        let text = format!("{:>w$}", "·", w = cell_width as usize - 1);
                        buf.set_string(x, y, text, header_style);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_scales_with_value() {
        let low = HeatPalette::Blues.color(0, 10);
        let high = HeatPalette::Blues.color(10, 10);
        assert_ne!(low, high);
        assert_eq!(HeatPalette::Blues.color(0, 0), low);
    }

    #[test]
    fn test_cell_width_fits_values_and_labels() {
        let map = Heatmap::new(
            vec!["2024-01".into()],
            vec!["2024-01".into(), "2024-02".into()],
            vec![vec![Some(1234), None]],
            1234,
            HeatPalette::Blues,
        );
        assert!(map.cell_width() >= 8);
        assert!(map.row_label_width() >= 8);
    }
}
