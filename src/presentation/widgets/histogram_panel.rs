//! Vertical-bar histogram panel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::application::charts::Histogram;

const EIGHTHS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];

/// Renders a [`Histogram`] as a column chart with a count axis on the
/// left and bucket labels along the bottom.
pub struct HistogramPanel<'a> {
    histogram: &'a Histogram,
    accent: Color,
    ascii: bool,
}

impl<'a> HistogramPanel<'a> {
    /// Creates the panel.
    #[must_use]
    pub const fn new(histogram: &'a Histogram, accent: Color, ascii: bool) -> Self {
        Self {
            histogram,
            accent,
            ascii,
        }
    }

    /// Bar height in cell-eighths for a bucket count.
    ///
    /// On the log scale the height follows log10(count + 1), so a zero
    /// bucket stays flat while the skewed head stays on screen.
    fn scaled_eighths(&self, count: u64, max: u64, bar_rows: u16) -> u32 {
        if count == 0 || max == 0 {
            return 0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = if self.histogram.log_scale {
            ((count + 1) as f64).log10() / ((max + 1) as f64).log10()
        } else {
            count as f64 / max as f64
        };
        let total = f64::from(bar_rows) * 8.0 * ratio;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let eighths = total.round() as u32;
        // A populated bucket always shows at least a sliver.
        eighths.max(1)
    }
}

impl Widget for HistogramPanel<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 4 || area.width < 10 {
            return;
        }

        let max = self.histogram.max_count();
        let axis_width = (max.to_string().len() as u16 + 1).max(2);

        let caption_y = area.y + area.height - 1;
        let ticks_y = caption_y - 1;
        let bar_rows = area.height - 3;

        // Count axis: max at the top, zero at the bottom.
        let axis_style = Style::default().fg(Color::DarkGray);
        let max_label = max.to_string();
        buf.set_string(
            area.x + axis_width - 1 - max_label.len() as u16,
            area.y,
            &max_label,
            axis_style,
        );
        buf.set_string(area.x + axis_width - 2, ticks_y - 1, "0", axis_style);

        let bars_x = area.x + axis_width;
        let bars_width = area.width.saturating_sub(axis_width);
        if bars_width == 0 {
            return;
        }

        let bins = &self.histogram.bins;
        let bin_width = ((bars_width as usize) / bins.len()).max(1) as u16;
        let shown = bins.len().min((bars_width / bin_width) as usize);
        // Leave a one-column gap between bars when there is room.
        let bar_width = if bin_width >= 3 { bin_width - 1 } else { bin_width };

        let bar_style = Style::default().fg(self.accent);
        for (i, bin) in bins.iter().take(shown).enumerate() {
            let eighths = self.scaled_eighths(bin.count, max, bar_rows);
            let full_rows = (eighths / 8) as u16;
            let partial = (eighths % 8) as usize;
            let x0 = bars_x + i as u16 * bin_width;

            for row in 0..full_rows.min(bar_rows) {
                let y = ticks_y - 1 - row;
                for dx in 0..bar_width {
                    let glyph = if self.ascii { '#' } else { '█' };
                    buf[(x0 + dx, y)].set_char(glyph).set_style(bar_style);
                }
            }
            if partial > 0 && full_rows < bar_rows {
                let y = ticks_y - 1 - full_rows;
                let glyph = if self.ascii {
                    if partial >= 4 { '#' } else { '.' }
                } else {
                    EIGHTHS[partial]
                };
                for dx in 0..bar_width {
                    buf[(x0 + dx, y)].set_char(glyph).set_style(bar_style);
                }
            }
        }

        // Bucket labels, thinned to whatever fits.
        let label_every = (6 / bin_width.max(1) as usize).max(1);
        for (i, bin) in bins.iter().take(shown).enumerate().step_by(label_every) {
            let label = bin.lower.to_string();
            let x = bars_x + i as u16 * bin_width;
            if x + label.len() as u16 <= area.x + area.width {
                buf.set_string(x, ticks_y, &label, axis_style);
            }
        }

        let mut caption = format!(
            "{} by {}",
            self.histogram.y_label, self.histogram.x_label
        );
        if self.histogram.log_scale {
            caption.push_str("  (log scale)");
        }
        if self.histogram.dropped > 0 {
            caption.push_str(&format!("  ({} users without data)", self.histogram.dropped));
        }
        let caption_area = Rect::new(area.x, caption_y, area.width, 1);
        Paragraph::new(Line::from(Span::styled(caption, axis_style)))
            .render(caption_area, buf);
    }
}
