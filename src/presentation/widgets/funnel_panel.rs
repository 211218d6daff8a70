//! Lifecycle funnel panel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::application::charts::Funnel;
use crate::presentation::ui::utils::format_count;

/// Renders the funnel as centered bars narrowing stage by stage.
pub struct FunnelPanel<'a> {
    funnel: &'a Funnel,
    accent: Color,
    ascii: bool,
}

impl<'a> FunnelPanel<'a> {
    /// Creates the panel.
    #[must_use]
    pub const fn new(funnel: &'a Funnel, accent: Color, ascii: bool) -> Self {
        Self {
            funnel,
            accent,
            ascii,
        }
    }
}

impl Widget for FunnelPanel<'_> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 6 || area.width < 24 {
            return;
        }

        let initial = self.funnel.stages[0].users;
        let full_width = area.width.saturating_sub(4);
        let block = if self.ascii { '#' } else { '█' };

        let bar_style = Style::default().fg(self.accent);
        let text_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().fg(Color::DarkGray);

        // Two rows per stage (caption, bar) plus a blank spacer.
        let mut y = area.y;
        for stage in &self.funnel.stages {
            if y + 2 > area.y + area.height {
                break;
            }

            let width = if initial == 0 {
                0
            } else {
                #[allow(clippy::cast_precision_loss)]
                let ratio = stage.users as f64 / initial as f64;
                ((f64::from(full_width) * ratio).round() as u16).max(u16::from(stage.users > 0))
            };
            let x0 = area.x + (area.width - width) / 2;

            let caption = format!(
                "{}  {} ({:.1}%)",
                stage.label,
                format_count(stage.users),
                stage.pct_of_initial
            );
            let caption_x = area.x
                + (area.width.saturating_sub(caption.len() as u16)) / 2;
            buf.set_string(caption_x, y, &caption, text_style);

            for dx in 0..width {
                buf[(x0 + dx, y + 1)].set_char(block).set_style(bar_style);
            }
            if width == 0 {
                buf.set_string(
                    area.x + area.width / 2,
                    y + 1,
                    "·",
                    dim_style,
                );
            }

            y += 3;
        }
    }
}
