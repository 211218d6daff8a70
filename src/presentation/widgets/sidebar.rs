//! Sidebar menu listing the chart catalogue.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::ChartKind;

/// Single-select menu over [`ChartKind::ALL`].
///
/// The list is fixed at ten entries; selection state lives on the screen,
/// this widget only paints it.
pub struct Sidebar {
    selected: ChartKind,
    accent: Color,
}

impl Sidebar {
    /// Creates the sidebar with the given selection highlighted.
    #[must_use]
    pub const fn new(selected: ChartKind, accent: Color) -> Self {
        Self { selected, accent }
    }

    /// The digit key that jumps to a menu position.
    const fn digit_for(index: usize) -> char {
        match index {
            9 => '0',
            _ => (b'1' + index as u8) as char,
        }
    }
}

impl Widget for &Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
            .title(" Charts ");
        let inner = block.inner(area);
        block.render(area, buf);

        let selected_style = Style::default()
            .bg(self.accent)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
        let digit_style = Style::default().fg(Color::DarkGray);

        let lines: Vec<Line> = ChartKind::ALL
            .iter()
            .enumerate()
            .map(|(index, kind)| {
                let digit = Sidebar::digit_for(index);
                if *kind == self.selected {
                    let text = format!(" {digit} {:<width$}", kind.menu_label(),
                        width = inner.width.saturating_sub(3) as usize);
                    Line::from(Span::styled(text, selected_style))
                } else {
                    Line::from(vec![
                        Span::styled(format!(" {digit} "), digit_style),
                        Span::raw(kind.menu_label()),
                    ])
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
