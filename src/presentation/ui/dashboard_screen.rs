//! The dashboard screen: sidebar menu plus the selected chart.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Widget},
};
use tracing::debug;

use crate::application::charts::{self, ChartSpec};
use crate::domain::{ChartKind, Dataset, Weekday};
use crate::presentation::events::EventResult;
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::{format_count, format_eur};
use crate::presentation::widgets::{
    BarPanel, BarRow, BreakdownPanel, FooterBar, FunnelPanel, HeatPalette, Heatmap,
    HistogramPanel, Sidebar, StatusBar,
};

const KEY_HINTS: [(&str, &str); 3] = [("↑/↓", "select chart"), ("1-0", "jump"), ("q", "quit")];
const KEY_HINTS_ASCII: [(&str, &str); 3] =
    [("Up/Dn", "select chart"), ("1-0", "jump"), ("q", "quit")];

/// Screen state: the immutable dataset handle plus the current selection
/// and its computed chart.
pub struct DashboardScreen {
    dataset: Dataset,
    dataset_name: String,
    theme: Theme,
    sidebar_width: u16,
    selected: ChartKind,
    spec: ChartSpec,
}

impl DashboardScreen {
    /// Creates the screen with the first menu entry selected.
    #[must_use]
    pub fn new(
        dataset: Dataset,
        dataset_name: String,
        theme: Theme,
        sidebar_width: u16,
    ) -> Self {
        let selected = ChartKind::ALL[0];
        let spec = charts::compute(selected, &dataset);
        Self {
            dataset,
            dataset_name,
            theme,
            sidebar_width,
            selected,
            spec,
        }
    }

    /// Currently selected chart.
    #[must_use]
    pub const fn selected(&self) -> ChartKind {
        self.selected
    }

    fn select(&mut self, kind: ChartKind) -> EventResult {
        if kind == self.selected {
            return EventResult::Continue;
        }
        debug!(chart = %kind, "Chart selected");
        self.selected = kind;
        self.spec = charts::compute(kind, &self.dataset);
        EventResult::Redraw
    }

    /// Handles a key press on the menu.
    pub fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.select(self.selected.next()),
            KeyCode::Up | KeyCode::Char('k') => self.select(self.selected.previous()),
            KeyCode::Home => self.select(ChartKind::ALL[0]),
            KeyCode::End => self.select(*ChartKind::ALL.last().unwrap_or(&self.selected)),
            KeyCode::Char(digit) => match ChartKind::from_digit(digit) {
                Some(kind) => self.select(kind),
                None => EventResult::Continue,
            },
            _ => EventResult::Continue,
        }
    }

    fn render_chart(&self, area: Rect, buf: &mut Buffer) {
        let accent = self.theme.accent;
        let ascii = self.theme.ascii;

        match &self.spec {
            ChartSpec::Histogram(histogram) => {
                HistogramPanel::new(histogram, accent, ascii).render(area, buf);
            }
            ChartSpec::Segmentation(segmentation) => {
                let slices: Vec<(&str, u64)> = segmentation
                    .iter()
                    .map(|(tier, users)| (tier.label(), users))
                    .collect();
                BreakdownPanel::new(&slices, accent, ascii).render(area, buf);
            }
            ChartSpec::Revenue(countries) => {
                let rows: Vec<BarRow> = countries
                    .iter()
                    .map(|entry| BarRow {
                        label: entry.country.clone(),
                        value: entry.revenue_eur,
                        display: format_eur(entry.revenue_eur),
                    })
                    .collect();
                BarPanel::new(&rows, accent, ascii).render(area, buf);
            }
            ChartSpec::Cohort(matrix) => {
                let map = Heatmap::new(
                    matrix
                        .registration_months
                        .iter()
                        .map(ToString::to_string)
                        .collect(),
                    matrix
                        .purchase_months
                        .iter()
                        .map(ToString::to_string)
                        .collect(),
                    matrix.cells.clone(),
                    matrix.max_count(),
                    HeatPalette::Blues,
                );
                (&map).render(area, buf);
            }
            ChartSpec::Funnel(funnel) => {
                FunnelPanel::new(funnel, accent, ascii).render(area, buf);
            }
            ChartSpec::Breakdown(slices) => {
                let slices: Vec<(&str, u64)> = slices
                    .iter()
                    .map(|slice| (slice.label, slice.value))
                    .collect();
                let panel = BreakdownPanel::new(&slices, accent, ascii);
                let panel = if self.selected == ChartKind::RepeatVsOneTime {
                    panel.note("Users with no purchases are not part of this chart.")
                } else {
                    panel
                };
                panel.render(area, buf);
            }
            ChartSpec::Trends(grid) => {
                let cells: Vec<Vec<Option<u64>>> = grid
                    .cells
                    .iter()
                    .map(|row| row.iter().map(|&cell| Some(cell)).collect())
                    .collect();
                let map = Heatmap::new(
                    Weekday::ALL.iter().map(|day| day.abbrev().to_string()).collect(),
                    (0..24).map(|hour| hour.to_string()).collect(),
                    cells,
                    grid.max,
                    HeatPalette::Reds,
                );
                (&map).render(area, buf);
            }
        }
    }
}

impl Widget for &DashboardScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout =
            Layout::horizontal([Constraint::Length(self.sidebar_width), Constraint::Fill(1)]);
        let [sidebar_area, main_area] = layout.areas(area);

        let sidebar = Sidebar::new(self.selected, self.theme.accent);
        (&sidebar).render(sidebar_area, buf);

        let main_layout = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let [chart_area, status_area, footer_area] = main_layout.areas(main_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(format!(" {} ", self.selected.title()));
        let inner = block.inner(chart_area);
        block.render(chart_area, buf);
        self.render_chart(inner, buf);

        let status = StatusBar::new(self.theme.accent)
            .left(format!(
                "{} · {} users",
                self.dataset_name,
                format_count(self.dataset.user_count() as u64)
            ))
            .right(format!(
                "Chart {}/{}",
                self.selected.index() + 1,
                ChartKind::ALL.len()
            ));
        (&status).render(status_area, buf);

        let hints = if self.theme.ascii {
            &KEY_HINTS_ASCII
        } else {
            &KEY_HINTS
        };
        FooterBar::new(hints, self.theme.accent).render(footer_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dataset, UserRecord, Weekday};
    use chrono::{NaiveDate, NaiveTime};
    use crossterm::event::{KeyEventKind, KeyModifiers};

    fn sample_user() -> UserRecord {
        let midnight = |y, m, d| {
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_time(NaiveTime::MIN)
        };
        UserRecord {
            registration_date: midnight(2024, 1, 15),
            first_purchase_day: Some(midnight(2024, 2, 1)),
            last_purchase_day: Some(midnight(2024, 3, 1)),
            purchase_count: 4,
            delivery_purchases: 2,
            takeaway_purchases: 2,
            ios_purchases: 4,
            android_purchases: 0,
            web_purchases: 0,
            most_common_hour: Some(18),
            most_common_weekday: Some(Weekday::Friday),
            registration_country: "Finland".to_string(),
            total_purchases_eur: 52.0,
        }
    }

    fn screen() -> DashboardScreen {
        DashboardScreen::new(
            Dataset::new(vec![sample_user()]),
            "users.csv".to_string(),
            Theme::default(),
            30,
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn test_starts_on_first_menu_entry() {
        assert_eq!(screen().selected(), ChartKind::PurchaseDistribution);
    }

    #[test]
    fn test_arrow_keys_move_selection() {
        let mut screen = screen();
        assert_eq!(screen.handle_key(&press(KeyCode::Down)), EventResult::Redraw);
        assert_eq!(screen.selected(), ChartKind::PurchaseHour);
        assert_eq!(screen.handle_key(&press(KeyCode::Up)), EventResult::Redraw);
        assert_eq!(screen.selected(), ChartKind::PurchaseDistribution);
    }

    #[test]
    fn test_digit_keys_jump_to_chart() {
        let mut screen = screen();
        screen.handle_key(&press(KeyCode::Char('6')));
        assert_eq!(screen.selected(), ChartKind::FunnelConversion);
        screen.handle_key(&press(KeyCode::Char('0')));
        assert_eq!(screen.selected(), ChartKind::PurchaseTrends);
    }

    #[test]
    fn test_reselecting_current_chart_skips_redraw() {
        let mut screen = screen();
        assert_eq!(
            screen.handle_key(&press(KeyCode::Char('1'))),
            EventResult::Continue
        );
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut screen = screen();
        assert_eq!(
            screen.handle_key(&press(KeyCode::Char('z'))),
            EventResult::Continue
        );
        assert_eq!(screen.selected(), ChartKind::PurchaseDistribution);
    }
}
