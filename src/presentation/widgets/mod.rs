//! Reusable widgets.

mod bar_panel;
mod breakdown;
mod footer_bar;
mod funnel_panel;
mod heatmap;
mod histogram_panel;
mod sidebar;
mod status_bar;

pub use bar_panel::{BarPanel, BarRow};
pub use breakdown::BreakdownPanel;
pub use footer_bar::FooterBar;
pub use funnel_panel::FunnelPanel;
pub use heatmap::{HeatPalette, Heatmap};
pub use histogram_panel::HistogramPanel;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
