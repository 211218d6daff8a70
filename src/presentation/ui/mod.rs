//! UI screens.

mod app;
mod dashboard_screen;
/// Formatting helpers.
pub mod utils;

pub use app::App;
pub use dashboard_screen::DashboardScreen;
