use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "shoplens",
    version,
    about = "A terminal analytics dashboard for purchase-behavior datasets",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the dataset CSV.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Sidebar menu width in columns.
    #[arg(long, value_name = "COLS")]
    pub sidebar_width: Option<u16>,

    /// Render with plain ASCII instead of unicode block glyphs.
    #[arg(long)]
    pub ascii: bool,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
