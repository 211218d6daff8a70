//! Configuration: file-backed defaults merged with CLI overrides.

mod app_config;
mod args;
mod storage;

pub use app_config::{AppConfig, LogLevel, ThemeConfig, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
