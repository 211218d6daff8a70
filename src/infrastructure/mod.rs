//! Infrastructure layer: dataset loading and configuration.

/// Application configuration.
pub mod config;
/// CSV dataset loader.
pub mod loader;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use loader::load_dataset;
