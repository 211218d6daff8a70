//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "shoplens";
const APP_QUALIFIER: &str = "io";
const APP_ORGANIZATION: &str = "shoplens";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, from `config.toml` with CLI overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Sidebar menu width in columns.
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,

    /// Render with plain ASCII instead of unicode block glyphs.
    #[serde(default)]
    pub ascii: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sidebar_width: default_sidebar_width(),
            ascii: false,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

fn default_accent_color() -> String {
    "Cyan".to_string()
}

fn default_sidebar_width() -> u16 {
    30
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration; arguments win over
    /// file values.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(sidebar_width) = args.sidebar_width {
            self.ui.sidebar_width = sidebar_width;
        }
        if args.ascii {
            self.ui.ascii = true;
        }
        if let Some(accent_color) = &args.accent_color {
            self.theme.accent_color = accent_color.clone();
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("shoplens.log"))
    }

    /// Returns effective log path. The terminal owns stdout, so logs
    /// always go to a file.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_config_with_partial_fields() {
        let toml_content = r##"
            log_level = "debug"

            [ui]
            sidebar_width = 24

            [theme]
            accent_color = "#ffaa00"
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.ui.sidebar_width, 24);
        assert!(!config.ui.ascii);
        assert_eq!(config.theme.accent_color, "#ffaa00");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.ui.sidebar_width, 30);
        assert!(!config.ui.ascii);
        assert_eq!(config.theme.accent_color, "Cyan");
    }

    #[test]
    fn test_cli_arguments_override_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs {
            dataset: Path::new("users.csv").to_path_buf(),
            config: None,
            log_path: None,
            log_level: Some(LogLevel::Trace),
            sidebar_width: Some(40),
            ascii: true,
            accent_color: Some("Magenta".to_string()),
        };

        config.merge_with_args(&args);

        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.ui.sidebar_width, 40);
        assert!(config.ui.ascii);
        assert_eq!(config.theme.accent_color, "Magenta");
    }
}
