use super::app_config::AppConfig;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

const APP_QUALIFIER: &str = "io";
const APP_ORGANIZATION: &str = "shoplens";
const APP_NAME: &str = "shoplens";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration storage errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No project config directory could be determined.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    /// Filesystem failure while reading or creating config files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid TOML for [`AppConfig`].
    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

/// Loads the application configuration from disk.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be
    /// determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a `StorageManager` with a specific directory (useful for
    /// testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the configuration directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Ensures the configuration directory exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> Result<(), ConfigError> {
        if !self.config_dir.exists() {
            info!("Creating configuration directory at {:?}", self.config_dir);
            fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    /// Loads the application configuration. A missing config file yields
    /// the defaults; a present but malformed one is an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        self.ensure_config_dir()?;
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            Path::to_path_buf,
        );

        if !config_path.exists() {
            return Ok(AppConfig::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let storage = StorageManager::with_dir(dir.path().to_path_buf());

        let config = storage.load_config(None).unwrap();
        assert_eq!(config.ui.sidebar_width, 30);
    }

    #[test]
    fn test_config_file_is_read_from_config_dir() {
        let dir = TempDir::new().unwrap();
        let storage = StorageManager::with_dir(dir.path().to_path_buf());

        let mut file = fs::File::create(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        writeln!(file, "[ui]\nsidebar_width = 22").unwrap();

        let config = storage.load_config(None).unwrap();
        assert_eq!(config.ui.sidebar_width, 22);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let storage = StorageManager::with_dir(dir.path().to_path_buf());

        let mut file = fs::File::create(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        writeln!(file, "sidebar_width = [not toml").unwrap();

        assert!(matches!(
            storage.load_config(None),
            Err(ConfigError::TomlDe(_))
        ));
    }
}
