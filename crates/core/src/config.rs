//! Configuration management for the promptroot workspace.
//!
//! This module handles loading and merging configuration from multiple
//! sources, in increasing precedence:
//! - Built-in defaults
//! - An optional YAML config file (`.promptroot.yaml` in the start directory)
//! - Environment variables
//! - Programmatic overrides from the embedding application
//!
//! Configuration only supplies the start directory and logging settings;
//! it never alters how roots are resolved or prompts are read.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory the ancestor search starts from
    pub start_dir: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Config file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and defaults.
    ///
    /// Environment variables:
    /// - `PROMPTROOT_START`: Override the start directory
    /// - `PROMPTROOT_CONFIG`: Path to a config file
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use promptroot_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Start directory: {:?}", config.start_dir);
    /// ```
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(start) = std::env::var("PROMPTROOT_START") {
            config.start_dir = PathBuf::from(start);
        }

        if let Ok(config_file) = std::env::var("PROMPTROOT_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        // Validate the start directory exists
        if !config.start_dir.exists() {
            return Err(AppError::Config(format!(
                "Start directory does not exist: {}",
                config.start_dir.display()
            )));
        }

        // Merge the YAML config file if present
        let config_path = match config.config_file {
            Some(ref cf) => cf.clone(),
            None => config.start_dir.join(".promptroot.yaml"),
        };

        if config_path.exists() {
            config.merge_yaml(&config_path)?;
            tracing::debug!("Merged config file: {}", config_path.display());
        }

        // Environment variables override YAML config
        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &Path) -> AppResult<()> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents)?;

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                self.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                self.no_color = !color;
            }
        }

        Ok(())
    }

    /// Apply overrides from the embedding application.
    ///
    /// Overrides take precedence over environment variables and the
    /// config file.
    pub fn with_overrides(
        mut self,
        start_dir: Option<PathBuf>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(start_dir) = start_dir {
            self.start_dir = start_dir;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.log_level.is_none());
        assert!(!config.verbose);
        assert!(!config.no_color);
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default();
        let overridden = config.with_overrides(
            Some(PathBuf::from("/srv/tutor")),
            None,
            true,
            false,
        );

        assert_eq!(overridden.start_dir, PathBuf::from("/srv/tutor"));
        assert!(overridden.verbose);
        assert_eq!(overridden.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_override_does_not_downgrade_explicit_level() {
        let config = AppConfig::default();
        let overridden =
            config.with_overrides(None, Some("trace".to_string()), true, false);

        assert_eq!(overridden.log_level, Some("trace".to_string()));
    }

    #[test]
    fn test_merge_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".promptroot.yaml");
        fs::write(
            &config_path,
            "logging:\n  level: warn\n  color: false\n",
        )
        .unwrap();

        let mut config = AppConfig::default();
        config.merge_yaml(&config_path).unwrap();

        assert_eq!(config.log_level, Some("warn".to_string()));
        assert!(config.no_color);
    }

    #[test]
    fn test_merge_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".promptroot.yaml");
        fs::write(&config_path, "logging: [not, a, mapping]\n").unwrap();

        let mut config = AppConfig::default();
        assert!(config.merge_yaml(&config_path).is_err());
    }
}
