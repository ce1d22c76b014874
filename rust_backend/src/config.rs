//! Configuration file support.
//!
//! This module provides utilities for reading the tool configuration from a
//! `year1.toml` file. Every section is optional and falls back to the values
//! the Streamlit page uses.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file searched for by [`AppConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "year1.toml";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("No year1.toml found in standard locations")]
    NotFound,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Tool configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub document: DocumentSettings,
    #[serde(default)]
    pub plot: PlotSettings,
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Survey selection used in the file name prefix; `S00` when unset.
    #[serde(default)]
    pub survey_number: Option<u8>,
}

/// Default document settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSettings {
    /// Replaces the bundled example document when set.
    #[serde(default)]
    pub default_path: Option<PathBuf>,
}

/// Sky plot settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSettings {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_dec_min")]
    pub dec_min: f64,
    #[serde(default = "default_dec_max")]
    pub dec_max: f64,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_dec_min() -> f64 {
    -90.0
}

fn default_dec_max() -> f64 {
    30.0
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            survey_number: None,
        }
    }
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            dec_min: default_dec_min(),
            dec_max: default_dec_max(),
        }
    }
}

impl AppConfig {
    /// Load the configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AppConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read, parsed or fails validation
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load the configuration from the default location.
    ///
    /// Searches for `year1.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("rust_backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Like [`AppConfig::from_default_location`], but falls back to the
    /// defaults. A file that exists but cannot be used is logged, not ignored.
    pub fn from_default_location_or_default() -> Self {
        Self::or_default(Self::from_default_location())
    }

    fn or_default(loaded: Result<Self, ConfigError>) -> Self {
        match loaded {
            Ok(config) => config,
            Err(ConfigError::NotFound) => Self::default(),
            Err(e) => {
                log::warn!("Ignoring {}: {}", CONFIG_FILE_NAME, e);
                Self::default()
            }
        }
    }

    /// Check values the TOML schema cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(survey) = self.export.survey_number {
            if survey > crate::io::export::MAX_SURVEY_NUMBER {
                return Err(ConfigError::Invalid(format!(
                    "export.survey_number {} does not fit two digits",
                    survey
                )));
            }
        }
        if self.plot.dec_min >= self.plot.dec_max {
            return Err(ConfigError::Invalid(format!(
                "plot.dec_min ({}) must be below plot.dec_max ({})",
                self.plot.dec_min, self.plot.dec_max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.plot.dec_max, 30.0);
        assert_eq!(config.export.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            r#"
            [export]
            output_dir = "exports"
            survey_number = 7

            [document]
            default_path = "demoArea.json"

            [plot]
            width = 1024
            dec_max = 45.0
            "#,
        );
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.export.output_dir, PathBuf::from("exports"));
        assert_eq!(config.export.survey_number, Some(7));
        assert_eq!(
            config.document.default_path,
            Some(PathBuf::from("demoArea.json"))
        );
        assert_eq!(config.plot.width, 1024);
        assert_eq!(config.plot.height, 600);
        assert_eq!(config.plot.dec_max, 45.0);
    }

    #[test]
    fn test_invalid_survey_number() {
        let file = write_config("[export]\nsurvey_number = 120\n");
        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_inverted_dec_range() {
        let file = write_config("[plot]\ndec_min = 10.0\ndec_max = -10.0\n");
        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config("[export\noutput_dir = 3");
        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            AppConfig::from_file(dir.path().join("year1.toml")),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_unusable_file_falls_back_to_defaults() {
        let file = write_config("[plot]\nwidth = \"wide\"\n");
        let loaded = AppConfig::from_file(file.path());
        assert!(matches!(loaded, Err(ConfigError::Parse { .. })));
        assert_eq!(AppConfig::or_default(loaded), AppConfig::default());
        assert_eq!(AppConfig::or_default(Err(ConfigError::NotFound)), AppConfig::default());

        let file = write_config("[plot]\nwidth = 1200\n");
        let config = AppConfig::or_default(AppConfig::from_file(file.path()));
        assert_eq!(config.plot.width, 1200);
    }
}
