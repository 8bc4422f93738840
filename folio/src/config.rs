//! Site configuration loading and defaults.
//!
//! Every field has a default, so a missing file, a missing section or a
//! missing key all fall back to the built-in values. Browser builds read the
//! `folio.toml` compiled into the binary.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use folio_ui::FollowerConfig;
use folio_ui::follower::{DEFAULT_EASE, DEFAULT_HOVER_SCALE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The bundled configuration file.
pub const BUNDLED: &str = include_str!("../folio.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FolioConfig {
    #[serde(default)]
    pub cursor: CursorConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorConfig {
    /// Fraction of the remaining distance closed per frame, in (0, 1]
    #[serde(default = "default_ease")]
    pub ease: f64,

    /// Marker scale over links, buttons and text inputs
    #[serde(default = "default_hover_scale")]
    pub hover_scale: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// How long the simulated submission takes
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter used when RUST_LOG is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_ease() -> f64 {
    DEFAULT_EASE
}
fn default_hover_scale() -> f64 {
    DEFAULT_HOVER_SCALE
}
fn default_simulated_delay_ms() -> u64 {
    1500
}
fn default_filter() -> String {
    "folio=info,folio_ui=info".to_string()
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            ease: default_ease(),
            hover_scale: default_hover_scale(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl FolioConfig {
    /// Load configuration from `path`, or use defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// The configuration compiled into the binary.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::parse(BUNDLED)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: FolioConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ease = self.cursor.ease;
        if !(ease > 0.0 && ease <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "cursor.ease must be in (0, 1], got {ease}"
            )));
        }
        let hover_scale = self.cursor.hover_scale;
        if !(hover_scale.is_finite() && hover_scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "cursor.hover_scale must be positive, got {hover_scale}"
            )));
        }
        Ok(())
    }

    pub fn follower(&self) -> FollowerConfig {
        FollowerConfig {
            ease: self.cursor.ease,
            hover_scale: self.cursor.hover_scale,
        }
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.contact.simulated_delay_ms)
    }
}

#[cfg(all(test, not(target_family = "wasm")))]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn no_path_gives_defaults() {
        let config = FolioConfig::load(None).expect("defaults");
        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.follower(), FollowerConfig::default());
        assert_eq!(config.simulated_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn bundled_file_matches_defaults() {
        assert_eq!(FolioConfig::bundled().expect("bundled"), FolioConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config("[cursor]\nhover_scale = 2.0\n");
        let config = FolioConfig::load(Some(file.path())).expect("partial config");
        assert_eq!(config.cursor.hover_scale, 2.0);
        assert_eq!(config.cursor.ease, DEFAULT_EASE);
        assert_eq!(config.contact, ContactConfig::default());
        assert_eq!(config.logging.filter, "folio=info,folio_ui=info");
    }

    #[test]
    fn ease_outside_unit_interval_is_rejected() {
        for ease in ["0.0", "-0.1", "1.5", "nan"] {
            let err = FolioConfig::parse(&format!("[cursor]\nease = {ease}\n"))
                .expect_err("invalid ease");
            assert!(matches!(err, ConfigError::Invalid(_)), "{ease}: {err}");
        }
        assert!(FolioConfig::parse("[cursor]\nease = 1.0\n").is_ok());
    }

    #[test]
    fn non_positive_hover_scale_is_rejected() {
        let err = FolioConfig::parse("[cursor]\nhover_scale = 0.0\n").expect_err("zero scale");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = FolioConfig::parse("[cursor\nease = ").expect_err("malformed");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.toml");
        let err = FolioConfig::load(Some(&path)).expect_err("missing file");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
