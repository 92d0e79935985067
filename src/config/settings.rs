//! Settings file configuration
//!
//! Every key is optional; command-line flags take precedence.

use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings loaded from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub ssl_dir: Option<PathBuf>,
    pub critical: Option<u32>,
    pub warning: Option<u32>,
    #[serde(default)]
    pub report_unreadable: bool,
    pub check_name: Option<String>,
}

impl Settings {
    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::FileRead {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::ParseError { message, .. } => ConfigError::ParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }
}
