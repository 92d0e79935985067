//! Configuration module for check-ssl-certs
//!
//! Merges command-line flags, an optional TOML settings file and the
//! built-in defaults into a single `CheckConfig`.

pub mod settings;

pub use settings::Settings;

use crate::cert_ops::Thresholds;
use crate::cli::Cli;
use crate::utils::ConfigError;
use std::path::PathBuf;

pub const DEFAULT_CRITICAL_DAYS: u32 = 7;
pub const DEFAULT_WARNING_DAYS: u32 = 14;
pub const DEFAULT_CHECK_NAME: &str = "CheckSslCerts";

/// Effective configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub ssl_dir: Option<PathBuf>,
    pub critical_days: u32,
    pub warning_days: u32,
    pub report_unreadable: bool,
    pub check_name: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            ssl_dir: None,
            critical_days: DEFAULT_CRITICAL_DAYS,
            warning_days: DEFAULT_WARNING_DAYS,
            report_unreadable: false,
            check_name: DEFAULT_CHECK_NAME.to_string(),
        }
    }
}

impl CheckConfig {
    /// Build the configuration from parsed arguments, loading `--config` if given
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let settings = match &cli.config {
            Some(path) => Settings::load_from_file(path)?,
            None => Settings::default(),
        };
        Self::merge(cli, settings)
    }

    /// Flags win over settings, settings win over defaults
    pub fn merge(cli: &Cli, settings: Settings) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let check_name = cli
            .check_name
            .clone()
            .or(settings.check_name)
            .unwrap_or(defaults.check_name);
        if check_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "check_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let critical_days = cli
            .critical
            .or(settings.critical)
            .unwrap_or(defaults.critical_days);
        let warning_days = cli
            .warning
            .or(settings.warning)
            .unwrap_or(defaults.warning_days);

        // Allowed, but the critical check then masks the warning check.
        if warning_days < critical_days {
            tracing::warn!(
                "warning threshold ({} days) is below critical threshold ({} days)",
                warning_days,
                critical_days
            );
        }

        Ok(Self {
            ssl_dir: cli.ssl_dir.clone().or(settings.ssl_dir),
            critical_days,
            warning_days,
            report_unreadable: cli.report_unreadable || settings.report_unreadable,
            check_name,
        })
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds::from_days(self.critical_days, self.warning_days)
    }
}
