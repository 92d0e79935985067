//! check-ssl-certs library
//!
//! Scans a directory of SSL/TLS certificate files and reports whether any of
//! them expire soon, as an OK / WARNING / CRITICAL monitoring result.
//!
//! # Usage
//!
//! ```rust,no_run
//! use check_ssl_certs::checks::run_check;
//! use check_ssl_certs::config::CheckConfig;
//!
//! let config = CheckConfig {
//!     ssl_dir: Some("/etc/ssl/certs".into()),
//!     ..CheckConfig::default()
//! };
//! let report = run_check(&config, chrono::Utc::now(), |_| {}).unwrap();
//! println!("{}", report.status);
//! ```

pub mod cert_ops;
pub mod checks;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod utils;

// Re-export commonly used types
pub use checks::{run_check, ExpiryChecker};
pub use cli::Cli;
pub use config::{CheckConfig, Settings};
pub use models::{CertificateCheck, ExpiryReport, Severity};
pub use utils::{CheckError, Result};
