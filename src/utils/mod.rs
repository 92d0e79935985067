//! Utility modules for check-ssl-certs

pub mod error;

pub use error::{CertFileError, CheckError, ConfigError, Result};
