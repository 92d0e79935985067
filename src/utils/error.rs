//! Custom error types for check-ssl-certs
//!
//! Per-file problems (`CertFileError`) are always recovered into a
//! classification by the directory scan. Only `CheckError` reaches the
//! binary, where it is reported as UNKNOWN.

use std::path::Path;
use thiserror::Error;

/// Top-level error type for a check run
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read directory {path}: {message}")]
    DirectoryRead { path: String, message: String },

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl CheckError {
    pub(crate) fn directory_read(path: &Path, err: std::io::Error) -> Self {
        CheckError::DirectoryRead {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// Errors raised while reading a single certificate file
#[derive(Error, Debug)]
pub enum CertFileError {
    #[error("Failed to read {path}: {message}")]
    FileReadError { path: String, message: String },

    #[error("Unsupported certificate format: {format}")]
    UnsupportedFormat { format: String },

    #[error("No certificate found in {path}")]
    NoCertificate { path: String },

    #[error("Failed to parse certificate: {message}")]
    ParseError { message: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read configuration {path}: {message}")]
    FileRead { path: String, message: String },

    #[error("Failed to parse configuration {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias using CheckError
pub type Result<T> = std::result::Result<T, CheckError>;
