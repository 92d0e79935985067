//! Data models for check-ssl-certs

pub mod report;
pub mod severity;

pub use report::{CertificateCheck, ExpiryReport, NEAR_EXPIRATION_SUMMARY, OKAY_SUMMARY};
pub use severity::{Severity, UNKNOWN_EXIT_CODE};
