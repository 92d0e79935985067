//! Certificate file operations module
//!
//! Reads PEM or DER certificate files and evaluates their expiration
//! against a lookahead window.

pub mod expiry;
pub mod reader;

pub use expiry::{certificate_not_after, checkend, Thresholds, SECONDS_PER_DAY};
pub use reader::{detect_format_from_bytes, read_first_certificate, DetectedFormat};
