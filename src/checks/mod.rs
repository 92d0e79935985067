//! Check modules for check-ssl-certs

pub mod expiry;

pub use expiry::{run_check, ExpiryChecker};
