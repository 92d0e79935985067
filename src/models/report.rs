//! Per-certificate outcomes and the run-level accumulator

use super::Severity;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const NEAR_EXPIRATION_SUMMARY: &str = "Certificate(s) are near expiration";
pub const OKAY_SUMMARY: &str = "Certificate expiration dates are okay";

/// Outcome of checking one directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateCheck {
    /// Entry name inside the scanned directory
    pub name: String,
    #[serde(rename = "status")]
    pub severity: Severity,
    /// Expiration timestamp, when the file could be parsed
    pub not_after: Option<DateTime<Utc>>,
    /// Line printed for this entry, if any
    pub message: Option<String>,
}

impl CertificateCheck {
    pub fn ok(name: impl Into<String>, not_after: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            severity: Severity::Ok,
            not_after: Some(not_after),
            message: None,
        }
    }

    pub fn critical_expiry(
        name: impl Into<String>,
        not_after: Option<DateTime<Utc>>,
        critical_days: u32,
    ) -> Self {
        let name = name.into();
        let message = format!(
            "CRITICAL: Certificate {} will expire in less than {} days",
            name, critical_days
        );
        Self {
            name,
            severity: Severity::Critical,
            not_after,
            message: Some(message),
        }
    }

    pub fn warning_expiry(
        name: impl Into<String>,
        not_after: DateTime<Utc>,
        warning_days: u32,
    ) -> Self {
        let name = name.into();
        let message = format!(
            "WARNING: Certificate {} will expire in less than {} days",
            name, warning_days
        );
        Self {
            name,
            severity: Severity::Warning,
            not_after: Some(not_after),
            message: Some(message),
        }
    }

    pub fn unreadable(name: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        let name = name.into();
        let message = format!("CRITICAL: Certificate {} could not be read: {}", name, reason);
        Self {
            name,
            severity: Severity::Critical,
            not_after: None,
            message: Some(message),
        }
    }
}

/// Worst-severity accumulator for a scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpiryReport {
    pub status: Severity,
    pub checks: Vec<CertificateCheck>,
}

impl ExpiryReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one outcome into the report. The status can only rise.
    pub fn record(mut self, check: CertificateCheck) -> Self {
        self.status = self.status.max(check.severity);
        self.checks.push(check);
        self
    }

    /// Per-file lines, in evaluation order
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.checks.iter().filter_map(|c| c.message.as_deref())
    }

    pub fn summary(&self) -> &'static str {
        match self.status {
            Severity::Ok => OKAY_SUMMARY,
            Severity::Warning | Severity::Critical => NEAR_EXPIRATION_SUMMARY,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }
}
