//! Expiration-window evaluation ("checkend")

use crate::utils::CertFileError;
use chrono::{DateTime, Duration, TimeZone, Utc};
use x509_parser::prelude::*;

pub const SECONDS_PER_DAY: i64 = 24 * 3600;

/// Lookahead windows, in seconds, for the critical and warning checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub critical_seconds: i64,
    pub warning_seconds: i64,
}

impl Thresholds {
    pub fn from_days(critical_days: u32, warning_days: u32) -> Self {
        Self {
            critical_seconds: i64::from(critical_days) * SECONDS_PER_DAY,
            warning_seconds: i64::from(warning_days) * SECONDS_PER_DAY,
        }
    }
}

/// Extract the `notAfter` timestamp from a DER-encoded certificate
pub fn certificate_not_after(der: &[u8]) -> Result<DateTime<Utc>, CertFileError> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| CertFileError::ParseError {
        message: e.to_string(),
    })?;

    asn1_time_to_datetime(cert.validity().not_after)
}

/// Whether a certificate is still valid `lookahead_seconds` after `now`.
///
/// Returns `false` when the certificate expires within the window or has
/// already expired. A window reaching past the largest representable date
/// also returns `false`.
pub fn checkend(not_after: DateTime<Utc>, now: DateTime<Utc>, lookahead_seconds: i64) -> bool {
    Duration::try_seconds(lookahead_seconds)
        .and_then(|window| now.checked_add_signed(window))
        .is_some_and(|deadline| not_after >= deadline)
}

fn asn1_time_to_datetime(time: ASN1Time) -> Result<DateTime<Utc>, CertFileError> {
    Utc.timestamp_opt(time.timestamp(), 0)
        .single()
        .ok_or_else(|| CertFileError::ParseError {
            message: "Invalid notAfter timestamp in certificate".to_string(),
        })
}
