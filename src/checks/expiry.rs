//! Directory scan and per-certificate expiry classification

use crate::cert_ops::{certificate_not_after, checkend, read_first_certificate, Thresholds};
use crate::config::CheckConfig;
use crate::models::{CertificateCheck, ExpiryReport};
use crate::utils::{CertFileError, CheckError, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Classifies certificate files against the critical and warning windows
#[derive(Debug, Clone)]
pub struct ExpiryChecker {
    thresholds: Thresholds,
    critical_days: u32,
    warning_days: u32,
    report_unreadable: bool,
}

impl ExpiryChecker {
    pub fn new(config: &CheckConfig) -> Self {
        Self {
            thresholds: config.thresholds(),
            critical_days: config.critical_days,
            warning_days: config.warning_days,
            report_unreadable: config.report_unreadable,
        }
    }

    /// Classify a single file.
    ///
    /// The warning window is only consulted when the critical check passes.
    pub fn evaluate_file(&self, path: &Path, name: &str, now: DateTime<Utc>) -> CertificateCheck {
        let not_after = match read_not_after(path) {
            Ok(not_after) => not_after,
            Err(e) => {
                tracing::debug!("{}: {}", path.display(), e);
                return if self.report_unreadable {
                    CertificateCheck::unreadable(name, e)
                } else {
                    CertificateCheck::critical_expiry(name, None, self.critical_days)
                };
            }
        };

        tracing::debug!("{}: notAfter {}", name, not_after.to_rfc3339());

        if !checkend(not_after, now, self.thresholds.critical_seconds) {
            return CertificateCheck::critical_expiry(name, Some(not_after), self.critical_days);
        }

        if !checkend(not_after, now, self.thresholds.warning_seconds) {
            return CertificateCheck::warning_expiry(name, not_after, self.warning_days);
        }

        CertificateCheck::ok(name, not_after)
    }

    /// Evaluate every entry of `dir`, calling `on_check` as each one is classified.
    ///
    /// A path that does not exist or is not a directory yields an empty, OK
    /// report. Entries are visited in file-name order.
    pub fn scan_directory<F>(
        &self,
        dir: &Path,
        now: DateTime<Utc>,
        mut on_check: F,
    ) -> Result<ExpiryReport>
    where
        F: FnMut(&CertificateCheck),
    {
        if !dir.is_dir() {
            tracing::debug!("{} is not a directory, nothing to check", dir.display());
            return Ok(ExpiryReport::new());
        }

        let mut entries = std::fs::read_dir(dir)
            .and_then(|iter| iter.collect::<std::io::Result<Vec<_>>>())
            .map_err(|e| CheckError::directory_read(dir, e))?;
        entries.sort_by_key(|entry| entry.file_name());

        let report = entries.iter().fold(ExpiryReport::new(), |report, entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            let check = self.evaluate_file(&entry.path(), &name, now);
            on_check(&check);
            report.record(check)
        });

        Ok(report)
    }
}

/// Run a full check for `config`. A missing `ssl_dir` checks nothing.
pub fn run_check<F>(config: &CheckConfig, now: DateTime<Utc>, on_check: F) -> Result<ExpiryReport>
where
    F: FnMut(&CertificateCheck),
{
    match &config.ssl_dir {
        Some(dir) => ExpiryChecker::new(config).scan_directory(dir, now, on_check),
        None => {
            tracing::debug!("no SSL directory configured, nothing to check");
            Ok(ExpiryReport::new())
        }
    }
}

fn read_not_after(path: &Path) -> std::result::Result<DateTime<Utc>, CertFileError> {
    let der = read_first_certificate(path)?;
    certificate_not_after(&der)
}
