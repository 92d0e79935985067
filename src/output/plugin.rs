//! Monitoring-plugin text output

use crate::models::{CertificateCheck, ExpiryReport};
use std::io::{self, Write};

/// Line printed for a single entry, if it has one
pub fn check_line(check: &CertificateCheck) -> Option<&str> {
    check.message.as_deref()
}

/// Final status line, e.g. `CheckSslCerts CRITICAL: Certificate(s) are near expiration`
pub fn status_line(check_name: &str, report: &ExpiryReport) -> String {
    format!("{} {}: {}", check_name, report.status, report.summary())
}

/// Status line for a run that could not complete
pub fn unknown_line(check_name: &str, error: &impl std::fmt::Display) -> String {
    format!("{} UNKNOWN: {}", check_name, error)
}

/// Print an entry's line to stdout as soon as it is classified
pub fn print_check(check: &CertificateCheck) {
    if let Some(line) = check_line(check) {
        let mut stdout = io::stdout().lock();
        // Output is best-effort; a closed pipe must not abort the check.
        let _ = writeln!(stdout, "{}", line);
        let _ = stdout.flush();
    }
}

pub fn print_status(check_name: &str, report: &ExpiryReport) {
    println!("{}", status_line(check_name, report));
}
