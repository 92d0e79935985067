//! JSON output formatter

use crate::models::{CertificateCheck, ExpiryReport, Severity};
use crate::utils::Result;
use serde::Serialize;

/// JSON-serializable output structure
#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub check: &'a str,
    pub status: Severity,
    pub exit_code: i32,
    pub summary: &'a str,
    pub certificates: &'a [CertificateCheck],
}

impl<'a> JsonOutput<'a> {
    pub fn new(check_name: &'a str, report: &'a ExpiryReport) -> Self {
        Self {
            check: check_name,
            status: report.status,
            exit_code: report.exit_code(),
            summary: report.summary(),
            certificates: &report.checks,
        }
    }
}

pub fn to_json(check_name: &str, report: &ExpiryReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOutput::new(check_name, report))?)
}

/// Print the report as JSON to stdout
pub fn print_json(check_name: &str, report: &ExpiryReport) -> Result<()> {
    println!("{}", to_json(check_name, report)?);
    Ok(())
}
