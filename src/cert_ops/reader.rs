//! Certificate file reading and format detection
//!
//! Auto-detects PEM and DER formats and extracts the DER-encoded certificate
//! that the expiry check is run against.

use crate::utils::CertFileError;
use std::path::Path;
use x509_parser::pem::Pem;
use x509_parser::prelude::*;

/// PEM labels that carry an X.509 certificate
const CERTIFICATE_TAGS: [&str; 3] = ["CERTIFICATE", "X509 CERTIFICATE", "TRUSTED CERTIFICATE"];

/// Detected certificate file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedFormat {
    Pem,
    Der,
}

impl std::fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectedFormat::Pem => write!(f, "PEM"),
            DetectedFormat::Der => write!(f, "DER"),
        }
    }
}

/// Detect format from raw bytes
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DetectedFormat, CertFileError> {
    if let Ok(text) = std::str::from_utf8(data) {
        if text.contains("-----BEGIN ") {
            return Ok(DetectedFormat::Pem);
        }
    }

    if X509Certificate::from_der(data).is_ok() {
        return Ok(DetectedFormat::Der);
    }

    Err(CertFileError::UnsupportedFormat {
        format: "unknown (could not detect PEM or DER)".to_string(),
    })
}

/// Read the first certificate from a file, returning its DER encoding.
///
/// A PEM bundle is judged by its first certificate block, the same one
/// `openssl x509 -in` would load.
pub fn read_first_certificate(path: &Path) -> Result<Vec<u8>, CertFileError> {
    let data = std::fs::read(path).map_err(|e| CertFileError::FileReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let format = detect_format_from_bytes(&data)?;
    tracing::debug!("{}: detected {} data", path.display(), format);

    match format {
        DetectedFormat::Pem => first_pem_certificate(&data, path),
        DetectedFormat::Der => Ok(data),
    }
}

fn first_pem_certificate(data: &[u8], path: &Path) -> Result<Vec<u8>, CertFileError> {
    // Blocks after the first certificate are never decoded.
    for block in Pem::iter_from_buffer(data) {
        let block = block.map_err(|e| CertFileError::FileReadError {
            path: path.display().to_string(),
            message: format!("Failed to parse PEM: {}", e),
        })?;
        if CERTIFICATE_TAGS.contains(&block.label.as_str()) {
            return Ok(block.contents);
        }
    }

    Err(CertFileError::NoCertificate {
        path: path.display().to_string(),
    })
}
