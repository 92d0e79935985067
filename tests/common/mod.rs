#![allow(dead_code)]

use rcgen::{CertificateParams, KeyPair};
use std::path::Path;
use time::{Duration, OffsetDateTime};

/// Self-signed certificate that expires `hours` from now (negative = already expired)
fn certificate_expiring_in_hours(hours: i64) -> rcgen::Certificate {
    let mut params = CertificateParams::new(vec!["test.example.com".to_string()]).unwrap();
    let now = OffsetDateTime::now_utc();
    params.not_before = now - Duration::days(30);
    params.not_after = now + Duration::hours(hours);
    let key_pair = KeyPair::generate().unwrap();
    params.self_signed(&key_pair).unwrap()
}

/// Write a PEM certificate expiring in `days` days (plus one hour of slack)
pub fn write_pem_cert(dir: &Path, name: &str, days: i64) {
    let cert = certificate_expiring_in_hours(days * 24 + 1);
    std::fs::write(dir.join(name), cert.pem()).unwrap();
}

/// Write a DER certificate expiring in `days` days (plus one hour of slack)
pub fn write_der_cert(dir: &Path, name: &str, days: i64) {
    let cert = certificate_expiring_in_hours(days * 24 + 1);
    std::fs::write(dir.join(name), cert.der()).unwrap();
}

/// Write a certificate that expired `days` days ago
pub fn write_expired_cert(dir: &Path, name: &str, days: i64) {
    let cert = certificate_expiring_in_hours(-days * 24);
    std::fs::write(dir.join(name), cert.pem()).unwrap();
}
