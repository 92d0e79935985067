//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "check-ssl-certs")]
#[command(version)]
#[command(about = "Checks the expiration of SSL certificates in a directory", long_about = None)]
pub struct Cli {
    /// SSL directory
    #[arg(short = 'd', long = "ssl-dir", value_name = "SSL_DIR")]
    pub ssl_dir: Option<PathBuf>,

    /// Critical when expiration is within X days. Default 7
    #[arg(short, long, value_name = "EXPIRE_DAYS_CRITICAL")]
    pub critical: Option<u32>,

    /// Warning when expiration is within X days. Default 14
    #[arg(short, long, value_name = "EXPIRE_DAYS_WARNING")]
    pub warning: Option<u32>,

    /// Report files that cannot be parsed as certificates with a distinct message
    #[arg(long)]
    pub report_unreadable: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Name printed in front of the status line
    #[arg(long, value_name = "NAME")]
    pub check_name: Option<String>,

    /// Settings file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    /// Plugin output: one line per problem plus a status line (default)
    #[default]
    Text,
    /// JSON document
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
