//! check-ssl-certs - checks the expiration of SSL certificates in a directory
//!
//! Exit codes follow the monitoring-plugin convention:
//! 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN.

use anyhow::Context;
use check_ssl_certs::cli::{Cli, OutputFormat};
use check_ssl_certs::config::{CheckConfig, DEFAULT_CHECK_NAME};
use check_ssl_certs::models::UNKNOWN_EXIT_CODE;
use check_ssl_certs::{output, run_check};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for plugin output
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match CheckConfig::from_cli(&cli).context("Failed to load configuration") {
        Ok(config) => config,
        Err(e) => exit_unknown(&status_name(&cli, None), &e),
    };

    match run(&cli, &config) {
        Ok(code) => std::process::exit(code),
        Err(e) => exit_unknown(&status_name(&cli, Some(&config)), &e),
    }
}

/// Name for the status line; the merged configuration wins once it loaded
fn status_name(cli: &Cli, config: Option<&CheckConfig>) -> String {
    match config {
        Some(config) => config.check_name.clone(),
        None => cli
            .check_name
            .clone()
            .unwrap_or_else(|| DEFAULT_CHECK_NAME.to_string()),
    }
}

fn exit_unknown(check_name: &str, error: &anyhow::Error) -> ! {
    println!("{}", output::unknown_line(check_name, &format!("{:#}", error)));
    std::process::exit(UNKNOWN_EXIT_CODE);
}

fn run(cli: &Cli, config: &CheckConfig) -> anyhow::Result<i32> {
    tracing::debug!(?config, "resolved configuration");

    let now = chrono::Utc::now();

    let report = match cli.format {
        OutputFormat::Text => {
            let report = run_check(config, now, output::print_check)?;
            output::print_status(&config.check_name, &report);
            report
        }
        OutputFormat::Json => {
            let report = run_check(config, now, |_| {})?;
            output::print_json(&config.check_name, &report)?;
            report
        }
    };

    Ok(report.exit_code())
}
