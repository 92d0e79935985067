//! Output formatting for check results
//!
//! Text output follows the monitoring-plugin convention: one line per
//! problem certificate followed by a single status line. JSON output emits
//! one document instead.

pub mod json;
pub mod plugin;

pub use json::print_json;
pub use plugin::{print_check, print_status, status_line, unknown_line};
