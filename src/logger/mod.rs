//! Logger module
//!
//! Logging utilities for the slide server:
//! - server lifecycle logging
//! - access logging in configurable formats
//! - error and warning logging
//! - optional file-based log destinations

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration.
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info(&format!("accepting connections at http://{addr}/"));
    write_info(&format!(
        "serving slides from '{}' (theme: {}, transition: {})",
        config.presentation.path, config.presentation.theme, config.presentation.transition
    ));
    write_info(&format!("log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("error log: {path}"));
    }
}

pub fn log_shutdown() {
    write_info("shutting down");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}
