//! Logger module
//!
//! Startup and failure messages, one timestamped line each, on stderr.
//! Requests are not logged.

mod format;

use chrono::Local;

use crate::resolver::StaticDir;

fn write_line(message: &str) {
    eprintln!("{}", format::line(&Local::now(), message));
}

pub fn log_server_start(url: &str) {
    write_line(&format!("Starting server on {url}"));
}

pub fn log_serving_dir(dir: &StaticDir) {
    write_line(&format!("Serving files from directory: {dir}"));
}

/// Log an error that ends the process
pub fn log_fatal(err: &dyn std::error::Error) {
    write_line(&err.to_string());
}

pub fn log_error(message: &str) {
    write_line(&format!("[ERROR] {message}"));
}

pub fn log_connection_error(err: &hyper::Error) {
    write_line(&format!("[ERROR] Failed to serve connection: {err}"));
}
