//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional JSON formatting and file output
///
/// File output is a daily rolling `storefront.<date>` file and only used
/// when `log_dir` exists.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level
        .and_then(|l| l.parse().ok())
        .unwrap_or(tracing::Level::INFO);

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir
        .map(Path::new)
        .filter(|path| path.exists())
        .map(|path| tracing_appender::rolling::daily(path, "storefront"));

    match (json, file_appender) {
        (true, Some(appender)) => subscriber.json().with_writer(appender).init(),
        (true, None) => subscriber.json().init(),
        (false, Some(appender)) => subscriber.with_writer(appender).init(),
        (false, None) => subscriber.init(),
    }
}
