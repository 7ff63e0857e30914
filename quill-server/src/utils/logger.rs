//! Logging Infrastructure
//!
//! Structured logging setup with optional rolling file output.
//! The filter comes from `RUST_LOG` when set; the `LOG_DIR` environment
//! variable (read by `main`) switches output to a daily rolling file.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Filter applied when RUST_LOG is not set
const DEFAULT_FILTER: &str = "quill_server=info,tower_http=info";

/// Initialize the logger with stdout output
pub fn init_logger() {
    init_logger_with_file(None);
}

/// Initialize the logger with optional file output
///
/// When `log_dir` names an existing directory, output goes to a daily
/// rolling file inside it instead of stdout.
pub fn init_logger_with_file(log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir
        && Path::new(dir).exists()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "quill-server");
        subscriber.with_writer(file_appender).init();
        return;
    }

    subscriber.init();
}
