//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to
//! every target.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger (stdout, `info`)
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional daily rolling file output
///
/// Falls back to stdout when the directory cannot be created. Safe to call
/// more than once; later calls are ignored.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if std::fs::create_dir_all(log_path).is_ok() {
            let file_appender = tracing_appender::rolling::daily(log_path, "abocado-server");
            let _ = builder.with_ansi(false).with_writer(file_appender).try_init();
            return;
        }
        eprintln!("Cannot create log directory {dir}, logging to stdout");
    }

    let _ = builder.try_init();
}
