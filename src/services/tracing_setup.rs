//! Tracing subscriber setup
//!
//! The TUI owns stdout, so every log line goes to a file.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber writing to `log_file_path`.
///
/// Filtering follows `RUST_LOG`, with this crate at DEBUG by default.
/// Returns false if the log file couldn't be created; the app keeps running
/// without logs in that case.
pub fn init_global(log_file_path: &Path) -> bool {
    let Ok(log_file) = File::create(log_file_path) else {
        return false;
    };

    build_subscriber(log_file).try_init().is_ok()
}

/// Build a subscriber with file logging.
///
/// Shared between production and tests.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("folio=debug".parse().expect("static directive parses"))
        // ureq and rustls are chatty at debug
        .add_directive("ureq=info".parse().expect("static directive parses"))
        .add_directive("rustls=info".parse().expect("static directive parses"));

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
