//! Logging to a size-rotated file.
//!
//! Writes to `~/.config/tally/tally.log` (or platform equivalent) with
//! 10 MB rotation. Stdout belongs to the meter, so nothing is logged there.
//! Set `DEBUG_LOGGING=1` to enable debug output for tally crates.

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEBUG_DIRECTIVE: &str = "info,tally=debug,tally_cli=debug,tally_core=debug";

/// Initialize file logging.
///
/// Returns a `WorkerGuard` that must be held for the process lifetime so
/// buffered lines are flushed on exit. Falls back to warnings on stderr and
/// returns `None` when the log file cannot be created.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok_and(|v| v != "0");

    let Some(log_dir) = dirs::config_dir().map(|config| config.join("tally")) else {
        init_stderr_only();
        return None;
    };

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!(
            "Failed to create log directory {:?}: {}, logging to stderr",
            log_dir, e
        );
        init_stderr_only();
        return None;
    }

    // 10 MB, keep tally.log and tally.log.1
    let log_path = log_dir.join("tally.log");
    let file_appender = match BasicRollingFileAppender::new(
        &log_path,
        RollingConditionBasic::new().max_size(10 * 1024 * 1024),
        1,
    ) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Failed to create log file at {:?}: {}", log_path, e);
            init_stderr_only();
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter = EnvFilter::new(if debug_logging { DEBUG_DIRECTIVE } else { "info" });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(filter)
        .init();

    tracing::info!(log_file = ?log_path, debug_logging, "tally logging initialized");

    Some(guard)
}

/// Warnings only, so the meter stays readable.
fn init_stderr_only() {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(EnvFilter::new("warn"))
        .init();
}
