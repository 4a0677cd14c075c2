//! Tracing initialization.
//! Builds a subscriber with EnvFilter, supports compact or JSON formats, and optional file logging.
//!
//! Behavior:
//! - Log level is driven by LogLevel (no RUST_LOG override here).
//! - Diagnostics go to stderr; stdout is left to the tools' own output.
//! - If `log_file` is provided and passes safety checks, a non-blocking file layer is added.
//!
//! Implementation notes:
//! - File logging uses tracing_appender::non_blocking to avoid blocking on I/O.
//! - We refuse file logging if any ancestor of the file path is a symlink.

use anyhow::{Context, Result};
use chrono::Local;
use std::fmt as stdfmt;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{LogLevel, path_has_symlink_ancestor};
use crate::output as out;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%d/%m/%y %H:%M:%S"))
    }
}

/// quiet -> ERROR, normal -> INFO, info -> DEBUG, debug -> TRACE.
pub fn to_level_filter(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Info => LevelFilter::DEBUG,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

fn env_filter_from_level(lvl: &LogLevel) -> EnvFilter {
    EnvFilter::default().add_directive(to_level_filter(lvl).into())
}

/// Open a non-blocking appender for `path`, or explain on stderr why not.
fn maybe_open_non_blocking_writer(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    match path_has_symlink_ancestor(path) {
        Ok(false) => {}
        Ok(true) => {
            out::print_warn(&format!(
                "Refusing to log to {}: an ancestor directory is a symlink. \
                 Logging to stderr only.",
                path.display()
            ));
            return None;
        }
        Err(e) => {
            out::print_warn(&format!(
                "Cannot check log path {} for symlinks ({e}). Logging to stderr only.",
                path.display()
            ));
            return None;
        }
    }

    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(tracing_appender::non_blocking(file)),
        Err(e) => {
            out::print_warn(&format!(
                "Cannot open log file {} ({e}). Logging to stderr only.",
                path.display()
            ));
            None
        }
    }
}

/// Initialize tracing based on LogLevel and format. Returns an optional WorkerGuard
/// if a file appender is created (must be held until shutdown to flush logs).
pub fn init_tracing(
    lvl: &LogLevel,
    log_file: Option<&Path>,
    json: bool,
) -> Result<Option<WorkerGuard>> {
    let (file_writer, guard) = log_file.and_then(maybe_open_non_blocking_writer).unzip();
    let ansi = atty::is(atty::Stream::Stderr);

    // Each format/destination pair is an optional layer so the subscriber type
    // is the same whichever combination is active.
    let stderr_json = json.then(|| {
        tsfmt::layer()
            .event_format(tsfmt::format().json())
            .with_timer(LocalHumanTime)
            .with_target(true)
            .with_writer(io::stderr)
    });
    let stderr_compact = (!json).then(|| {
        tsfmt::layer()
            .with_timer(LocalHumanTime)
            .with_target(false)
            .with_ansi(ansi)
            .compact()
            .with_writer(io::stderr)
    });
    let file_json = file_writer.clone().filter(|_| json).map(|w| {
        tsfmt::layer()
            .event_format(tsfmt::format().json())
            .with_timer(LocalHumanTime)
            .with_target(true)
            .with_writer(w)
    });
    let file_compact = file_writer.filter(|_| !json).map(|w| {
        tsfmt::layer()
            .with_timer(LocalHumanTime)
            .with_target(true)
            .with_ansi(false)
            .compact()
            .with_writer(w)
    });

    registry()
        .with(env_filter_from_level(lvl))
        .with(stderr_json)
        .with(stderr_compact)
        .with(file_json)
        .with(file_compact)
        .try_init()
        .context("install tracing subscriber")?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_one_step_down() {
        assert_eq!(to_level_filter(&LogLevel::Quiet), LevelFilter::ERROR);
        assert_eq!(to_level_filter(&LogLevel::Normal), LevelFilter::INFO);
        assert_eq!(to_level_filter(&LogLevel::Info), LevelFilter::DEBUG);
        assert_eq!(to_level_filter(&LogLevel::Debug), LevelFilter::TRACE);
    }
}
