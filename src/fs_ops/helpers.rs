//! I/O helper utilities.
//!
//! Provides small adapters to enrich io::Error with actionable context/hints,
//! usable with map_err in both io::Result and anyhow::Result code paths.
//!
//! Usage:
//!   // in functions returning anyhow::Result<_>
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create dir", dir))?;
//!
//!   // in functions returning io::Result<_>
//!   File::open(p).map_err(io_error_with_help_io("open file", p))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

fn hint_for(kind: io::ErrorKind) -> Option<&'static str> {
    use io::ErrorKind::*;
    let hint = match kind {
        PermissionDenied => "permission denied; check ownership and write permissions.",
        NotFound => "path not found; verify it exists.",
        AlreadyExists => "already exists; pick a unique name or remove the target.",
        StorageFull => "insufficient space on device.",
        ReadOnlyFilesystem => "read-only filesystem; cannot write here.",
        ResourceBusy => "resource busy; ensure no other process is writing.",
        CrossesDevices => "cross-filesystem; atomic rename not possible.",
        IsADirectory => "is a directory; expected a regular file.",
        NotADirectory => "a path component is not a directory.",
        WouldBlock | TimedOut | Interrupted => {
            "busy/timed out; retry after the current write finishes."
        }
        UnexpectedEof => "file ended early; it may be truncated or still being written.",
        _ => return None,
    };
    Some(hint)
}

/// Format a human-friendly message with op/path plus a kind-based hint.
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    if let Some(hint) = hint_for(e.kind()) {
        msg.push_str(" - ");
        msg.push_str(hint);
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {}]", code));
    }
    msg
}

/// Adapter for anyhow::Result code.
/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

/// Adapter for io::Result code (when the surrounding function returns io::Result).
/// Keeps the original ErrorKind so callers can still classify the failure.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), build_message(op, path, &e))
}
