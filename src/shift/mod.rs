//! Date-shift engine: move every file's capture timestamp by a fixed offset.

mod delta;

pub use delta::{parse_calendar_date, parse_shift_days, resolve_delta};

use anyhow::Result;
use chrono::TimeDelta;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::PhotosortError;
use crate::locate::locate_media;
use crate::metadata::{MetadataStore, extract_capture_timestamp, write_capture_timestamp};
use crate::output as out;
use crate::shutdown;

/// Totals for one shift run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShiftStats {
    pub files: u64,
    /// Rewritten (or, under dry-run, would have been)
    pub shifted: u64,
    /// No readable timestamp, or the shifted one is out of range
    pub skipped: u64,
    /// The new timestamp could not be written
    pub failed: u64,
}

/// Shift the capture timestamp of every media file under `source_base` by `delta`.
pub fn run_shift(
    config: &Config,
    source_base: &Path,
    delta: TimeDelta,
    store: &dyn MetadataStore,
) -> Result<ShiftStats> {
    let mut stats = ShiftStats::default();

    // Collected up front: rewriting a file replaces its directory entry, and
    // an open directory walk may then report it a second time.
    let files: Vec<_> = locate_media(source_base)?.collect();
    for src in files {
        if shutdown::is_requested() {
            return Err(PhotosortError::Interrupted.into());
        }
        stats.files += 1;

        let Some(old) = extract_capture_timestamp(store, &src) else {
            stats.skipped += 1;
            debug!(path = %src.display(), "no date metadata");
            if config.verbose {
                out::print_user(&format!(
                    "Skipping {} because it has no date metadata",
                    src.display()
                ));
            }
            continue;
        };
        let Some(new) = old.checked_add_signed(delta) else {
            stats.skipped += 1;
            warn!(path = %src.display(), from = %old, "shifted date out of range");
            continue;
        };

        debug!(path = %src.display(), from = %old, to = %new, "shifting");
        if config.verbose {
            out::print_user(&format!(
                "[{}] {} changing date from {} to {}",
                stats.files,
                src.display(),
                old,
                new
            ));
        }

        if config.dry_run || write_capture_timestamp(store, &src, new) {
            stats.shifted += 1;
        } else {
            stats.failed += 1;
        }
    }

    info!(
        files = stats.files,
        shifted = stats.shifted,
        skipped = stats.skipped,
        failed = stats.failed,
        dry_run = config.dry_run,
        "shift finished"
    );
    Ok(stats)
}
