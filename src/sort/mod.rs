//! Copy-sort engine.
//!
//! Copies every located media file into `target/<year>/<month>/<day>/`, or
//! `target/no_date/<relative path>` when no capture date can be read.
//! Same-named files already at the destination are compared by content:
//! identical ones are skipped, different ones go to the lowest free slot in
//! `target/duplicates/`.

mod layout;

pub use layout::{NO_DATE_DIR, dated_destination, undated_destination};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::errors::PhotosortError;
use crate::fs_ops::{self, DUPLICATES_DIR, copy_with_retry, is_binary_duplicate};
use crate::locate::locate_media;
use crate::metadata::{MetadataStore, extract_capture_date};
use crate::output as out;
use crate::shutdown;

/// Totals for one sort run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortStats {
    /// Media files seen
    pub files: u64,
    /// Skipped because identical content was already in the target tree
    pub exact_duplicates: u64,
    /// Stored in the duplicates directory under a numbered name
    pub nonexact_duplicates: u64,
    /// Sorted into `no_date/`
    pub no_date: u64,
    /// Copied (or, under dry-run, would have been copied)
    pub copied: u64,
    /// Given up after an error; the run carried on
    pub abandoned: u64,
}

/// Result of looking for a free duplicate slot.
enum Slot {
    Free(PathBuf),
    /// An occupied slot already holds this exact content.
    AlreadyStored(PathBuf),
    /// Every slot is taken by different content.
    Exhausted,
}

fn narrate(config: &Config, msg: String) {
    debug!("{msg}");
    if config.verbose {
        out::print_user(&msg);
    }
}

fn log_abandoned(src: &Path, err: &anyhow::Error) {
    match err.downcast_ref::<PhotosortError>() {
        Some(pe) => error!(path = %src.display(), code = pe.code(), kind = pe.kind(), "{pe}"),
        None => error!(path = %src.display(), error = %format!("{err:#}"), "giving up on file"),
    }
}

/// Sort every media file under `source_base` into `target_base`.
///
/// Returns early only when a shutdown is requested; per-file problems are
/// logged and counted.
pub fn run_sort(
    config: &Config,
    source_base: &Path,
    target_base: &Path,
    store: &dyn MetadataStore,
) -> Result<SortStats> {
    let mut stats = SortStats::default();

    for src in locate_media(source_base)? {
        if shutdown::is_requested() {
            return Err(PhotosortError::Interrupted.into());
        }
        stats.files += 1;
        narrate(
            config,
            format!(
                "[{}] {} Exact dups: {} Non-exact dups: {} No date: {}",
                stats.files,
                src.display(),
                stats.exact_duplicates,
                stats.nonexact_duplicates,
                stats.no_date
            ),
        );

        if let Err(e) = sort_one(config, source_base, target_base, store, &src, &mut stats) {
            if matches!(e.downcast_ref::<PhotosortError>(), Some(PhotosortError::Interrupted)) {
                return Err(e);
            }
            log_abandoned(&src, &e);
            stats.abandoned += 1;
        }
    }

    info!(
        files = stats.files,
        copied = stats.copied,
        exact_duplicates = stats.exact_duplicates,
        nonexact_duplicates = stats.nonexact_duplicates,
        no_date = stats.no_date,
        abandoned = stats.abandoned,
        dry_run = config.dry_run,
        "sort finished"
    );
    Ok(stats)
}

fn sort_one(
    config: &Config,
    source_base: &Path,
    target_base: &Path,
    store: &dyn MetadataStore,
    src: &Path,
    stats: &mut SortStats,
) -> Result<()> {
    let mut dest = match extract_capture_date(store, src) {
        Some(date) => {
            narrate(config, format!("Date for {} is {}", src.display(), date));
            dated_destination(target_base, &date, src)
        }
        None => {
            stats.no_date += 1;
            narrate(config, format!("Unable to extract date for file {}", src.display()));
            undated_destination(source_base, target_base, src)
        }
    };

    if dest.exists() {
        let identical = is_binary_duplicate(src, &dest)
            .with_context(|| format!("compare with existing {}", dest.display()))?;
        if identical {
            stats.exact_duplicates += 1;
            narrate(config, format!("Exact duplicate found at {}", src.display()));
            return Ok(());
        }
        match free_duplicate_slot(src, &target_base.join(DUPLICATES_DIR))? {
            Slot::AlreadyStored(existing) => {
                stats.exact_duplicates += 1;
                narrate(
                    config,
                    format!(
                        "Exact duplicate found at {} (stored as {})",
                        src.display(),
                        existing.display()
                    ),
                );
                return Ok(());
            }
            Slot::Exhausted => {
                stats.nonexact_duplicates += 1;
                return Err(PhotosortError::DuplicateSlotsExhausted(src.to_path_buf()).into());
            }
            Slot::Free(slot) => {
                stats.nonexact_duplicates += 1;
                narrate(
                    config,
                    format!(
                        "Non-exact duplicate found at {}. Copying to {}.",
                        src.display(),
                        slot.display()
                    ),
                );
                dest = slot;
            }
        }
    }

    narrate(config, format!("Copying {} to {}", src.display(), dest.display()));
    if config.dry_run {
        stats.copied += 1;
        return Ok(());
    }

    if let Some(dir) = dest.parent()
        && !dir.exists()
    {
        narrate(config, format!("Making target sub dir {}", dir.display()));
        fs::create_dir_all(dir).map_err(fs_ops::io_error_with_help("create directory", dir))?;
    }

    copy_with_retry(src, &dest, &config.copy_retry)?;
    stats.copied += 1;
    Ok(())
}

/// Lowest free `duplicates/<stem>.<n>.jpg`, unless one of the occupied slots
/// already holds the same content.
fn free_duplicate_slot(src: &Path, dup_dir: &Path) -> Result<Slot> {
    let Some(name) = src.file_name() else {
        anyhow::bail!("source has no file name: {}", src.display());
    };
    for candidate in fs_ops::duplicate_candidates(dup_dir, name) {
        if !candidate.exists() {
            return Ok(Slot::Free(candidate));
        }
        match is_binary_duplicate(src, &candidate) {
            Ok(true) => return Ok(Slot::AlreadyStored(candidate)),
            Ok(false) => {}
            Err(e) => warn!(
                slot = %candidate.display(),
                error = %e,
                "cannot compare duplicate slot"
            ),
        }
    }
    Ok(Slot::Exhausted)
}
