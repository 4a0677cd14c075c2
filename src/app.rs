//! Application orchestrator for both binaries.
//! Loads config and applies CLI overrides, initializes logging, installs the
//! Ctrl-C handler, validates paths and hands over to the sort or shift engine.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, error};
use tracing_appender::non_blocking::WorkerGuard;

use crate::cli::{ShiftArgs, SortArgs};
use crate::config::{Config, absolute_normalized, ensure_target_outside_source, load_config};
use crate::errors::PhotosortError;
use crate::logging::init_tracing;
use crate::metadata::ExifStore;
use crate::output as out;
use crate::{shift, shutdown, sort};

type GuardSlot = Arc<Mutex<Option<WorkerGuard>>>;

/// Initialize logging and install the interrupt handler.
/// The returned slot keeps the file appender alive; the handler empties it to flush.
fn start_runtime(cfg: &Config) -> Result<GuardSlot> {
    let guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json_logs)
        .context("initialize logging")?;

    let guard_slot = Arc::new(Mutex::new(guard));
    let handler_slot = Arc::clone(&guard_slot);
    ctrlc::set_handler(move || {
        shutdown::request();
        out::print_warn("Received interrupt; stopping after the current step...");
        if let Ok(mut g) = handler_slot.lock() {
            let _ = g.take();
        }
    })
    .context("install Ctrl-C handler")?;
    Ok(guard_slot)
}

fn log_fatal(e: &anyhow::Error) {
    match e.downcast_ref::<PhotosortError>() {
        Some(pe) => error!(code = pe.code(), kind = pe.kind(), "{pe}"),
        None => error!(error = %format!("{e:#}"), "run failed"),
    }
}

fn source_dir(path: &Path) -> Result<PathBuf> {
    let abs = absolute_normalized(path)?;
    if !abs.is_dir() {
        bail!("source directory '{}' does not exist or is not a directory", abs.display());
    }
    Ok(abs)
}

/// `photosort`: copy media into the dated target tree.
pub fn run_sort(args: SortArgs) -> Result<()> {
    let mut cfg = load_config();
    args.apply_overrides(&mut cfg);
    let _guard = start_runtime(&cfg)?;
    debug!(?args, ?cfg, "starting photosort");

    let source_base = absolute_normalized(&args.source_directory)?;
    let target_base = absolute_normalized(&args.target_directory)?;
    if cfg.verbose {
        out::print_user(&format!("Source directory: {}", source_base.display()));
        out::print_user(&format!("Target directory: {}", target_base.display()));
        if cfg.dry_run {
            out::print_info("Dry run: nothing will be copied.");
        }
    }
    ensure_target_outside_source(&source_base, &target_base)?;
    let source_base = source_dir(&source_base).inspect_err(log_fatal)?;

    let stats =
        sort::run_sort(&cfg, &source_base, &target_base, &ExifStore).inspect_err(log_fatal)?;

    if cfg.verbose {
        let verb = if cfg.dry_run { "Would copy" } else { "Copied" };
        out::print_success(&format!(
            "{verb} {} of {} files. Exact dups: {} Non-exact dups: {} No date: {} Abandoned: {}",
            stats.copied,
            stats.files,
            stats.exact_duplicates,
            stats.nonexact_duplicates,
            stats.no_date,
            stats.abandoned
        ));
    }
    Ok(())
}

/// `phototimeshift`: move every capture timestamp by a fixed offset.
pub fn run_shift(args: ShiftArgs) -> Result<()> {
    let mut cfg = load_config();
    args.apply_overrides(&mut cfg);
    let _guard = start_runtime(&cfg)?;
    debug!(?args, ?cfg, "starting phototimeshift");

    let delta = shift::resolve_delta(
        args.shift_days.as_deref(),
        args.from_date.as_deref(),
        args.to_date.as_deref(),
    )
    .map_err(anyhow::Error::from)
    .inspect_err(log_fatal)?;

    let source_base = absolute_normalized(&args.source_directory)?;
    if cfg.verbose {
        out::print_user(&format!("Source directory: {}", source_base.display()));
        if cfg.dry_run {
            out::print_info("Dry run: no metadata will be written.");
        }
    }
    let source_base = source_dir(&source_base).inspect_err(log_fatal)?;

    let stats = shift::run_shift(&cfg, &source_base, delta, &ExifStore).inspect_err(log_fatal)?;

    if cfg.verbose {
        let verb = if cfg.dry_run { "Would shift" } else { "Shifted" };
        out::print_success(&format!(
            "{verb} {} of {} files by {} days. Skipped: {} Failed: {}",
            stats.shifted,
            stats.files,
            delta.num_days(),
            stats.skipped,
            stats.failed
        ));
    }
    Ok(())
}
