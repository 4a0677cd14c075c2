//! Safe copy-and-rename with retry:
//! - Copies to a temp file in the destination directory
//! - Atomically renames temp -> dest, so a destination path is either absent or complete
//! - Retries failed attempts according to a RetryPolicy until shutdown is requested

use anyhow::{Result, anyhow};
use std::fs;
use std::io;
use std::path::Path;
use std::thread;
use tracing::{debug, warn};

use super::atomic::try_atomic_move;
use super::helpers::io_error_with_help_io;
use super::{io_copy, util};
use crate::config::RetryPolicy;
use crate::errors::PhotosortError;
use crate::shutdown;

/// Copy src -> temp in dest dir, then atomic rename temp -> dest.
/// The destination directory must already exist.
pub fn safe_copy_and_rename(src: &Path, dest: &Path) -> io::Result<u64> {
    let dest_dir = dest
        .parent()
        .ok_or_else(|| io::Error::other(format!("destination has no parent: {}", dest.display())))?;
    let tmp_path = util::unique_temp_path(dest_dir);

    let result = io_copy::copy_streaming(src, &tmp_path)
        .map_err(io_error_with_help_io("copy to temporary file", &tmp_path))
        .and_then(|bytes| try_atomic_move(&tmp_path, dest).map(|()| bytes));
    if result.is_err() {
        // Best-effort; the temp may never have been created.
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

/// Copy `src` to `dest`, retrying failed attempts per `policy`.
///
/// Gives up without retrying when the source disappears. Returns
/// [`PhotosortError::CopyRetriesExhausted`] once a bounded policy runs out, and
/// [`PhotosortError::Interrupted`] when shutdown is requested between attempts.
pub fn copy_with_retry(src: &Path, dest: &Path, policy: &RetryPolicy) -> Result<u64> {
    let mut attempts: u32 = 0;
    loop {
        attempts = attempts.saturating_add(1);
        match safe_copy_and_rename(src, dest) {
            Ok(bytes) => {
                debug!(src = %src.display(), dest = %dest.display(), bytes, attempts, "copied");
                return Ok(bytes);
            }
            Err(e) => {
                warn!(
                    src = %src.display(),
                    dest = %dest.display(),
                    attempt = attempts,
                    error = %e,
                    "copy failed"
                );
                if !src.exists() {
                    return Err(anyhow!(e).context(format!(
                        "source '{}' disappeared during copy",
                        src.display()
                    )));
                }
                if policy.exhausted(attempts) {
                    return Err(PhotosortError::CopyRetriesExhausted {
                        src: src.to_path_buf(),
                        dest: dest.to_path_buf(),
                        attempts,
                    }
                    .into());
                }
            }
        }
        if shutdown::is_requested() {
            return Err(PhotosortError::Interrupted.into());
        }
        thread::sleep(policy.delay);
    }
}
