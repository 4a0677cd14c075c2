//! Where a sorted file lands inside the target tree.

use std::path::{Path, PathBuf};

use crate::metadata::CaptureDate;

/// Directory (under the target base) mirroring the source tree for files without a date.
pub const NO_DATE_DIR: &str = "no_date";

/// `target/<year>/<month>/<day>/<file name of src>`.
pub fn dated_destination(target_base: &Path, date: &CaptureDate, src: &Path) -> PathBuf {
    let mut dest = target_base.join(&date.year).join(&date.month).join(&date.day);
    if let Some(name) = src.file_name() {
        dest.push(name);
    }
    dest
}

/// `target/no_date/<path of src relative to source_base>`.
///
/// A source outside `source_base` (not produced by the locator) keeps only its
/// file name.
pub fn undated_destination(source_base: &Path, target_base: &Path, src: &Path) -> PathBuf {
    let relative = src
        .strip_prefix(source_base)
        .ok()
        .or_else(|| src.file_name().map(Path::new))
        .unwrap_or(src);
    target_base.join(NO_DATE_DIR).join(relative)
}
