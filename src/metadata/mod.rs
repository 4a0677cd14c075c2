//! Capture-date metadata.
//!
//! The engines talk to a [`MetadataStore`]; [`ExifStore`] is the production
//! implementation (kamadak-exif for reading, an in-place JPEG patch for
//! writing). The free functions here are what the engines call: they never
//! return errors, every failure is logged to the diagnostic stream and
//! reported as "no date" or `false`.

mod capture;
mod exif_reader;
mod exif_writer;

use anyhow::Result;
use chrono::NaiveDateTime;
use std::path::Path;
use tracing::{debug, warn};

pub use capture::{CaptureDate, EXIF_DATETIME_FORMAT, parse_capture_timestamp};

/// Access to a file's capture-date tags.
pub trait MetadataStore {
    /// Text of `DateTimeOriginal`; `Ok(None)` when the file has no such tag.
    fn read_date_time_original(&self, path: &Path) -> Result<Option<String>>;

    /// Set both `DateTimeOriginal` and `DateTimeDigitized` to `when`.
    fn write_capture_timestamp(&self, path: &Path, when: NaiveDateTime) -> Result<()>;
}

/// EXIF tags embedded in the media file itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExifStore;

impl MetadataStore for ExifStore {
    fn read_date_time_original(&self, path: &Path) -> Result<Option<String>> {
        exif_reader::read_date_time_original(path)
    }

    fn write_capture_timestamp(&self, path: &Path, when: NaiveDateTime) -> Result<()> {
        exif_writer::write_capture_timestamp(path, when)
    }
}

fn read_text(store: &dyn MetadataStore, path: &Path) -> Option<String> {
    match store.read_date_time_original(path) {
        Ok(Some(text)) => Some(text),
        Ok(None) => {
            warn!(path = %path.display(), "no DateTimeOriginal tag");
            None
        }
        Err(e) => {
            warn!(path = %path.display(), error = %format!("{e:#}"), "unable to read metadata");
            None
        }
    }
}

/// Capture day of `path`, or `None` (logged) when it cannot be determined.
pub fn extract_capture_date(store: &dyn MetadataStore, path: &Path) -> Option<CaptureDate> {
    let text = read_text(store, path)?;
    let date = CaptureDate::parse(&text);
    match &date {
        Some(d) => debug!(path = %path.display(), date = %d, "extracted capture date"),
        None => warn!(path = %path.display(), value = %text, "unparseable DateTimeOriginal"),
    }
    date
}

/// Full capture timestamp of `path`, or `None` (logged).
pub fn extract_capture_timestamp(store: &dyn MetadataStore, path: &Path) -> Option<NaiveDateTime> {
    let text = read_text(store, path)?;
    let ts = parse_capture_timestamp(&text);
    if ts.is_none() {
        warn!(path = %path.display(), value = %text, "unparseable DateTimeOriginal");
    }
    ts
}

/// Rewrite the capture timestamp; `false` (logged) on failure.
pub fn write_capture_timestamp(
    store: &dyn MetadataStore,
    path: &Path,
    when: NaiveDateTime,
) -> bool {
    match store.write_capture_timestamp(path, when) {
        Ok(()) => true,
        Err(e) => {
            warn!(path = %path.display(), error = %format!("{e:#}"), "unable to write metadata");
            false
        }
    }
}
