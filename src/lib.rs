//! photosort library.
//! Sorts photos and videos into a `<year>/<month>/<day>` tree by their EXIF
//! capture date, and shifts capture dates in bulk. Both binaries are thin
//! wrappers over [`app`].

pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod locate;
pub mod logging;
pub mod metadata;
pub mod output;
pub mod shift;
pub mod shutdown;
pub mod sort;

pub use config::{Config, LogLevel, RetryPolicy};
pub use errors::PhotosortError;
pub use locate::{MEDIA_PATTERNS, insensitive_pattern, locate, locate_media};
pub use metadata::{CaptureDate, ExifStore, MetadataStore};
pub use shift::{ShiftStats, resolve_delta, run_shift};
pub use sort::{SortStats, run_sort};
