//! Filesystem operations module.
//! Streaming copy with temp-file + rename, retrying copies, content digests,
//! duplicate-slot naming and I/O error helpers.

mod atomic;
mod copy;
mod digest;
mod duplicate;
mod helpers;
mod io_copy;
mod util;

pub(crate) use atomic::replace_file_contents;
pub use copy::{copy_with_retry, safe_copy_and_rename};
pub use digest::{file_digest, is_binary_duplicate};
pub use duplicate::{DUPLICATES_DIR, MAX_DUPLICATE_SLOTS, duplicate_candidates, duplicate_name};
pub use helpers::{io_error_with_help, io_error_with_help_io};
