//! Streaming copy into a fresh file.
//!
//! - Writes to a newly created destination file (never clobbers).
//! - Buffered I/O with large (1 MiB) buffers to reduce syscall count.
//! - Destination contents are synced before returning so the later rename
//!   never exposes a half-written file.
//!
//! Snapshot semantics: the source is read once from start to EOF; bytes appended
//! concurrently are not included.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

pub(crate) const BUF_SIZE: usize = 1024 * 1024;

/// Copy `src` -> `dst` (which must not exist yet). Returns the byte count.
pub(crate) fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    let src_f = File::open(src)?;
    let dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(bytes)
}
