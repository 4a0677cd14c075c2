//! Atomic rename / replace helpers.
//! - Renames with context-rich errors, keeping the io::ErrorKind.
//! - On Windows, removes an existing destination first (rename doesn't overwrite there).
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use super::helpers::io_error_with_help_io;
use super::util::unique_temp_path;

pub(crate) fn try_atomic_move(src: &Path, dst: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        if let Err(e) = fs::remove_file(dst)
            && e.kind() != io::ErrorKind::NotFound
        {
            return Err(e).map_err(io_error_with_help_io("remove existing destination", dst));
        }
    }

    fs::rename(src, dst).map_err(io_error_with_help_io("rename temporary file into", dst))?;

    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // A failed directory sync does not undo the rename.
        let _ = File::open(parent).and_then(|d| d.sync_all());
    }

    Ok(())
}

/// Replace the contents of `path` with `bytes` via a temp file in the same directory.
pub(crate) fn replace_file_contents(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let tmp = unique_temp_path(dir);

    let written = File::create_new(&tmp)
        .and_then(|mut f| {
            f.write_all(bytes)?;
            f.sync_all()
        })
        .map_err(io_error_with_help_io("write temporary file", &tmp));
    if let Err(e) = written.and_then(|()| try_atomic_move(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}
