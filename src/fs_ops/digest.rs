//! Whole-file content digests for binary-duplicate detection.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::trace;

use super::helpers::io_error_with_help_io;
use super::io_copy::BUF_SIZE;

/// SHA-256 of the whole file, read in fixed-size blocks until EOF.
pub fn file_digest(path: &Path) -> io::Result<[u8; 32]> {
    let mut file = File::open(path).map_err(io_error_with_help_io("open for hashing", path))?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = file
            .read(&mut buf)
            .map_err(io_error_with_help_io("read for hashing", path))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize().into())
}

/// True when both files have identical content.
///
/// Files of different length are different without hashing either.
pub fn is_binary_duplicate(a: &Path, b: &Path) -> io::Result<bool> {
    let len_a = a.metadata().map_err(io_error_with_help_io("stat", a))?.len();
    let len_b = b.metadata().map_err(io_error_with_help_io("stat", b))?.len();
    if len_a != len_b {
        return Ok(false);
    }
    let da = file_digest(a)?;
    let db = file_digest(b)?;
    trace!(
        a = %a.display(),
        b = %b.display(),
        digest_a = %hex::encode(da),
        digest_b = %hex::encode(db),
        "compared digests"
    );
    Ok(da == db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn digest_of_known_content() {
        let td = tempdir().unwrap();
        let p = td.path().join("abc");
        fs::write(&p, b"abc").unwrap();
        assert_eq!(
            hex::encode(file_digest(&p).unwrap()),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn same_bytes_are_duplicates() {
        let td = tempdir().unwrap();
        let a = td.path().join("a.jpg");
        let b = td.path().join("b.jpg");
        fs::write(&a, b"same").unwrap();
        fs::write(&b, b"same").unwrap();
        assert!(is_binary_duplicate(&a, &b).unwrap());
    }

    #[test]
    fn same_length_different_bytes_are_not() {
        let td = tempdir().unwrap();
        let a = td.path().join("a.jpg");
        let b = td.path().join("b.jpg");
        fs::write(&a, b"aaaa").unwrap();
        fs::write(&b, b"aaab").unwrap();
        assert!(!is_binary_duplicate(&a, &b).unwrap());
    }

    #[test]
    fn missing_file_is_an_error() {
        let td = tempdir().unwrap();
        let a = td.path().join("a.jpg");
        fs::write(&a, b"x").unwrap();
        let err = is_binary_duplicate(&a, &td.path().join("gone.jpg")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
