//! Duplicate-slot naming for the `duplicates/` bucket.
//!
//! Policy:
//! - A colliding file that differs from the one already in place is stored as
//!   `<stem>.<n>.jpg` for the lowest free `n` in `0..MAX_DUPLICATE_SLOTS`.
//! - The `.jpg` suffix is used whatever the original media type was.
//!
//! Notes:
//! - Slots are not reserved; the choice reflects the filesystem state at the
//!   moment of the check. Only one writer is supported.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Directory (under the target base) that receives non-identical collisions.
pub const DUPLICATES_DIR: &str = "duplicates";

/// Number of numbered slots tried per stem before a file is abandoned.
pub const MAX_DUPLICATE_SLOTS: u32 = 1000;

/// `photo.jpg`, 2 -> `photo.2.jpg`; `clip.MOV`, 0 -> `clip.0.jpg`.
pub fn duplicate_name(file_name: &OsStr, n: u32) -> OsString {
    let stem = Path::new(file_name)
        .file_stem()
        .unwrap_or(file_name)
        .to_os_string();
    let mut name = stem;
    name.push(format!(".{n}.jpg"));
    name
}

/// Every candidate slot for `file_name` inside `dup_dir`, lowest first.
pub fn duplicate_candidates<'a>(
    dup_dir: &'a Path,
    file_name: &'a OsStr,
) -> impl Iterator<Item = PathBuf> + 'a {
    (0..MAX_DUPLICATE_SLOTS).map(move |n| dup_dir.join(duplicate_name(file_name, n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_replaces_extension_with_counter_and_jpg() {
        assert_eq!(duplicate_name(OsStr::new("photo.jpg"), 2), "photo.2.jpg");
        assert_eq!(duplicate_name(OsStr::new("clip.MOV"), 0), "clip.0.jpg");
    }

    #[test]
    fn only_the_last_extension_is_dropped() {
        assert_eq!(
            duplicate_name(OsStr::new("party.edited.png"), 7),
            "party.edited.7.jpg"
        );
    }

    #[test]
    fn candidates_cover_the_full_range_in_order() {
        let dir = Path::new("/t/duplicates");
        let all: Vec<_> = duplicate_candidates(dir, OsStr::new("a.jpg")).collect();
        assert_eq!(all.len(), MAX_DUPLICATE_SLOTS as usize);
        assert_eq!(all[0], dir.join("a.0.jpg"));
        assert_eq!(all[999], dir.join("a.999.jpg"));
    }
}
