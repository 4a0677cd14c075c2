//! Media file discovery.
//!
//! Walks a directory tree depth-first (walkdir) and yields files whose name
//! matches a case-insensitive glob. Directory symlinks are not followed;
//! symlinks to regular files are yielded like the files themselves.

use anyhow::{Context, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use walkdir::WalkDir;

/// One full walk per pattern, in this order.
pub const MEDIA_PATTERNS: [&str; 4] = ["*.jpg", "*.png", "*.mov", "*.avi"];

/// `*.jpg` -> `*.[jJ][pP][gG]`.
pub fn insensitive_pattern(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 4);
    for c in pattern.chars() {
        if c.is_alphabetic() {
            out.push('[');
            out.extend(c.to_lowercase());
            out.extend(c.to_uppercase());
            out.push(']');
        } else {
            out.push(c);
        }
    }
    out
}

/// Lazily yield absolute paths of files under `root` whose file name matches
/// `pattern` ignoring case.
pub fn locate(pattern: &str, root: &Path) -> Result<impl Iterator<Item = PathBuf> + use<>> {
    let glob = Pattern::new(&insensitive_pattern(pattern))
        .with_context(|| format!("invalid file pattern '{pattern}'"))?;
    let root = std::path::absolute(root)
        .with_context(|| format!("resolve search root '{}'", root.display()))?;

    let walk = WalkDir::new(root).follow_links(false).into_iter();
    Ok(walk.filter_map(move |entry| {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let at = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                warn!(path = %at, error = %e, "skipping unreadable entry");
                return None;
            }
        };
        let ft = entry.file_type();
        let is_file = ft.is_file() || (ft.is_symlink() && entry.path().is_file());
        if !is_file || !glob.matches(&entry.file_name().to_string_lossy()) {
            return None;
        }
        trace!(path = %entry.path().display(), "located");
        Some(entry.into_path())
    }))
}

/// Every media file under `root`: all jpg, then png, then mov, then avi.
pub fn locate_media(root: &Path) -> Result<impl Iterator<Item = PathBuf> + use<>> {
    let passes = MEDIA_PATTERNS
        .iter()
        .map(|p| locate(p, root))
        .collect::<Result<Vec<_>>>()?;
    Ok(passes.into_iter().flatten())
}
