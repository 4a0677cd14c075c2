//! Startup path validation.
//! Makes source/target absolute and refuses a target nested inside the source,
//! which would make the walk pick up its own output.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::error;

use crate::errors::PhotosortError;

/// Absolute form of `path` with `.` and `..` resolved lexically (symlinks untouched).
pub fn absolute_normalized(path: &Path) -> Result<PathBuf> {
    let abs = std::path::absolute(path)
        .with_context(|| format!("resolve absolute path of '{}'", path.display()))?;
    let mut out = PathBuf::new();
    for comp in abs.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    Ok(out)
}

/// Fail with `TargetInsideSource` when `target_base` equals or lies under `source_base`.
///
/// Both paths are compared component-wise as given (expected absolute), and again
/// after canonicalization when both exist, so a symlinked alias is caught too.
pub fn ensure_target_outside_source(source_base: &Path, target_base: &Path) -> Result<()> {
    let nested = target_base.starts_with(source_base)
        || match (fs::canonicalize(source_base), fs::canonicalize(target_base)) {
            (Ok(s), Ok(t)) => t.starts_with(&s),
            _ => false,
        };

    if nested {
        let err = PhotosortError::TargetInsideSource {
            source_base: source_base.to_path_buf(),
            target_base: target_base.to_path_buf(),
        };
        error!(code = err.code(), kind = err.kind(), "Target can't be in source");
        return Err(err.into());
    }
    Ok(())
}
