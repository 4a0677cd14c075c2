//! Default path helpers and symlink checks.
//! Locates the optional config file and detects symlinked ancestors for log safety.

use dirs::config_dir;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::CONFIG_ENV;

/// Config file to read, if any.
///
/// `$PHOTOSORT_CONFIG` wins when set (even if the file is missing, so the
/// caller can report it). Otherwise `<config_dir>/photosort/config.xml` is
/// returned only when it exists; nothing is ever created there.
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(p));
    }
    default_config_path().filter(|p| p.is_file())
}

/// OS-appropriate default config path.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(mut base) = config_dir() {
        base.push("photosort");
        base.push("config.xml");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("photosort")
                .join("config.xml")
        })
    }
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn env_override_wins_even_when_missing() {
        let td = tempdir().unwrap();
        let p = td.path().join("nope.xml");
        // SAFETY: serialized with the other env-mutating tests.
        unsafe { env::set_var(CONFIG_ENV, &p) };
        let got = config_file_path();
        unsafe { env::remove_var(CONFIG_ENV) };
        assert_eq!(got, Some(p));
    }

    #[test]
    fn plain_directory_has_no_symlink_ancestor() {
        let td = tempdir().unwrap();
        let real = std::fs::canonicalize(td.path()).unwrap();
        let p = real.join("a").join("b.log");
        assert!(!path_has_symlink_ancestor(&p).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_parent_is_detected() {
        let td = tempdir().unwrap();
        let real = std::fs::canonicalize(td.path()).unwrap();
        let target = real.join("real");
        std::fs::create_dir_all(&target).unwrap();
        let link = real.join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert!(path_has_symlink_ancestor(&link.join("x.log")).unwrap());
    }
}
