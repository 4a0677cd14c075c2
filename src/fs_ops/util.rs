use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Prefix of the transient files written next to a destination before rename.
pub(crate) const TEMP_PREFIX: &str = ".photosort.";

pub(crate) fn unique_temp_path(dst_dir: &Path) -> PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    dst_dir.join(format!("{TEMP_PREFIX}{pid}.{nanos}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_stays_in_directory() {
        let dir = Path::new("/out/2019/06/01");
        let p = unique_temp_path(dir);
        assert_eq!(p.parent(), Some(dir));
        let name = p.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with(TEMP_PREFIX));
        assert!(name.ends_with(".tmp"));
    }
}
