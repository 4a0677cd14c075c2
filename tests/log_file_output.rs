//! Installs the global subscriber, so it gets a test binary of its own.

use photosort::LogLevel;
use photosort::config::path_has_symlink_ancestor;
use photosort::logging::init_tracing;
use tempfile::tempdir;

#[test]
fn init_tracing_writes_to_log_file() {
    let td = tempdir().expect("tempdir");
    let log_path = td.path().join("logs").join("photosort.log");

    // The logger refuses symlinked ancestors (e.g. /var on macOS); nothing to check then.
    if path_has_symlink_ancestor(&log_path).unwrap() {
        eprintln!("Skipping: {} has a symlink ancestor", log_path.display());
        return;
    }

    let guard = init_tracing(&LogLevel::Normal, Some(&log_path), false).expect("init tracing");
    assert!(guard.is_some(), "file layer should be active");
    tracing::info!("file-logging-test: written");
    tracing::debug!("file-logging-test: filtered out");
    drop(guard);

    let contents = std::fs::read_to_string(&log_path).expect("read log file");
    assert!(contents.contains("file-logging-test: written"), "contents={contents}");
    assert!(!contents.contains("filtered out"), "contents={contents}");
}
