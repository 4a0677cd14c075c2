mod common;

use common::{FakeStore, write_file};
use photosort::config::Config;
use photosort::errors::PhotosortError;
use photosort::shutdown;
use photosort::sort::run_sort;
use tempfile::tempdir;

// Lives in its own test binary: the shutdown flag is process-wide.
#[test]
fn pending_shutdown_stops_before_the_first_copy() {
    let td = tempdir().unwrap();
    let src = td.path().join("src");
    let out = td.path().join("out");
    write_file(&src.join("IMG_1.jpg"), b"one");

    shutdown::request();
    let err = run_sort(&Config::default(), &src, &out, &FakeStore::new()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<PhotosortError>(),
        Some(PhotosortError::Interrupted)
    ));
    assert!(!out.exists());
}
