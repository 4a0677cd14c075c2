//! Shared fixtures: minimal EXIF-bearing JPEGs and an in-memory metadata store.
#![allow(dead_code)]

use anyhow::{Result, anyhow};
use chrono::NaiveDateTime;
use photosort::metadata::{EXIF_DATETIME_FORMAT, MetadataStore};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// A JPEG (SOI, one Exif APP1 segment, EOI) whose big-endian TIFF block holds
/// an Exif IFD with DateTimeOriginal and DateTimeDigitized both set to `datetime`.
pub fn jpeg_with_exif(datetime: &str) -> Vec<u8> {
    assert_eq!(datetime.len(), 19, "EXIF dates are 19 characters");
    let entry = |tag: u16, kind: u16, count: u32, value: u32| {
        let mut e = Vec::with_capacity(12);
        e.extend_from_slice(&tag.to_be_bytes());
        e.extend_from_slice(&kind.to_be_bytes());
        e.extend_from_slice(&count.to_be_bytes());
        e.extend_from_slice(&value.to_be_bytes());
        e
    };

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"MM");
    tiff.extend_from_slice(&42u16.to_be_bytes());
    tiff.extend_from_slice(&8u32.to_be_bytes());
    // IFD0 @8: ExifIFDPointer -> 26
    tiff.extend_from_slice(&1u16.to_be_bytes());
    tiff.extend(entry(0x8769, 4, 1, 26));
    tiff.extend_from_slice(&0u32.to_be_bytes());
    // Exif IFD @26: DateTimeOriginal @56, DateTimeDigitized @76
    tiff.extend_from_slice(&2u16.to_be_bytes());
    tiff.extend(entry(0x9003, 2, 20, 56));
    tiff.extend(entry(0x9004, 2, 20, 76));
    tiff.extend_from_slice(&0u32.to_be_bytes());
    for _ in 0..2 {
        tiff.extend_from_slice(datetime.as_bytes());
        tiff.push(0);
    }
    assert_eq!(tiff.len(), 96);

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&((2 + 6 + tiff.len()) as u16).to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

pub fn write_file(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, bytes).unwrap();
}

/// Count occurrences of `needle` in `haystack`.
pub fn occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

/// Metadata keyed by file name; writes update the stored value.
#[derive(Default)]
pub struct FakeStore {
    dates: RefCell<HashMap<String, String>>,
    broken: HashSet<String>,
    read_only: HashSet<String>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(self, name: &str, text: &str) -> Self {
        self.dates.borrow_mut().insert(name.to_string(), text.to_string());
        self
    }

    /// Reading `name` fails as for a corrupt file.
    pub fn with_broken(mut self, name: &str) -> Self {
        self.broken.insert(name.to_string());
        self
    }

    /// Writing `name` fails.
    pub fn with_read_only(mut self, name: &str) -> Self {
        self.read_only.insert(name.to_string());
        self
    }

    pub fn date_of(&self, name: &str) -> Option<String> {
        self.dates.borrow().get(name).cloned()
    }
}

fn key(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}

impl MetadataStore for FakeStore {
    fn read_date_time_original(&self, path: &Path) -> Result<Option<String>> {
        let k = key(path);
        if self.broken.contains(&k) {
            return Err(anyhow!("corrupt metadata in {k}"));
        }
        Ok(self.dates.borrow().get(&k).cloned())
    }

    fn write_capture_timestamp(&self, path: &Path, when: NaiveDateTime) -> Result<()> {
        let k = key(path);
        if self.read_only.contains(&k) {
            return Err(anyhow!("{k} is read-only"));
        }
        self.dates
            .borrow_mut()
            .insert(k, when.format(EXIF_DATETIME_FORMAT).to_string());
        Ok(())
    }
}
