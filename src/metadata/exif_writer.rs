//! In-place rewrite of EXIF capture timestamps in JPEG files.
//!
//! EXIF date fields are fixed-length ASCII (`YYYY:MM:DD HH:MM:SS\0`, 20 bytes),
//! so a new value can be patched over the old one without touching any other
//! offset in the file. The patched bytes replace the file via temp + rename.

use anyhow::{Result, bail};
use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;
use tracing::trace;

use super::capture::EXIF_DATETIME_FORMAT;
use crate::fs_ops::{io_error_with_help, replace_file_contents};

const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TAG_DATETIME_ORIGINAL: u16 = 0x9003;
const TAG_DATETIME_DIGITIZED: u16 = 0x9004;
const TYPE_ASCII: u16 = 2;
const DATETIME_LEN: usize = 19;
const DATETIME_FIELD_LEN: usize = DATETIME_LEN + 1;

const MARKER_APP1: u8 = 0xE1;
const MARKER_SOS: u8 = 0xDA;
const MARKER_EOI: u8 = 0xD9;
const EXIF_HEADER: &[u8] = b"Exif\0\0";

#[derive(Clone, Copy)]
enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    fn u16_at(self, data: &[u8], at: usize) -> Option<u16> {
        let b: [u8; 2] = data.get(at..at.checked_add(2)?)?.try_into().ok()?;
        Some(match self {
            ByteOrder::Little => u16::from_le_bytes(b),
            ByteOrder::Big => u16::from_be_bytes(b),
        })
    }

    fn u32_at(self, data: &[u8], at: usize) -> Option<u32> {
        let b: [u8; 4] = data.get(at..at.checked_add(4)?)?.try_into().ok()?;
        Some(match self {
            ByteOrder::Little => u32::from_le_bytes(b),
            ByteOrder::Big => u32::from_be_bytes(b),
        })
    }
}

/// Set `DateTimeOriginal` and `DateTimeDigitized` of the JPEG at `path` to `when`.
pub(crate) fn write_capture_timestamp(path: &Path, when: NaiveDateTime) -> Result<()> {
    let text = when.format(EXIF_DATETIME_FORMAT).to_string();
    if text.len() != DATETIME_LEN {
        bail!("timestamp '{text}' does not fit an EXIF date field");
    }

    let mut data = fs::read(path).map_err(io_error_with_help("read", path))?;
    let patched = patch_jpeg(&mut data, text.as_bytes())
        .map_err(|reason| anyhow::anyhow!("{}: {reason}", path.display()))?;
    trace!(path = %path.display(), fields = patched, value = %text, "patched EXIF dates");

    replace_file_contents(path, &data).map_err(io_error_with_help("replace", path))?;
    Ok(())
}

/// Patch every capture-date field found in the JPEG's EXIF segments.
/// Returns the number of fields rewritten.
fn patch_jpeg(data: &mut [u8], value: &[u8]) -> Result<usize, &'static str> {
    if !data.starts_with(&[0xFF, 0xD8]) {
        return Err("not a JPEG file");
    }

    let mut patched = 0;
    let mut pos = 2usize;
    while pos + 4 <= data.len() {
        if data[pos] != 0xFF {
            break;
        }
        let marker = data[pos + 1];
        if marker == MARKER_SOS || marker == MARKER_EOI {
            break;
        }
        // Standalone markers carry no length.
        if marker == 0x00 || marker == 0xFF || (0xD0..=0xD7).contains(&marker) {
            pos += if marker == 0xFF { 1 } else { 2 };
            continue;
        }
        let seg_len = usize::from(u16::from_be_bytes([data[pos + 2], data[pos + 3]]));
        let seg_end = pos + 2 + seg_len;
        if seg_len < 2 || seg_end > data.len() {
            break;
        }

        let body = pos + 4;
        if marker == MARKER_APP1 && data[body..seg_end].starts_with(EXIF_HEADER) {
            let tiff = &mut data[body + EXIF_HEADER.len()..seg_end];
            patched += patch_tiff(tiff, value).unwrap_or(0);
        }
        pos = seg_end;
    }

    if patched == 0 {
        return Err("no writable DateTimeOriginal/DateTimeDigitized field");
    }
    Ok(patched)
}

/// Offsets inside `tiff` are relative to its first byte.
fn patch_tiff(tiff: &mut [u8], value: &[u8]) -> Option<usize> {
    let order = match tiff.get(..2)? {
        b"II" => ByteOrder::Little,
        b"MM" => ByteOrder::Big,
        _ => return None,
    };
    if order.u16_at(tiff, 2)? != 42 {
        return None;
    }

    let ifd0 = order.u32_at(tiff, 4)? as usize;
    let exif_ifd = ifd_entries(tiff, ifd0, order)
        .find(|e| e.tag == TAG_EXIF_IFD_POINTER)
        .map(|e| e.value_offset as usize)?;

    let targets: Vec<usize> = ifd_entries(tiff, exif_ifd, order)
        .filter(|e| {
            (e.tag == TAG_DATETIME_ORIGINAL || e.tag == TAG_DATETIME_DIGITIZED)
                && e.kind == TYPE_ASCII
                && e.count as usize == DATETIME_FIELD_LEN
        })
        .map(|e| e.value_offset as usize)
        .collect();

    let mut patched = 0;
    for at in targets {
        if let Some(field) = tiff.get_mut(at..at.saturating_add(DATETIME_FIELD_LEN)) {
            field[..DATETIME_LEN].copy_from_slice(value);
            field[DATETIME_LEN] = 0;
            patched += 1;
        }
    }
    Some(patched)
}

struct IfdEntry {
    tag: u16,
    kind: u16,
    count: u32,
    value_offset: u32,
}

fn ifd_entries(tiff: &[u8], at: usize, order: ByteOrder) -> impl Iterator<Item = IfdEntry> + '_ {
    let count = order.u16_at(tiff, at).unwrap_or(0) as usize;
    (0..count).map_while(move |i| {
        let e = at.checked_add(2 + i * 12)?;
        Some(IfdEntry {
            tag: order.u16_at(tiff, e)?,
            kind: order.u16_at(tiff, e + 2)?,
            count: order.u32_at(tiff, e + 4)?,
            value_offset: order.u32_at(tiff, e + 8)?,
        })
    })
}
