use anyhow::{Context, Result};
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw text of `DateTimeOriginal` from the primary image, if present.
///
/// Uses the ASCII bytes stored in the tag rather than the reformatted display
/// value, so callers see exactly `YYYY:MM:DD HH:MM:SS`.
pub(crate) fn read_date_time_original(path: &Path) -> Result<Option<String>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let exif = match Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("read EXIF from {}", path.display()));
        }
    };

    let Some(field) = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY) else {
        return Ok(None);
    };
    match &field.value {
        Value::Ascii(values) => Ok(values
            .first()
            .map(|raw| String::from_utf8_lossy(raw).trim_end_matches('\0').to_string())),
        other => anyhow::bail!(
            "DateTimeOriginal in {} is not ASCII: {:?}",
            path.display(),
            other
        ),
    }
}
