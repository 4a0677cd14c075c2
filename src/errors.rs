//! Typed error definitions for photosort.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotosortError {
    #[error("Target {target_base} can't be inside source {source_base}")]
    TargetInsideSource {
        source_base: PathBuf,
        target_base: PathBuf,
    },

    #[error("Invalid date shift: {0}")]
    InvalidShiftArguments(String),

    #[error("Too many duplicates of {0}; no free slot left in the duplicates directory")]
    DuplicateSlotsExhausted(PathBuf),

    #[error("Copy {src} -> {dest} still failing after {attempts} attempts")]
    CopyRetriesExhausted {
        src: PathBuf,
        dest: PathBuf,
        attempts: u32,
    },

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl PhotosortError {
    /// Stable numeric code, logged as a structured field.
    pub fn code(&self) -> u16 {
        match self {
            PhotosortError::TargetInsideSource { .. } => 10,
            PhotosortError::InvalidShiftArguments(_) => 11,
            PhotosortError::DuplicateSlotsExhausted(_) => 20,
            PhotosortError::CopyRetriesExhausted { .. } => 21,
            PhotosortError::Interrupted => 130,
        }
    }

    /// Short machine-friendly name used as the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            PhotosortError::TargetInsideSource { .. } => "target_inside_source",
            PhotosortError::InvalidShiftArguments(_) => "invalid_shift_arguments",
            PhotosortError::DuplicateSlotsExhausted(_) => "duplicate_slots_exhausted",
            PhotosortError::CopyRetriesExhausted { .. } => "copy_retries_exhausted",
            PhotosortError::Interrupted => "interrupted",
        }
    }
}
