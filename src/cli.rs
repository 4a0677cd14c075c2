//! CLI definitions for both tools.
//!
//! Flags only cover what a run needs; logging and retry knobs live in the
//! optional XML config. `apply_overrides` layers the flags on top of it.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::Config;

/// Copy photos and videos into a year/month/day tree by their EXIF capture date.
#[derive(Parser, Debug, Clone)]
#[command(name = "photosort", author, version)]
pub struct SortArgs {
    /// Source directory to copy files from
    #[arg(value_hint = ValueHint::DirPath)]
    pub source_directory: PathBuf,

    /// Target directory to copy files to
    #[arg(value_hint = ValueHint::DirPath)]
    pub target_directory: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Do a dry run without copying the files
    #[arg(short, long)]
    pub dryrun: bool,
}

impl SortArgs {
    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if self.verbose {
            cfg.verbose = true;
        }
        if self.dryrun {
            cfg.dry_run = true;
        }
    }
}

/// Shift the EXIF capture date of every photo under a directory.
#[derive(Parser, Debug, Clone)]
#[command(name = "phototimeshift", author, version)]
pub struct ShiftArgs {
    /// Directory holding the files to update
    #[arg(value_hint = ValueHint::DirPath)]
    pub source_directory: PathBuf,

    /// Date to shift from, YYYY-MM-DD
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    pub from_date: Option<String>,

    /// Date to shift to, YYYY-MM-DD
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    pub to_date: Option<String>,

    /// Days to shift the dates by (negative moves them back)
    #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
    pub shift_days: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Do a dry run without writing any metadata
    #[arg(short, long)]
    pub dryrun: bool,
}

impl ShiftArgs {
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if self.verbose {
            cfg.verbose = true;
        }
        if self.dryrun {
            cfg.dry_run = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_args_short_flags() {
        let a = SortArgs::try_parse_from(["photosort", "-v", "-d", "in", "out"]).unwrap();
        assert_eq!(a.source_directory, PathBuf::from("in"));
        assert_eq!(a.target_directory, PathBuf::from("out"));
        assert!(a.verbose && a.dryrun);

        let mut cfg = Config::default();
        a.apply_overrides(&mut cfg);
        assert!(cfg.verbose && cfg.dry_run);
    }

    #[test]
    fn sort_args_need_both_directories() {
        assert!(SortArgs::try_parse_from(["photosort", "in"]).is_err());
    }

    #[test]
    fn shift_days_may_be_negative() {
        let a = ShiftArgs::try_parse_from(["phototimeshift", "-s", "-3", "pics"]).unwrap();
        assert_eq!(a.shift_days.as_deref(), Some("-3"));
        let a =
            ShiftArgs::try_parse_from(["phototimeshift", "--shift-days", "-3", "pics"]).unwrap();
        assert_eq!(a.shift_days.as_deref(), Some("-3"));
    }

    #[test]
    fn shift_long_date_flags() {
        let a = ShiftArgs::try_parse_from([
            "phototimeshift",
            "--from-date",
            "2019-01-01",
            "--to-date",
            "2019-01-05",
            "--dryrun",
            "pics",
        ])
        .unwrap();
        assert_eq!(a.from_date.as_deref(), Some("2019-01-01"));
        assert_eq!(a.to_date.as_deref(), Some("2019-01-05"));
        assert!(a.dryrun && !a.verbose);
    }

    #[test]
    fn clap_definitions_are_consistent() {
        use clap::CommandFactory;
        SortArgs::command().debug_assert();
        ShiftArgs::command().debug_assert();
    }
}
