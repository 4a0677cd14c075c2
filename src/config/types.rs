//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.
//! - RetryPolicy bounds (or not) the copy retry loop.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::COPY_RETRY_DELAY_DEFAULT;

/// Program-defined verbosity levels for the diagnostic stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings plus the run summary (default)
    #[default]
    Normal,
    /// Per-file decisions
    Info,
    /// Everything
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// How often a failing copy is retried before the file is given up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; `None` retries until the copy succeeds
    /// or the process is interrupted.
    pub max_retries: Option<u32>,
    /// Pause between attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn unlimited(delay: Duration) -> Self {
        Self {
            max_retries: None,
            delay,
        }
    }

    pub fn limited(max_retries: u32, delay: Duration) -> Self {
        Self {
            max_retries: Some(max_retries),
            delay,
        }
    }

    /// True once `attempts` failed tries have used up the budget.
    pub fn exhausted(&self, attempts: u32) -> bool {
        match self.max_retries {
            Some(max) => attempts > max,
            None => false,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::unlimited(COPY_RETRY_DELAY_DEFAULT)
    }
}

/// Runtime configuration shared by both tools.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Diagnostic verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file (stderr is always used)
    pub log_file: Option<PathBuf>,
    /// Emit diagnostics as JSON lines
    pub json_logs: bool,
    /// Narrate every file on stdout
    pub verbose: bool,
    /// Report intended actions without touching the filesystem
    pub dry_run: bool,
    /// Copy retry behavior for the sort engine
    pub copy_retry: RetryPolicy,
}
