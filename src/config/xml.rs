//! XML configuration support.
//! - Loads optional settings from config.xml (quick_xml + serde).
//! - Never writes a config file; a missing file simply means defaults.
//!
//! Notes:
//! - Unknown XML fields are rejected so typos surface instead of being ignored.
//! - A broken file is reported and the tools fall back to defaults.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use super::paths::config_file_path;
use super::types::{Config, LogLevel, RetryPolicy};
use super::COPY_RETRY_DELAY_DEFAULT;
use crate::output as out;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(rename = "json_logs")]
    json_logs: Option<bool>,
    /// 0 (or absent) keeps retrying until the copy succeeds.
    #[serde(rename = "copy_max_retries", default, deserialize_with = "de_u64_trimmed_opt")]
    copy_max_retries: Option<u64>,
    #[serde(rename = "copy_retry_delay_ms", default, deserialize_with = "de_u64_trimmed_opt")]
    copy_retry_delay_ms: Option<u64>,
}

// Trims surrounding whitespace for optional integers.
fn de_u64_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| s.trim().parse::<u64>().ok()))
}

fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    if let Some(level) = parsed.log_level.as_deref().and_then(LogLevel::parse) {
        cfg.log_level = level;
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }
    cfg.json_logs = parsed.json_logs.unwrap_or(false);

    let delay = parsed
        .copy_retry_delay_ms
        .map(Duration::from_millis)
        .unwrap_or(COPY_RETRY_DELAY_DEFAULT);
    cfg.copy_retry = match parsed.copy_max_retries {
        None | Some(0) => RetryPolicy::unlimited(delay),
        Some(n) => RetryPolicy::limited(u32::try_from(n).unwrap_or(u32::MAX), delay),
    };

    cfg
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

/// Resolve and load the config file, falling back to defaults.
///
/// Runs before logging is initialised, so problems are printed directly.
pub fn load_config() -> Config {
    let Some(path) = config_file_path() else {
        return Config::default();
    };
    match load_config_from_xml_path(&path) {
        Ok(cfg) => {
            debug!(path = %path.display(), "Loaded config");
            cfg
        }
        Err(e) => {
            out::print_warn(&format!("{e:#}; using default settings"));
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(xml: &str) -> (tempfile::TempDir, PathBuf) {
        let td = tempdir().unwrap();
        let p = td.path().join("config.xml");
        fs::write(&p, xml).unwrap();
        (td, p)
    }

    #[test]
    fn zero_retries_means_unlimited() {
        let (_td, p) = write(
            "<config><copy_max_retries>0</copy_max_retries>\
             <copy_retry_delay_ms>10</copy_retry_delay_ms></config>",
        );
        let cfg = load_config_from_xml_path(&p).unwrap();
        assert_eq!(cfg.copy_retry, RetryPolicy::unlimited(Duration::from_millis(10)));
    }

    #[test]
    fn retry_fields_tolerate_whitespace() {
        let (_td, p) = write(
            "<config>\n  <copy_max_retries> 3 </copy_max_retries>\n</config>",
        );
        let cfg = load_config_from_xml_path(&p).unwrap();
        assert_eq!(cfg.copy_retry.max_retries, Some(3));
        assert_eq!(cfg.copy_retry.delay, COPY_RETRY_DELAY_DEFAULT);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let (_td, p) = write("<config><target_base>/x</target_base></config>");
        let err = load_config_from_xml_path(&p).unwrap_err();
        assert!(format!("{err:#}").contains("parse config xml"));
    }

    #[test]
    fn empty_log_file_is_ignored() {
        let (_td, p) = write("<config><log_file>   </log_file></config>");
        let cfg = load_config_from_xml_path(&p).unwrap();
        assert!(cfg.log_file.is_none());
    }
}
