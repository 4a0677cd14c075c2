//! Config module.
//! Provides configuration types, the optional XML file loader, and path validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{config_file_path, default_config_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel, RetryPolicy};
pub use validate::{absolute_normalized, ensure_target_outside_source};
pub use xml::{load_config, load_config_from_xml_path};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PHOTOSORT_CONFIG";

/// Pause between copy attempts when the config does not say otherwise.
pub const COPY_RETRY_DELAY_DEFAULT: std::time::Duration = std::time::Duration::from_millis(500);
