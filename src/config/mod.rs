//! Configuration management for `umbra.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                      |
//! |--------------|----------------------------------------------|
//! | `[render]`   | Serialization and root-background policy     |
//! | `[profiles]` | Site override stylesheet directory           |
//!
//! Thresholds are deliberately absent: the decision engine's constants
//! are process-wide and not user-tunable.

mod error;
pub mod section;

pub use error::{ConfigDiagnostic, ConfigError};
pub use section::{ProfilesConfig, RenderConfig};

use crate::log;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level `umbra.toml` model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UmbraConfig {
    pub render: RenderConfig,
    pub profiles: ProfilesConfig,
}

impl UmbraConfig {
    /// Load from `path`. A missing file is not an error: every section
    /// has workable defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.profiles.enable && self.profiles.dir.as_os_str().is_empty() {
            let diagnostic = ConfigDiagnostic::new("profiles.dir", "must not be empty")
                .with_hint("set a directory or disable profiles");
            return Err(ConfigError::Validation(diagnostic.to_string()));
        }
        Ok(())
    }
}
