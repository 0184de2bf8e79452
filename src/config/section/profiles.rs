//! `[profiles]` configuration for site-specific override stylesheets.
//!
//! # Example
//!
//! ```toml
//! [profiles]
//! enable = true
//! dir = "~/.config/umbra/profiles"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Site-profile stylesheet lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilesConfig {
    /// Enable stylesheet lookup.
    pub enable: bool,

    /// Directory holding `<hostname>.css` files. Tilde-expanded.
    pub dir: PathBuf,
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self { enable: true, dir: PathBuf::from("profiles") }
    }
}

impl ProfilesConfig {
    /// The profile directory with `~` expanded.
    pub fn expanded_dir(&self) -> PathBuf {
        let raw = self.dir.to_string_lossy();
        PathBuf::from(shellexpand::tilde(raw.as_ref()).into_owned())
    }
}
