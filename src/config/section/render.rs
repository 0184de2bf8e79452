//! `[render]` configuration.

use serde::{Deserialize, Serialize};

/// Output rendering options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Force the root/body background to pure black when a light-theme
    /// sweep leaves them light (e.g., backgrounds the engine could not
    /// parse).
    pub force_root_background: bool,

    /// Indent serialized output.
    pub pretty: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { force_root_background: true, pretty: false }
    }
}
