use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::renderer::DEFAULT_INDENT_WIDTH;

/// Render settings read from a JSON config file and CLI flags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Columns per block level.
    pub indent_width: usize,
    /// Target label recorded in unsupported-construct reports.
    pub language: String,
    /// Treat any unsupported construct as a failure.
    pub strict: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            language: "default".to_string(),
            strict: false,
        }
    }
}

impl RenderConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// `<config dir>/polyglot/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("polyglot").join("config.json"))
    }

    /// Explicit path if given, else the default location when it exists,
    /// else built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "using default config file");
                Self::from_path(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
