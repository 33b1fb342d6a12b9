//! Settings consumed by the docstring command.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_AUTHOR: &str = "anonymous";
pub const DEFAULT_ORGANIZATION: &str = "anonymous";
pub const DEFAULT_TAB_SIZE: usize = 4;

pub const AUTHOR_ENV: &str = "ISWARE_AUTHOR";
pub const ORGANIZATION_ENV: &str = "ISWARE_ORGANIZATION";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DocstringConfig {
    /// Name written after `@author:` in module headers.
    pub author: String,
    /// Copyright holder written in module headers.
    pub organization: String,
    /// Width of a tab when computing docstring indentation.
    pub tab_size: usize,
}

impl Default for DocstringConfig {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            organization: DEFAULT_ORGANIZATION.to_string(),
            tab_size: DEFAULT_TAB_SIZE,
        }
    }
}

fn get_config<'a>(settings: &'a Value, key: &str, default: &'a str) -> &'a str {
    settings.get(key).and_then(Value::as_str).unwrap_or(default)
}

impl DocstringConfig {
    /// Reads `author`, `organization` and `tab_size` from a settings object,
    /// falling back to the defaults for anything missing or mistyped.
    pub fn from_settings(settings: &Value) -> Self {
        let tab_size = settings
            .get("tab_size")
            .and_then(Value::as_u64)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(DEFAULT_TAB_SIZE);
        Self {
            author: get_config(settings, "author", DEFAULT_AUTHOR).to_string(),
            organization: get_config(settings, "organization", DEFAULT_ORGANIZATION).to_string(),
            tab_size,
        }
    }

    /// Loads a JSON settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings {}", path.display()))?;
        let settings: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings {}", path.display()))?;
        let cfg = Self::from_settings(&settings);
        debug!(path = %path.display(), ?cfg, "loaded settings");
        Ok(cfg)
    }

    /// Applies `ISWARE_AUTHOR` / `ISWARE_ORGANIZATION` when set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(author) = lookup(AUTHOR_ENV).filter(|v| !v.trim().is_empty()) {
            self.author = author;
        }
        if let Some(org) = lookup(ORGANIZATION_ENV).filter(|v| !v.trim().is_empty()) {
            self.organization = org;
        }
        self
    }
}
