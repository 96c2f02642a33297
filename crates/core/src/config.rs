//! Dashboard settings, read from a JSON file.
//!
//! Every field has a default so a partial (or empty) file is valid. The
//! backend URL can be overridden from the environment.

use crate::error::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storedesk_paging::InfiniteListOptions;

pub const BACKEND_URL_ENV: &str = "STOREDESK_BACKEND_URL";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:9000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DashboardConfig {
    pub backend_url: String,
    pub paging: PagingConfig,
    pub logging: LoggingConfig,
    /// Directory scanned for extension manifests (`*.json`).
    pub extensions_dir: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            paging: PagingConfig::default(),
            logging: LoggingConfig::default(),
            extensions_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PagingConfig {
    pub page_size: usize,
    pub max_pages: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            max_pages: 5,
        }
    }
}

impl From<&PagingConfig> for InfiniteListOptions {
    fn from(value: &PagingConfig) -> Self {
        Self {
            page_size: value.page_size.max(1),
            max_pages: value.max_pages.max(1),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LoggingConfig {
    pub to_stderr: bool,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: Option<String>,
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the file at `path` and apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let mut config = Self::from_json(&raw)?;
        config.apply_env();
        tracing::debug!(
            path = %path.display(),
            backend = %config.backend_url,
            "loaded dashboard config"
        );
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(BACKEND_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.backend_url = url;
        }
    }

    pub fn list_options(&self) -> InfiniteListOptions {
        InfiniteListOptions::from(&self.paging)
    }

    pub fn schema() -> schemars::Schema {
        schemars::schema_for!(DashboardConfig)
    }
}
