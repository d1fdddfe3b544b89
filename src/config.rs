//! Startup settings: command-line overrides layered over an optional JSON
//! config file, layered over built-in defaults.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::model::{Identity, StartupError};

pub const DEFAULT_API_URL: &str = "http://localhost:5990";
pub const DEFAULT_NAMES_URL: &str = "https://id.ripple.com";
pub const DEFAULT_RETRY_DELAY_MS: u64 = 3000;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub names_url: Option<String>,
    #[serde(default)]
    pub retry_delay_ms: Option<u64>,
    #[serde(default)]
    pub issuers: BTreeMap<String, String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let cfg = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(cfg)
    }
}

/// Values given on the command line (or via the environment).
#[derive(Clone, Default)]
pub struct Overrides {
    pub account: Option<String>,
    pub secret: Option<String>,
    pub api_url: Option<String>,
    pub names_url: Option<String>,
    pub retry_delay_ms: Option<u64>,
}

pub struct Settings {
    pub account: Option<String>,
    pub secret: Option<String>,
    pub api_url: String,
    pub names_url: String,
    pub retry_delay: Duration,
    pub issuers: BTreeMap<String, String>,
}

impl Settings {
    pub fn resolve(overrides: Overrides, file: ConfigFile) -> Self {
        Self {
            account: overrides.account.or(file.account),
            secret: overrides.secret.or(file.secret),
            api_url: overrides
                .api_url
                .or(file.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            names_url: overrides
                .names_url
                .or(file.names_url)
                .unwrap_or_else(|| DEFAULT_NAMES_URL.to_string()),
            retry_delay: Duration::from_millis(
                overrides
                    .retry_delay_ms
                    .or(file.retry_delay_ms)
                    .unwrap_or(DEFAULT_RETRY_DELAY_MS),
            ),
            issuers: file.issuers,
        }
    }

    pub fn identity(&self) -> std::result::Result<Identity, StartupError> {
        Identity::new(self.account.clone(), self.secret.clone())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
