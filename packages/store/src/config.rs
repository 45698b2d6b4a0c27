//! # Site configuration (`portfolio.toml`)
//!
//! Optional TOML file read by the native shells from the app's data directory
//! (filename: [`PortfolioConfig::filename`] = `"portfolio.toml"`). The web shell
//! has no filesystem and always runs with [`PortfolioConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! key = "portfolio-data"          # record holding the document
//! theme_key = "portfolio-theme"   # record holding the theme preference
//!
//! [notifications]
//! toast_duration_ms = 3000
//!
//! [theme]
//! default = "dark"                # "light" or "dark"
//! ```
//!
//! Every section and field has a default, so a missing or empty file is
//! equivalent to the default configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::DEFAULT_STORAGE_KEY;

/// Top-level configuration stored in `portfolio.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Where records live in the durable storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_key")]
    pub key: String,
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a toast stays on screen.
    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme used until the visitor picks one: "light" or "dark".
    #[serde(default = "default_theme")]
    pub default: String,
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_theme_key() -> String {
    "portfolio-theme".to_string()
}

fn default_toast_duration() -> u32 {
    3000
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            theme_key: default_theme_key(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: default_theme(),
        }
    }
}

impl PortfolioConfig {
    /// Builder method to set the toast duration.
    pub fn with_toast_duration(mut self, ms: u32) -> Self {
        self.notifications.toast_duration_ms = ms;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portfolio.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read `portfolio.toml` from `dir`. A missing file yields the default.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(Self::filename());
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Self::from_toml(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Like [`load`](Self::load), but logs and falls back to the default on error.
    pub fn load_or_default(dir: &Path) -> Self {
        Self::load(dir).unwrap_or_else(|e| {
            tracing::warn!("Ignoring {}: {}", Self::filename(), e);
            Self::default()
        })
    }
}
