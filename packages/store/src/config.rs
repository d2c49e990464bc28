//! # Dashboard configuration: `dashboard.toml`
//!
//! Describes where the REST backend lives. The file is optional: a missing
//! or empty file is equivalent to [`DashboardConfig::default`], and the
//! `api` crate layers environment overrides on top (see `api::config`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DashboardConfig`] | Top-level config. Builder helper `with_base_url`, TOML (de)serialisation, canonical filename. |
//! | [`ApiConfig`] | Backend section: the base URL and helpers building collection and record URLs from it. |

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address of the REST service, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Base URL with any trailing slashes removed.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// `{base}/{collection}`
    pub fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base(), collection)
    }

    /// `{base}/{collection}/{id}`
    pub fn record_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base(), collection, id)
    }
}

impl DashboardConfig {
    /// Builder method to point at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
