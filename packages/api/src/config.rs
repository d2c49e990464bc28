//! Backend configuration from the environment.
//!
//! Resolution order: built-in defaults, then the TOML file named by
//! `DASHBOARD_CONFIG` (native builds only), then `DASHBOARD_API_URL`.
//! Browser builds have no process environment, so they read
//! `DASHBOARD_API_URL` at compile time instead.

use std::path::{Path, PathBuf};

use store::DashboardConfig;
use thiserror::Error;

/// Overrides the backend base URL.
pub const API_URL_VAR: &str = "DASHBOARD_API_URL";
/// Path of an optional `dashboard.toml`.
pub const CONFIG_FILE_VAR: &str = "DASHBOARD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Resolve the dashboard configuration for this process.
pub fn load_config() -> DashboardConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();

        let config = match std::env::var(CONFIG_FILE_VAR) {
            Ok(path) => read_config_file(Path::new(&path)).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring config file, using defaults");
                DashboardConfig::default()
            }),
            Err(_) => DashboardConfig::default(),
        };
        apply_url_override(config, std::env::var(API_URL_VAR).ok())
    }
    #[cfg(target_arch = "wasm32")]
    {
        apply_url_override(
            DashboardConfig::default(),
            option_env!("DASHBOARD_API_URL").map(str::to_string),
        )
    }
}

/// Read a `dashboard.toml`.
pub fn read_config_file(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    DashboardConfig::from_toml(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the base URL when `url` is set and not blank.
pub fn apply_url_override(config: DashboardConfig, url: Option<String>) -> DashboardConfig {
    match url {
        Some(url) if !url.trim().is_empty() => {
            tracing::debug!(base_url = %url.trim(), "backend address overridden");
            config.with_base_url(url.trim())
        }
        _ => config,
    }
}
