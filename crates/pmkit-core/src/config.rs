use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Backend location settings (the `[app]` table of config.toml).
///
/// Keys keep the upper-case names used by the web client's environment file.
/// An empty string is treated the same as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEnv {
    /// REST API host, e.g. `https://api.example.com`. Unset = same origin as the page.
    #[serde(rename = "HOST", default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Path segment appended to the REST base, e.g. `api`.
    #[serde(rename = "NAMESPACE", default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Websocket host, e.g. `wss://ws.example.com`. Unset = same host as the page.
    #[serde(rename = "WS_HOST", default, skip_serializing_if = "Option::is_none")]
    pub ws_host: Option<String>,
    /// Path segment appended to the websocket base.
    #[serde(rename = "WS_NAMESPACE", default, skip_serializing_if = "Option::is_none")]
    pub ws_namespace: Option<String>,
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

impl AppEnv {
    pub fn host(&self) -> Option<&str> {
        non_empty(&self.host)
    }

    pub fn namespace(&self) -> Option<&str> {
        non_empty(&self.namespace)
    }

    pub fn ws_host(&self) -> Option<&str> {
        non_empty(&self.ws_host)
    }

    pub fn ws_namespace(&self) -> Option<&str> {
        non_empty(&self.ws_namespace)
    }

    /// Returns a copy where every `Some` in `overrides` replaces the stored value.
    pub fn with_overrides(&self, overrides: &AppEnv) -> AppEnv {
        AppEnv {
            host: overrides.host.clone().or_else(|| self.host.clone()),
            namespace: overrides.namespace.clone().or_else(|| self.namespace.clone()),
            ws_host: overrides.ws_host.clone().or_else(|| self.ws_host.clone()),
            ws_namespace: overrides
                .ws_namespace
                .clone()
                .or_else(|| self.ws_namespace.clone()),
        }
    }
}

/// Global configuration loaded from `~/.config/pmkit/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PmkitConfig {
    #[serde(default)]
    pub app: AppEnv,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pmkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from a specific file.
pub fn load_from(path: &Path) -> Result<PmkitConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: PmkitConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PmkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PmkitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}
