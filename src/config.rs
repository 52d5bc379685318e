//! Configuration loading.
//!
//! Resolution order: built-in defaults, then the global config file
//! (`<config dir>/folio/config.toml`), then an explicit file given via
//! `--config` or `FOLIO_CONFIG` (an explicit file suppresses the global
//! one), then environment variable overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Placeholder endpoint recognized as "remote not configured".
pub const PLACEHOLDER_URL: &str = "https://placeholder.supabase.co";
/// Placeholder access key paired with [`PLACEHOLDER_URL`].
pub const PLACEHOLDER_KEY: &str = "placeholder.key";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Remote data store endpoint and access key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_url")]
    pub url: String,
    #[serde(default = "default_remote_key")]
    pub key: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: default_remote_url(),
            key: default_remote_key(),
        }
    }
}

impl RemoteConfig {
    /// Whether a real remote endpoint is configured.
    ///
    /// The placeholder pair (and an empty URL) mean "not configured" and
    /// force the static-fallback path everywhere. This is a recognized mode
    /// switch, not an error.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !(self.url.is_empty() || self.url == PLACEHOLDER_URL)
    }
}

fn default_remote_url() -> String {
    PLACEHOLDER_URL.to_string()
}

fn default_remote_key() -> String {
    PLACEHOLDER_KEY.to_string()
}

/// Local storage location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the local database (default: `<data dir>/folio`).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("FOLIO_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Path of the local database file.
    pub fn db_path(&self) -> Result<PathBuf> {
        let dir = match &self.storage.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .ok_or_else(|| FolioError::MissingConfig("data directory not found".to_string()))?
                .join("folio"),
        };
        Ok(dir.join("folio.db"))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(base) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&base.join("folio/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| FolioError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| FolioError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(remote) = patch.remote {
            if let Some(url) = remote.url {
                self.remote.url = url;
            }
            if let Some(key) = remote.key {
                self.remote.key = key;
            }
        }
        if let Some(storage) = patch.storage {
            if let Some(data_dir) = storage.data_dir {
                self.storage.data_dir = Some(data_dir);
            }
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("FOLIO_REMOTE_URL") {
            self.remote.url = url;
        }
        if let Ok(key) = std::env::var("FOLIO_REMOTE_KEY") {
            self.remote.key = key;
        }
        if let Ok(dir) = std::env::var("FOLIO_DATA_DIR") {
            self.storage.data_dir = Some(PathBuf::from(dir));
        }
    }
}

/// Partial config as read from a TOML file; absent fields keep prior values.
#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    remote: Option<RemotePatch>,
    storage: Option<StoragePatch>,
}

#[derive(Debug, Default, Deserialize)]
struct RemotePatch {
    url: Option<String>,
    key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct StoragePatch {
    data_dir: Option<PathBuf>,
}
