//! Settings structures for semsearch configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub search: SearchSettings,
    pub backend: BackendSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (SEMSEARCH_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("SEMSEARCH_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("SEMSEARCH_BASE_URL") {
            self.backend.base_url = val;
        }
        if let Ok(val) = std::env::var("SEMSEARCH_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.backend.request_timeout = timeout;
            }
        }
        if let Ok(val) = std::env::var("SEMSEARCH_LIMIT") {
            if let Ok(limit) = val.parse() {
                self.search.default_limit = limit;
            }
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Instance name displayed by the front end
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Semantic Service Search".to_string(),
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Result limit applied when a request does not set one. The backend
    /// applies the same default on its side.
    pub default_limit: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_limit: crate::DEFAULT_LIMIT,
        }
    }
}

/// Settings for the outgoing connection to the search backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Base address of the search service
    pub base_url: String,
    /// Request timeout in seconds
    pub request_timeout: f64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout: crate::DEFAULT_TIMEOUT,
        }
    }
}
