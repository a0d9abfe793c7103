use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Runtime settings for the control panel. Every field has a default so a
/// partial (or absent) config is always usable.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Prefix every API path is appended to, e.g. `/api` or `http://127.0.0.1:8086/api`.
    pub api_root: String,
    /// Per-request timeout; `0` disables it.
    pub request_timeout_secs: u64,
    pub bindings: ElementIds,
    /// Daemon commands offered as one-click buttons.
    pub quick_commands: Vec<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            api_root: "/api".to_string(),
            request_timeout_secs: 10,
            bindings: ElementIds::default(),
            quick_commands: vec!["status".to_string()],
        }
    }
}

impl PanelConfig {
    /// TOML loading for native hosts; the browser reads the window global.
    pub fn from_toml_str(raw: &str) -> Result<Self, String> {
        toml::from_str(raw).map_err(|e| format!("Invalid panel config: {}", e))
    }

    /// Parse `raw`, falling back to defaults when it is malformed.
    pub fn from_toml_or_default(raw: &str) -> Self {
        Self::from_toml_str(raw).unwrap_or_else(|e| {
            warn!("{}; using defaults", e);
            Self::default()
        })
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    /// Join `api_root` onto `origin` when it is a bare path.
    pub fn resolve_api_root(&self, origin: &str) -> String {
        if self.api_root.starts_with('/') {
            format!("{}{}", origin.trim_end_matches('/'), self.api_root)
        } else {
            self.api_root.clone()
        }
    }
}

/// Element ids the page binds controls and fields to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub refresh: String,
    pub create: String,
    pub save: String,
    pub delete: String,
    pub load: String,
    pub send_cmd: String,
    pub clear_filter: String,
    pub filter: String,
    #[serde(rename = "pname")]
    pub name: String,
    #[serde(rename = "pcontent")]
    pub content: String,
    #[serde(rename = "cmdInput")]
    pub command: String,
    #[serde(rename = "statusBox")]
    pub status: String,
    pub list: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            refresh: "refresh".to_string(),
            create: "create".to_string(),
            save: "save".to_string(),
            delete: "delete".to_string(),
            load: "load".to_string(),
            send_cmd: "sendCmd".to_string(),
            clear_filter: "clearFilter".to_string(),
            filter: "filter".to_string(),
            name: "pname".to_string(),
            content: "pcontent".to_string(),
            command: "cmdInput".to_string(),
            status: "statusBox".to_string(),
            list: "list".to_string(),
        }
    }
}
