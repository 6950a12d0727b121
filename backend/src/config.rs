//! # Configuration
//!
//! Settings come from a YAML file whose path is taken from
//! `LEAVE_TRACKER_CONFIG` (default `leave_tracker.yaml`). A missing file
//! means defaults. A few values can be overridden from the environment:
//!
//! | Variable | Setting |
//! |---|---|
//! | `LEAVE_TRACKER_STORE_URL` | `store.url` |
//! | `LEAVE_TRACKER_BIND` | `server.bind` |
//! | `LEAVE_TRACKER_ADMIN_PASSWORD` | `auth.admin_password` |
//! | `LEAVE_TRACKER_STAFF_PASSWORD` | `auth.staff_password` |
//!
//! ## YAML Format
//!
//! ```yaml
//! server:
//!   bind: "0.0.0.0:3000"
//!   cors_origin: "http://localhost:8080"
//! store:
//!   url: "https://script.google.com/macros/s/<deployment>/exec"
//!   timeout_secs: 30
//! auth:
//!   staff_password: "PJ123"
//! locale:
//!   utc_offset_hours: 7
//! ```

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::auth_service::{AdminCredential, DEFAULT_MIN_PASSWORD_LENGTH};

pub const CONFIG_PATH_VAR: &str = "LEAVE_TRACKER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "leave_tracker.yaml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub auth: AuthConfig,
    pub locale: LocaleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    /// Origin the browser front end is served from
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            cors_origin: "http://localhost:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Spreadsheet web endpoint
    pub url: Option<String>,
    pub timeout_secs: u64,
    /// Keep everything in process memory instead of the endpoint
    pub memory: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: 30,
            memory: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub admin_username: String,
    pub admin_password: String,
    pub admin_full_name: String,
    /// Password shared by every staff account until they change it
    pub staff_password: String,
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_username: "admin".to_string(),
            admin_password: "admin4444".to_string(),
            admin_full_name: "ผู้ดูแลระบบ".to_string(),
            staff_password: "PJ123".to_string(),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl AuthConfig {
    pub fn admin_credential(&self) -> AdminCredential {
        AdminCredential {
            username: self.admin_username.clone(),
            password: self.admin_password.clone(),
            full_name: self.admin_full_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub utc_offset_hours: i32,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self { utc_offset_hours: 7 }
    }
}

impl AppConfig {
    /// Load from the configured path, then apply environment overrides
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = Self::load_from(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: AppConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Overrides from a variable lookup; blank values are ignored
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get("LEAVE_TRACKER_STORE_URL") {
            self.store.url = Some(url);
        }
        if let Some(bind) = get("LEAVE_TRACKER_BIND") {
            self.server.bind = bind;
        }
        if let Some(password) = get("LEAVE_TRACKER_ADMIN_PASSWORD") {
            self.auth.admin_password = password;
        }
        if let Some(password) = get("LEAVE_TRACKER_STAFF_PASSWORD") {
            self.auth.staff_password = password;
        }
    }
}
