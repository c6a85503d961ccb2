//! Settings and credential loading
//!
//! Two sources feed a cflr invocation:
//!
//! - `config.yaml` - optional settings file (API base URL, request timeout)
//! - `CLOUDFLARE_EMAIL` / `CLOUDFLARE_API_KEY` - required Global API Key credentials
//!
//! Both are resolved once at startup and handed to the command handlers.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default Cloudflare v4 API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Environment variable holding the account email
pub const EMAIL_VAR: &str = "CLOUDFLARE_EMAIL";

/// Environment variable holding the Global API Key
pub const API_KEY_VAR: &str = "CLOUDFLARE_API_KEY";

/// Settings from `config.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the Cloudflare API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in seconds (library default when unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: None,
        }
    }
}

impl Settings {
    /// Load settings from an explicit file path.
    ///
    /// The file must exist. An empty file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Settings = serde_yaml::from_str(&contents)?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from the platform config directory, falling back to
    /// defaults when no file is present there.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Location of `config.yaml` in the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "cflr", "cflr")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Override the API base URL
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Global API Key credentials sent with every request
#[derive(Clone)]
pub struct Credentials {
    email: String,
    api_key: String,
}

impl Credentials {
    /// Create credentials from explicit values
    pub fn new(email: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            api_key: api_key.into(),
        }
    }

    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary lookup function.
    ///
    /// The email is checked first. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(Error::MissingCredential { name })
        };

        let email = require(EMAIL_VAR)?;
        let api_key = require(API_KEY_VAR)?;
        Ok(Self { email, api_key })
    }

    /// Account email (`X-Auth-Email`)
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Global API Key (`X-Auth-Key`)
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
