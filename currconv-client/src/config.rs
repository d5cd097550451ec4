//! Configuration loading from environment.

use std::env;
use std::fmt;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://free.currconv.com";
pub const DEFAULT_VERSION: &str = "v7";

const BASE_URL_VAR: &str = "CURRCONV_BASE_URL";
const VERSION_VAR: &str = "CURRCONV_API_VERSION";
const API_KEY_VAR: &str = "CURRCONV_API_KEY";

/// Client configuration. Fixed for the lifetime of an `ApiClient`.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    /// Version segment placed after `/api`, e.g. `v7`
    pub version: String,
    pub api_key: String,
}

impl Config {
    pub fn new(
        base_url: impl Into<String>,
        version: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            version: version.into(),
            api_key: api_key.into(),
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// `CURRCONV_API_KEY` is required; the base URL and version fall back to
    /// the public free-tier service.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let version = lookup(VERSION_VAR).unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let api_key = lookup(API_KEY_VAR).ok_or(ConfigError::MissingVar(API_KEY_VAR))?;

        Ok(Self {
            base_url,
            version,
            api_key,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
