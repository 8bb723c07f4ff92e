//! Configuration file handling.
//!
//! Reads from `~/.config/gh-token/gh-token.toml` when present. The file is
//! optional and never created; every field falls back to the built-in value.

use anyhow::{Context, Result};
use gh_token_core::settings::{self, Settings};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming the key file used with the master password.
pub const KEY_FILE_VAR: &str = "KEY_FILE";

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Service name of the internet password.
    #[serde(default = "default_service")]
    pub service: String,
    /// Keychain file the password is written to.
    #[serde(default = "default_keychain_file")]
    pub keychain_file: String,
    /// Protocol restriction used when adding.
    #[serde(default = "default_protocol")]
    pub protocol: String,
    /// Base URL of account profile pages.
    #[serde(default = "default_profile_url_base")]
    pub profile_url_base: String,
    /// Keychain control program.
    #[serde(default = "default_program")]
    pub program: String,
    /// Seconds to wait for the account profile page.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
    /// Key file used when `KEY_FILE` is not set.
    #[serde(default)]
    pub key_file: Option<PathBuf>,
}

fn default_service() -> String {
    settings::DEFAULT_SERVICE.to_string()
}

fn default_keychain_file() -> String {
    settings::DEFAULT_KEYCHAIN_FILE.to_string()
}

fn default_protocol() -> String {
    settings::DEFAULT_PROTOCOL.to_string()
}

fn default_profile_url_base() -> String {
    settings::DEFAULT_PROFILE_URL_BASE.to_string()
}

fn default_program() -> String {
    settings::DEFAULT_PROGRAM.to_string()
}

fn default_probe_timeout_secs() -> u64 {
    settings::DEFAULT_PROBE_TIMEOUT.as_secs()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: default_service(),
            keychain_file: default_keychain_file(),
            protocol: default_protocol(),
            profile_url_base: default_profile_url_base(),
            program: default_program(),
            probe_timeout_secs: default_probe_timeout_secs(),
            key_file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location, if the file exists.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Resolve runtime settings; `key_file` overrides the configured one.
    pub fn into_settings(self, key_file: Option<PathBuf>) -> Settings {
        Settings {
            service: self.service,
            keychain_file: self.keychain_file,
            protocol: self.protocol,
            profile_url_base: self.profile_url_base,
            program: self.program,
            probe_timeout: Duration::from_secs(self.probe_timeout_secs),
            key_file: key_file.or(self.key_file),
        }
    }

    /// Get the path to the config file.
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gh-token").join("gh-token.toml"))
    }
}

/// Key file named by `KEY_FILE`; unset or empty means none.
pub fn key_file_from_env() -> Option<PathBuf> {
    std::env::var_os(KEY_FILE_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
