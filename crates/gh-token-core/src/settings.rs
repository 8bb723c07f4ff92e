//! Runtime settings passed explicitly through a run.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SERVICE: &str = "github.com";
pub const DEFAULT_KEYCHAIN_FILE: &str = "login.keychain";
/// Protocol code GitHub tokens must be stored under.
pub const DEFAULT_PROTOCOL: &str = "htps";
pub const DEFAULT_PROFILE_URL_BASE: &str = "https://github.com";
pub const DEFAULT_PROGRAM: &str = "security";
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Values the workflow needs that are not part of the command line.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Service name of the internet password.
    pub service: String,
    /// Keychain file the password is written to.
    pub keychain_file: String,
    /// Protocol restriction applied when adding.
    pub protocol: String,
    /// Base URL under which account profiles live.
    pub profile_url_base: String,
    /// Keychain control program.
    pub program: String,
    /// Upper bound on the account probe request.
    pub probe_timeout: Duration,
    /// Key file used together with the master password.
    pub key_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service: DEFAULT_SERVICE.to_string(),
            keychain_file: DEFAULT_KEYCHAIN_FILE.to_string(),
            protocol: DEFAULT_PROTOCOL.to_string(),
            profile_url_base: DEFAULT_PROFILE_URL_BASE.to_string(),
            program: DEFAULT_PROGRAM.to_string(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            key_file: None,
        }
    }
}

impl Settings {
    /// Profile page used to check that an account exists.
    pub fn profile_url(&self, account: &str) -> String {
        format!("{}/{}", self.profile_url_base.trim_end_matches('/'), account)
    }
}
