//! Failure kinds for a single gh-token run.

use std::path::PathBuf;

/// Result alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way a run can end without installing or removing a token.
///
/// Nothing below the binary's `main` prints these; they travel up the call
/// chain and are mapped to a message and exit code in one place.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file not found: {}", .0.display())]
    DatabaseNotFound(PathBuf),

    #[error("GitHub user not found here: {url}  Error: {reason}")]
    AccountNotFound { url: String, reason: String },

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Error: unable to read key file {}: {source}", .path.display())]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error: {0}")]
    Unlock(String),

    #[error("Error: unable to read password: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("Error: selection failed: {0}")]
    Selector(String),

    /// The picker was dismissed or returned nothing.
    #[error("selection cancelled")]
    Cancelled,

    #[error("Error: no entry titled {0:?}")]
    MissingEntry(String),

    #[error("Error: unable to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The keychain program ran and reported failure.
    #[error("Error (this may not emit any output):")]
    Keychain {
        code: i32,
        stdout: String,
        stderr: String,
    },
}

impl Error {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Keychain { code, .. } => *code,
            _ => 1,
        }
    }
}
