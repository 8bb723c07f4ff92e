//! Core models and workflow for gh-token.
//!
//! This crate opens a KeePass database, turns its entries into a selectable
//! catalog, and installs or removes the chosen token as a `github.com`
//! internet password in a macOS keychain file. The terminal frontend lives in
//! `gh-token-tui`.

pub mod catalog;
pub mod database;
pub mod error;
pub mod keychain;
pub mod models;
pub mod probe;
pub mod settings;
pub mod workflow;

pub use catalog::{display_title, Catalog};
pub use database::{Credentials, KeepassDatabase};
pub use error::{Error, Result};
pub use keychain::{CommandRunner, KeychainCommand, Operation, SystemRunner};
pub use models::Entry;
pub use probe::{AccountProbe, HttpProbe};
pub use settings::Settings;
pub use workflow::{Outcome, PasswordPrompt, Request, Selector, Workflow};
