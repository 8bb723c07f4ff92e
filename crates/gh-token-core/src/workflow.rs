//! The add/rm pipeline: validate, pick a token, mutate the keychain.

use crate::catalog::Catalog;
use crate::database::{Credentials, KeepassDatabase};
use crate::error::{Error, Result};
use crate::keychain::{self, CommandRunner, KeychainCommand, Operation};
use crate::probe::AccountProbe;
use crate::settings::Settings;
use std::path::{Path, PathBuf};

/// Positional arguments of one invocation.
#[derive(Debug, Clone)]
pub struct Request {
    pub database: PathBuf,
    pub account: String,
    pub operation: String,
}

/// Asks the user for the master password without echoing it.
pub trait PasswordPrompt {
    fn prompt(&mut self, database: &Path, key_file: Option<&Path>) -> std::io::Result<String>;
}

/// Lets the user choose one of an ordered list of candidates.
///
/// `Ok(None)` means the user backed out.
pub trait Selector {
    fn select(&mut self, candidates: &[String]) -> anyhow::Result<Option<String>>;
}

/// A completed keychain change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub operation: Operation,
}

impl Outcome {
    pub fn verb(&self) -> &'static str {
        self.operation.verb()
    }
}

/// One run of the pipeline with its collaborators.
pub struct Workflow<'a> {
    settings: &'a Settings,
    probe: &'a dyn AccountProbe,
    prompt: &'a mut dyn PasswordPrompt,
    selector: &'a mut dyn Selector,
    runner: &'a dyn CommandRunner,
}

impl<'a> Workflow<'a> {
    pub fn new(
        settings: &'a Settings,
        probe: &'a dyn AccountProbe,
        prompt: &'a mut dyn PasswordPrompt,
        selector: &'a mut dyn Selector,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            settings,
            probe,
            prompt,
            selector,
            runner,
        }
    }

    pub fn run(&mut self, request: &Request) -> Result<Outcome> {
        let operation = self.validate(request)?;

        let command = match operation {
            Operation::Add => {
                let token = self.choose_token(&request.database)?;
                KeychainCommand::add(self.settings, &request.account, &token)
            }
            Operation::Remove => KeychainCommand::remove(self.settings, &request.account),
        };

        keychain::execute(self.runner, &command)?;
        tracing::info!("{} succeeded for {}", operation.verb(), request.account);
        Ok(Outcome { operation })
    }

    /// Checks run in order and stop at the first failure: database file,
    /// account profile, operation name.
    fn validate(&self, request: &Request) -> Result<Operation> {
        if !request.database.is_file() {
            return Err(Error::DatabaseNotFound(request.database.clone()));
        }

        let url = self.settings.profile_url(&request.account);
        self.probe
            .check(&url)
            .map_err(|e| Error::AccountNotFound {
                url,
                reason: format!("{e:#}"),
            })?;

        request.operation.parse()
    }

    fn choose_token(&mut self, database: &Path) -> Result<String> {
        let key_file = self.settings.key_file.as_deref();
        let password = self
            .prompt
            .prompt(database, key_file)
            .map_err(Error::Prompt)?;

        let credentials = Credentials::new(password, key_file.map(Path::to_path_buf));
        let db = KeepassDatabase::unlock(database, &credentials)?;

        let catalog = Catalog::from_entries(db.entries());
        let candidates = catalog.candidates();
        tracing::debug!("{} selectable entries", candidates.len());

        let title = match self.selector.select(&candidates) {
            Ok(Some(title)) if !title.is_empty() => title,
            Ok(_) => return Err(Error::Cancelled),
            Err(e) => return Err(Error::Selector(format!("{e:#}"))),
        };

        catalog
            .get(&title)
            .map(|entry| entry.password.clone())
            .ok_or(Error::MissingEntry(title))
    }
}
