//! Keychain mutation through the macOS `security` program.

use crate::error::{Error, Result};
use crate::settings::Settings;
use std::fmt;
use std::process::Output;
use std::str::FromStr;

/// What to do with the keychain record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Add the selected token, replacing any existing one.
    Add,
    /// Delete the existing token.
    Remove,
}

impl Operation {
    /// `security` subcommand implementing the operation.
    pub fn verb(self) -> &'static str {
        match self {
            Operation::Add => "add-internet-password",
            Operation::Remove => "delete-internet-password",
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Operation::Add),
            "rm" => Ok(Operation::Remove),
            other => Err(Error::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Add => "add",
            Operation::Remove => "rm",
        })
    }
}

/// A fully built invocation of the keychain program.
#[derive(Clone, PartialEq, Eq)]
pub struct KeychainCommand {
    pub operation: Operation,
    pub program: String,
    pub args: Vec<String>,
}

impl KeychainCommand {
    /// Add-or-replace the internet password for `account`.
    pub fn add(settings: &Settings, account: &str, token: &str) -> Self {
        let args = vec![
            Operation::Add.verb().to_string(),
            "-a".to_string(),
            account.to_string(),
            "-s".to_string(),
            settings.service.clone(),
            "-w".to_string(),
            token.to_string(),
            "-U".to_string(),
            "-r".to_string(),
            settings.protocol.clone(),
            settings.keychain_file.clone(),
        ];
        Self {
            operation: Operation::Add,
            program: settings.program.clone(),
            args,
        }
    }

    /// Delete the internet password for `account`.
    pub fn remove(settings: &Settings, account: &str) -> Self {
        let args = vec![
            Operation::Remove.verb().to_string(),
            "-a".to_string(),
            account.to_string(),
            "-s".to_string(),
            settings.service.clone(),
            settings.keychain_file.clone(),
        ];
        Self {
            operation: Operation::Remove,
            program: settings.program.clone(),
            args,
        }
    }

    /// Arguments with the token replaced, safe to log.
    pub fn redacted_args(&self) -> Vec<&str> {
        let mut redact_next = false;
        self.args
            .iter()
            .map(|arg| {
                if std::mem::take(&mut redact_next) {
                    return "<redacted>";
                }
                redact_next = arg == "-w";
                arg.as_str()
            })
            .collect()
    }
}

impl fmt::Debug for KeychainCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeychainCommand")
            .field("operation", &self.operation)
            .field("program", &self.program)
            .field("args", &self.redacted_args())
            .finish()
    }
}

/// Runs a keychain command to completion with its output captured.
pub trait CommandRunner {
    fn run(&self, command: &KeychainCommand) -> std::io::Result<Output>;
}

/// Spawns the real program.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &KeychainCommand) -> std::io::Result<Output> {
        std::process::Command::new(&command.program)
            .args(&command.args)
            .output()
    }
}

/// Execute `command` and turn a non-zero exit into [`Error::Keychain`].
pub fn execute(runner: &dyn CommandRunner, command: &KeychainCommand) -> Result<()> {
    tracing::debug!("Running {:?}", command);

    let output = runner.run(command).map_err(|source| Error::Spawn {
        program: command.program.clone(),
        source,
    })?;

    if output.status.success() {
        return Ok(());
    }

    // Killed by a signal: no code to pass on.
    let code = output.status.code().unwrap_or(1);
    tracing::debug!("{} exited with status {}", command.program, code);

    Err(Error::Keychain {
        code,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
