//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use gh_token_core::{
    AccountProbe, CommandRunner, KeychainCommand, PasswordPrompt, Selector,
};
use keepass::{config::DatabaseConfig, db::Node, db::Value, Database, DatabaseKey};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::process::Output;

pub const PASSWORD: &str = "correct horse";

pub fn token_entry(title: &str, token: &str) -> keepass::db::Entry {
    let mut entry = keepass::db::Entry::new();
    entry.fields.insert("Title".to_string(), Value::Unprotected(title.to_string()));
    entry.fields.insert("Password".to_string(), Value::Protected(token.as_bytes().into()));
    entry
}

/// Groups of `(title, token)` pairs, written in order.
pub fn write_database(
    path: &Path,
    key: DatabaseKey,
    groups: &[(&str, Vec<(&str, &str)>)],
) {
    let mut db = Database::new(DatabaseConfig::default());
    for (name, entries) in groups {
        let mut group = keepass::db::Group::new(name);
        for (title, token) in entries.iter() {
            group.children.push(Node::Entry(token_entry(title, token)));
        }
        db.root.children.push(Node::Group(group));
    }
    let mut file = std::fs::File::create(path).unwrap();
    db.save(&mut file, key).unwrap();
}

pub fn sample_database(dir: &Path) -> PathBuf {
    let path = dir.join("tokens.kdbx");
    write_database(
        &path,
        DatabaseKey::new().with_password(PASSWORD),
        &[
            (
                "GitHub",
                vec![
                    ("admin (expires 2025)", "ghp_old"),
                    ("admin (expires 2026)", "ghp_new"),
                    ("alpha", "ghp_alpha"),
                    ("Beta", "ghp_beta"),
                ],
            ),
            ("Recycle Bin", vec![("zz deleted", "ghp_deleted")]),
        ],
    );
    path
}

/// Probe that records calls and answers with a fixed result.
#[derive(Default)]
pub struct StubProbe {
    pub fail: bool,
    pub calls: RefCell<Vec<String>>,
}

impl StubProbe {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl AccountProbe for StubProbe {
    fn check(&self, url: &str) -> anyhow::Result<()> {
        self.calls.borrow_mut().push(url.to_string());
        if self.fail {
            anyhow::bail!("HTTP status client error (404 Not Found)");
        }
        Ok(())
    }
}

pub struct StubPrompt {
    pub password: String,
    pub calls: usize,
    pub key_file_seen: Option<PathBuf>,
}

impl StubPrompt {
    pub fn new(password: &str) -> Self {
        Self {
            password: password.to_string(),
            calls: 0,
            key_file_seen: None,
        }
    }
}

impl PasswordPrompt for StubPrompt {
    fn prompt(&mut self, _database: &Path, key_file: Option<&Path>) -> std::io::Result<String> {
        self.calls += 1;
        self.key_file_seen = key_file.map(Path::to_path_buf);
        Ok(self.password.clone())
    }
}

/// Selector that answers with a scripted choice and remembers what it was shown.
pub struct ScriptedSelector {
    pub choice: Option<String>,
    pub shown: Option<Vec<String>>,
}

impl ScriptedSelector {
    pub fn choosing(title: &str) -> Self {
        Self {
            choice: Some(title.to_string()),
            shown: None,
        }
    }

    pub fn cancelling() -> Self {
        Self {
            choice: None,
            shown: None,
        }
    }
}

impl Selector for ScriptedSelector {
    fn select(&mut self, candidates: &[String]) -> anyhow::Result<Option<String>> {
        self.shown = Some(candidates.to_vec());
        Ok(self.choice.clone())
    }
}

/// Runner that records commands and exits with a fixed status.
pub struct RecordingRunner {
    pub exit_code: i32,
    pub stdout: &'static str,
    pub stderr: &'static str,
    pub commands: RefCell<Vec<KeychainCommand>>,
    pub runs: Cell<usize>,
}

impl RecordingRunner {
    pub fn exiting(exit_code: i32) -> Self {
        Self {
            exit_code,
            stdout: "",
            stderr: "",
            commands: RefCell::new(Vec::new()),
            runs: Cell::new(0),
        }
    }
}

#[cfg(unix)]
fn exit_status(code: i32) -> std::process::ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
fn exit_status(code: i32) -> std::process::ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(code as u32)
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &KeychainCommand) -> std::io::Result<Output> {
        self.runs.set(self.runs.get() + 1);
        self.commands.borrow_mut().push(command.clone());
        Ok(Output {
            status: exit_status(self.exit_code),
            stdout: self.stdout.as_bytes().to_vec(),
            stderr: self.stderr.as_bytes().to_vec(),
        })
    }
}
