//! KeePass database operations wrapper.

use crate::error::{Error, Result};
use crate::models::Entry;
use keepass::db::{Group, Node};
use keepass::{Database, DatabaseKey};
use std::path::{Path, PathBuf};

/// What is needed to decrypt a database.
#[derive(Clone, Default)]
pub struct Credentials {
    /// Master password. Empty means the key has no password component.
    pub password: String,
    /// Optional key file combined with the password.
    pub key_file: Option<PathBuf>,
}

impl Credentials {
    pub fn new(password: impl Into<String>, key_file: Option<PathBuf>) -> Self {
        Self {
            password: password.into(),
            key_file,
        }
    }

    /// Build the composite database key.
    fn database_key(&self) -> Result<DatabaseKey> {
        let mut key = DatabaseKey::new();

        if let Some(path) = &self.key_file {
            let keyfile_error = |source| Error::KeyFile {
                path: path.clone(),
                source,
            };
            let mut file = std::fs::File::open(path).map_err(keyfile_error)?;
            key = key.with_keyfile(&mut file).map_err(keyfile_error)?;
        }

        if !self.password.is_empty() {
            key = key.with_password(&self.password);
        }

        Ok(key)
    }
}

/// An unlocked KeePass database.
pub struct KeepassDatabase {
    db: Database,
}

impl KeepassDatabase {
    /// Open and unlock a KeePass database.
    ///
    /// Decryption can take several seconds for databases with expensive KDF
    /// settings, especially when a key file is involved.
    pub fn unlock(path: impl AsRef<Path>, credentials: &Credentials) -> Result<Self> {
        let path = path.as_ref();
        let key = credentials.database_key()?;

        let mut file = std::fs::File::open(path).map_err(|e| Error::Unlock(e.to_string()))?;

        tracing::debug!("Decrypting {}", path.display());
        let db = Database::open(&mut file, key).map_err(|e| Error::Unlock(e.to_string()))?;
        tracing::debug!("Decrypted {}", path.display());

        Ok(Self { db })
    }

    /// Every entry in the database, depth-first in document order.
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries = Vec::new();
        collect_entries(&self.db.root, &mut entries);
        entries
    }
}

fn collect_entries(group: &Group, entries: &mut Vec<Entry>) {
    for node in &group.children {
        match node {
            Node::Entry(e) => entries.push(Entry {
                title: e.get_title().unwrap_or_default().to_string(),
                group: group.name.clone(),
                password: e.get_password().unwrap_or_default().to_string(),
            }),
            Node::Group(g) => collect_entries(g, entries),
        }
    }
}
