//! Shared data types for the application.

use std::fmt;

/// One record read from the KeePass database.
///
/// Built once during enumeration and never modified afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Entry {
    /// Full entry title as stored in the database.
    pub title: String,
    /// Name of the group that directly contains the entry.
    pub group: String,
    /// The entry's password field, i.e. the token.
    pub password: String,
}

impl Entry {
    pub fn new(
        title: impl Into<String>,
        group: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            group: group.into(),
            password: password.into(),
        }
    }
}

// Keep tokens out of logs.
impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("title", &self.title)
            .field("group", &self.group)
            .field("password", &"<redacted>")
            .finish()
    }
}
