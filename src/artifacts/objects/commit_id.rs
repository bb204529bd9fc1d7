//! Commit identifier
//!
//! Identifiers are the decimal rendering of a counter value handed out by an
//! [`IdGenerator`](crate::artifacts::core::id_generator::IdGenerator).
//! They are compared as strings, the same way callers pass them in.

/// Commit identifier
///
/// Wraps the decimal string form of an allocated id (e.g. `"0"`, `"17"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Build an identifier from a raw counter value
    pub fn from_counter(value: u64) -> Self {
        Self(value.to_string())
    }

    /// Check whether this identifier matches a caller-supplied id
    pub fn matches(&self, target: &str) -> bool {
        self.0 == target
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for CommitId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
