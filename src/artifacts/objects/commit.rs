//! Commit node
//!
//! A commit is a single entry in a [`HistoryLog`](crate::areas::history_log::HistoryLog)
//! chain. It contains:
//! - A unique identifier
//! - The commit message
//! - The creation timestamp
//! - An owning link to the chronologically previous commit
//!
//! ## Display
//!
//! ```text
//! <id> at <yyyy-mm-dd> at <hh:mm:ss> <zone>: <message>
//! ```
//!
//! For example `3 at 2024-01-15 at 14:32:07 UTC: fix parser`.
//!
//! `<zone>` is the fixed UTC offset of the timestamp, rendered as `UTC` or
//! `UTC+02:00`. Zone abbreviations such as `CET` are never produced, because a
//! stored timestamp only carries its offset.

use crate::artifacts::objects::commit_id::CommitId;
use chrono::{DateTime, FixedOffset};

/// Owning link to the next (older) commit in a chain
pub type Link = Option<Box<Commit>>;

/// A single commit in a history chain
///
/// Everything except the `previous` link is fixed at construction. Only the
/// crate relinks `previous`; callers see read-only accessors.
pub struct Commit {
    id: CommitId,
    message: String,
    timestamp: DateTime<FixedOffset>,
    pub(crate) previous: Link,
}

impl Commit {
    pub(crate) fn new(
        id: CommitId,
        message: String,
        timestamp: DateTime<FixedOffset>,
        previous: Link,
    ) -> Self {
        Commit {
            id,
            message,
            timestamp,
            previous,
        }
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// The chronologically previous commit, if any
    pub fn previous(&self) -> Option<&Commit> {
        self.previous.as_deref()
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "2024-01-15 at 14:32:07 UTC"
    pub fn readable_timestamp(&self) -> String {
        format!(
            "{} {}",
            self.timestamp.format("%Y-%m-%d at %H:%M:%S"),
            zone_label(self.timestamp.offset())
        )
    }
}

/// Render a fixed offset as a zone abbreviation: `UTC`, `UTC+05:30`, `UTC-08:00`
fn zone_label(offset: &FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    if seconds == 0 {
        return "UTC".to_string();
    }

    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.unsigned_abs();
    format!("UTC{}{:02}:{:02}", sign, seconds / 3600, (seconds % 3600) / 60)
}

// Shows the previous commit by id only, so formatting stays flat on long chains.
impl std::fmt::Debug for Commit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Commit")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("timestamp", &self.timestamp)
            .field("previous", &self.previous().map(Commit::id))
            .finish()
    }
}

impl std::fmt::Display for Commit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}: {}",
            self.id,
            self.readable_timestamp(),
            self.message
        )
    }
}
