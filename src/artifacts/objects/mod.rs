//! Commit node types
//!
//! - **Commit**: one history entry (id, message, timestamp, link to the previous entry)
//! - **CommitId**: the identifier handed out when a commit is created

pub mod commit;
pub mod commit_id;
