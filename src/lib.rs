//! In-memory linear commit history
//!
//! A [`HistoryLog`] keeps commits newest first in a singly-linked chain and
//! supports commit, lookup, removal, bounded history and a timestamp merge of
//! two logs ([`HistoryLog::synchronize`]).

/// Macro for debug logging that is enabled with the debug_history feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("Dropped commit {}", commit_id);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_history")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod error;

pub use areas::history_log::HistoryLog;
pub use artifacts::core::context::LogContext;
pub use artifacts::objects::commit::Commit;
pub use artifacts::objects::commit_id::CommitId;
pub use error::HistoryError;
