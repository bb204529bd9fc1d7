//! Commit id allocation
//!
//! Ids come from a monotonically increasing counter starting at 0. Every log
//! created from the default [`LogContext`](crate::artifacts::core::context::LogContext)
//! shares the process-wide generator returned by [`IdGenerator::global`], so
//! ids stay unique across logs and are never reused when a log goes away.

use crate::artifacts::objects::commit_id::CommitId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

static GLOBAL: LazyLock<Arc<IdGenerator>> = LazyLock::new(|| Arc::new(IdGenerator::new()));

#[derive(Debug, Default)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    pub const fn new() -> Self {
        IdGenerator {
            next: AtomicU64::new(0),
        }
    }

    /// The process-wide generator used by default contexts
    pub fn global() -> Arc<IdGenerator> {
        GLOBAL.clone()
    }

    /// Allocate the next id
    pub fn next_id(&self) -> CommitId {
        CommitId::from_counter(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// The id the next call to [`next_id`](Self::next_id) will hand out
    pub fn peek(&self) -> CommitId {
        CommitId::from_counter(self.next.load(Ordering::Relaxed))
    }

    /// Rewind the counter back to 0.
    ///
    /// Test isolation only: ids issued before the reset will collide with ids
    /// issued after it, so never call this while commits from earlier
    /// allocations are still compared against new ones.
    pub fn reset(&self) {
        self.next.store(0, Ordering::Relaxed);
    }
}
