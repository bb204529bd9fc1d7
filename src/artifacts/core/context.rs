use crate::artifacts::core::clock::{Clock, SystemClock};
use crate::artifacts::core::id_generator::IdGenerator;
use crate::artifacts::objects::commit_id::CommitId;
use chrono::{DateTime, FixedOffset};
use derive_new::new;
use std::sync::Arc;

/// Collaborators a log needs to create commits: where ids come from and what
/// time it is. Logs built from clones of one context share both.
#[derive(Debug, Clone, new)]
pub struct LogContext {
    ids: Arc<IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl LogContext {
    pub fn ids(&self) -> &IdGenerator {
        &self.ids
    }

    pub fn next_id(&self) -> CommitId {
        self.ids.next_id()
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now()
    }
}

impl Default for LogContext {
    fn default() -> Self {
        LogContext::new(IdGenerator::global(), Arc::new(SystemClock))
    }
}
