use crate::artifacts::core::context::LogContext;
use crate::artifacts::log::iter::Iter;
use crate::artifacts::merge::chain_merge::merge_chains;
use crate::artifacts::objects::commit::{Commit, Link};
use crate::artifacts::objects::commit_id::CommitId;
use crate::error::HistoryError;

/// A named, linear commit history
///
/// Commits are kept in a singly-linked chain owned by `head`, newest first,
/// with timestamps never increasing along the chain. `count` always equals the
/// number of commits reachable from `head`.
pub struct HistoryLog {
    name: String,
    head: Link,
    count: usize,
    context: LogContext,
}

impl HistoryLog {
    /// Create an empty log that draws ids from the process-wide generator and
    /// timestamps from the system clock
    pub fn new(name: impl Into<String>) -> Result<Self, HistoryError> {
        Self::with_context(name, LogContext::default())
    }

    /// Create an empty log with explicit id and clock collaborators
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `name` is empty.
    pub fn with_context(
        name: impl Into<String>,
        context: LogContext,
    ) -> Result<Self, HistoryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(HistoryError::invalid_argument("log name must not be empty"));
        }

        Ok(HistoryLog {
            name,
            head: None,
            count: 0,
            context,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn head(&self) -> Option<&Commit> {
        self.head.as_deref()
    }

    /// Identifier of the most recent commit, `None` when the log is empty
    pub fn head_id(&self) -> Option<&CommitId> {
        self.head().map(Commit::id)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.head())
    }

    /// `"<name> - No commits"` or `"<name> - Current head: <commit>"`
    pub fn describe(&self) -> String {
        match self.head() {
            Some(head) => format!("{} - Current head: {}", self.name, head),
            None => format!("{} - No commits", self.name),
        }
    }

    pub fn contains(&self, target_id: &str) -> bool {
        self.iter().any(|commit| commit.id().matches(target_id))
    }

    /// Render the `n` most recent commits, newest first, one per line
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `n` is zero.
    pub fn history(&self, n: usize) -> Result<String, HistoryError> {
        if n == 0 {
            return Err(HistoryError::invalid_argument(
                "history length must be positive",
            ));
        }

        Ok(self
            .iter()
            .take(n.min(self.count))
            .map(|commit| format!("{commit}\n"))
            .collect())
    }

    /// Record a new commit on top of the current head and return its id
    pub fn commit(&mut self, message: impl Into<String>) -> CommitId {
        let id = self.context.next_id();
        let commit = Commit::new(
            id.clone(),
            message.into(),
            self.context.now(),
            self.head.take(),
        );

        self.head = Some(Box::new(commit));
        self.count += 1;
        debug_log!("{}: committed {} ({} commits)", self.name, id, self.count);

        id
    }

    /// Unlink the first commit (from the head) whose id is `target_id`
    ///
    /// Returns `false` and leaves the log untouched if no commit matches.
    pub fn drop_commit(&mut self, target_id: &str) -> bool {
        if self
            .head
            .as_ref()
            .is_some_and(|head| head.id().matches(target_id))
        {
            if let Some(mut removed) = self.head.take() {
                self.head = removed.previous.take();
            }
            self.count -= 1;
            debug_log!("{}: dropped head {}", self.name, target_id);
            return true;
        }

        let Some(mut current) = self.head.as_mut() else {
            return false;
        };

        loop {
            if current
                .previous
                .as_ref()
                .is_some_and(|previous| previous.id().matches(target_id))
            {
                if let Some(mut removed) = current.previous.take() {
                    current.previous = removed.previous.take();
                }
                self.count -= 1;
                debug_log!("{}: dropped {}", self.name, target_id);
                return true;
            }

            match current.previous.as_mut() {
                Some(previous) => current = previous,
                None => return false,
            }
        }
    }

    /// Move every commit of `other` into this log, keeping timestamp order
    ///
    /// Commits are relinked, not copied. Afterwards `other` is empty and this
    /// log holds the commits of both. On equal timestamps this log's commit
    /// comes first.
    pub fn synchronize(&mut self, other: &mut HistoryLog) {
        if other.head.is_none() {
            return;
        }

        debug_log!(
            "{}: synchronizing {} commits from {}",
            self.name,
            other.count,
            other.name
        );
        let theirs = other.head.take();
        let ours = self.head.take();
        self.head = merge_chains(ours, theirs);
        self.count += other.count;
        other.count = 0;
    }
}

impl std::fmt::Display for HistoryLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

// The chain is summarized by its head id; walking it would recurse per commit.
impl std::fmt::Debug for HistoryLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryLog")
            .field("name", &self.name)
            .field("count", &self.count)
            .field("head", &self.head_id())
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a Commit;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Drop for HistoryLog {
    // Unlink one node at a time; the default drop recurses once per commit.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut commit) = link {
            link = commit.previous.take();
        }
    }
}
