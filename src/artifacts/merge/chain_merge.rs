//! Timestamp merge of two commit chains
//!
//! Both inputs are singly-linked chains already ordered from newest to oldest.
//! The merge is the merge step of merge sort, done in place: nodes are
//! relinked, never allocated or copied.
//!
//! ## Ordering
//!
//! - Newer timestamps come first.
//! - Equal timestamps keep the order they had within their own chain.
//! - On a tie across chains the receiving chain (`ours`) goes first.
//!
//! Once `theirs` is exhausted the rest of `ours` is attached as-is, and vice
//! versa; those tails are already sorted.

use crate::artifacts::objects::commit::Link;

/// Merge `theirs` into `ours`, returning the head of the combined chain
pub fn merge_chains(mut ours: Link, mut theirs: Link) -> Link {
    let mut merged: Link = None;
    let mut tail = &mut merged;

    loop {
        let from_ours = match (&ours, &theirs) {
            (Some(mine), Some(incoming)) => mine.timestamp() >= incoming.timestamp(),
            _ => break,
        };

        let source = if from_ours { &mut ours } else { &mut theirs };
        let Some(mut node) = source.take() else {
            break;
        };
        *source = node.previous.take();

        debug_log!(
            "splice {} from {}",
            node.id(),
            if from_ours { "receiver" } else { "other" }
        );
        tail = &mut tail.insert(node).previous;
    }

    *tail = ours.or(theirs);
    merged
}
