//! Merge of commit chains ordered by timestamp

pub mod chain_merge;
