#![allow(dead_code)]

pub mod command;

/// Timestamp every test run starts from, one second per commit
pub const PINNED_DATE: &str = "2023-01-01 12:00:00 +0000";
