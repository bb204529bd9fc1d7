//! Commit history traversal
//!
//! - `iter`: borrowing walk from a head commit to the oldest one

pub mod iter;
