//! History data structures and algorithms
//!
//! This module contains the building blocks of a history log:
//!
//! - `core`: Id allocation, clocks and the context tying them together
//! - `log`: Chain traversal
//! - `merge`: Timestamp merge of two chains
//! - `objects`: Commit nodes and identifiers

pub mod core;
pub mod log;
pub mod merge;
pub mod objects;
