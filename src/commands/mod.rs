//! Script replay
//!
//! - `operation`: Parsing of script lines into operations
//! - `replay`: Applying operations to a session and writing their output

pub mod operation;
pub mod replay;
