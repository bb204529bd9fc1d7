//! Stateful components
//!
//! - `history_log`: A named commit history and its operations
//! - `session`: Named logs sharing one context, driven by scripts

pub mod history_log;
pub mod session;
