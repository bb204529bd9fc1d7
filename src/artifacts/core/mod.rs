//! Shared collaborators for building commits
//!
//! - `clock`: timestamp sources
//! - `id_generator`: process-wide commit id counter
//! - `context`: the pair handed to every log

pub mod clock;
pub mod context;
pub mod id_generator;
