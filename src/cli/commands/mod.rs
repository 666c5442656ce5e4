//! CLI command implementations.

pub mod match_files;
pub mod rollback;
