//! Core business logic modules.

pub mod engine;
pub mod normalizer;
pub mod renamer;
pub mod report;
pub mod rollback;
pub mod scanner;
pub mod selector;
pub mod similarity;
