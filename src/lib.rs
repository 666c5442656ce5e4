//! Subtitle Matcher Library
//!
//! Pairs subtitle files with the video files they belong to and renames them
//! to the video's base name.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
