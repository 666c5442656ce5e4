//! File rename collaborator.

use crate::Result;
use std::path::Path;

/// Performs a single rename on behalf of the engine.
pub trait Renamer {
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
}

/// Renames files on the local file system.
///
/// Never overwrites: a rename onto an existing file fails with
/// `FileAlreadyExists`, unless the destination is the source itself (a
/// case-only rename on a case-insensitive file system).
#[derive(Debug, Clone, Copy, Default)]
pub struct FsRenamer;

impl Renamer for FsRenamer {
    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        if to.exists() && !is_same_file(from, to) {
            return Err(crate::Error::FileAlreadyExists(to.display().to_string()));
        }
        std::fs::rename(from, to)?;
        Ok(())
    }
}

/// Check whether two paths refer to the same file on disk.
#[cfg(unix)]
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (std::fs::metadata(a), std::fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

/// Check whether two paths refer to the same file on disk.
#[cfg(not(unix))]
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

impl<R: Renamer + ?Sized> Renamer for &R {
    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        (**self).rename(from, to)
    }
}
