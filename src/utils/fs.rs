//! File system utilities.

use crate::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Check if a path exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }
    Ok(())
}

/// Get file extension in lowercase.
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
}

/// File name without its extension, lossily converted to UTF-8.
pub fn file_stem_lossy(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Target path for a subtitle renamed after a video.
///
/// Keeps the subtitle's directory and its own extension (original case) and
/// takes the stem from the video.
pub fn renamed_subtitle_path(subtitle: &Path, video: &Path) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = video.file_stem() {
        name.push(stem);
    }
    if let Some(ext) = subtitle.extension() {
        name.push(".");
        name.push(ext);
    }

    match subtitle.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_extension() {
        assert_eq!(get_extension(Path::new("movie.MKV")), Some("mkv".to_string()));
        assert_eq!(get_extension(Path::new("subs.srt")), Some("srt".to_string()));
        assert_eq!(get_extension(Path::new("README")), None);
    }

    #[test]
    fn test_file_stem_lossy() {
        assert_eq!(file_stem_lossy(Path::new("/a/How_to_code_[ABC123].mkv")), "How_to_code_[ABC123]");
        assert_eq!(file_stem_lossy(Path::new("/a/archive.tar.gz")), "archive.tar");
    }

    #[test]
    fn test_renamed_subtitle_path() {
        let new_path = renamed_subtitle_path(
            Path::new("/media/subs/How_to_code_-_YouTube-zh-CN-dual-double.srt"),
            Path::new("/media/How_to_code_[ABC123].mkv"),
        );
        assert_eq!(new_path, PathBuf::from("/media/subs/How_to_code_[ABC123].srt"));
    }

    #[test]
    fn test_renamed_subtitle_path_keeps_extension_case() {
        let new_path = renamed_subtitle_path(Path::new("Talk.ASS"), Path::new("Talk Final.mp4"));
        assert_eq!(new_path, PathBuf::from("Talk Final.ASS"));
    }

    #[test]
    fn test_ensure_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        assert!(ensure_directory(temp_dir.path()).is_ok());

        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(matches!(
            ensure_directory(&file),
            Err(crate::Error::NotADirectory(_))
        ));
        assert!(matches!(
            ensure_directory(&temp_dir.path().join("missing")),
            Err(crate::Error::PathNotFound(_))
        ));
    }
}
