//! Playlist folder scanning
//!
//! "Loading" a playlist only lists audio filenames from a chosen folder; no
//! file is opened or parsed. The scan is non-recursive and keeps directory
//! enumeration order.

mod scan;

pub use scan::{scan_async, PendingScan};

use std::fmt;
use std::path::Path;

/// Extensions the playlist panel will list (lowercase, without the dot)
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["mp3", "wav", "ogg"];

/// Why a folder scan failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The chosen path is not a directory
    NotADirectory(String),
    /// I/O failure while enumerating (permission denied, deleted mid-scan)
    Io(String),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::NotADirectory(path) => write!(f, "not a directory: {}", path),
            ScanError::Io(msg) => write!(f, "scan failed: {}", msg),
        }
    }
}

impl std::error::Error for ScanError {}

impl From<std::io::Error> for ScanError {
    fn from(e: std::io::Error) -> Self {
        ScanError::Io(e.to_string())
    }
}

/// Check a filename against `SUPPORTED_EXTENSIONS` (case-insensitive)
fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.iter().any(|s| *s == ext)
        })
        .unwrap_or(false)
}

/// List supported audio filenames in `dir`, non-recursive, in directory
/// enumeration order. Subdirectories and unsupported extensions are skipped.
pub fn scan_folder(dir: &Path) -> Result<Vec<String>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // Regular files only; a file deleted mid-scan just drops out
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if is_file && is_supported(&path) {
            files.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_extension_filter() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.mp3", "b.txt", "c.wav"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let mut files = scan_folder(dir.path()).unwrap();
        files.sort();
        assert_eq!(files, ["a.mp3", "c.wav"]);
    }

    #[test]
    fn test_extension_filter_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["LOUD.MP3", "quiet.Ogg", "notes.md"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let mut files = scan_folder(dir.path()).unwrap();
        files.sort();
        assert_eq!(files, ["LOUD.MP3", "quiet.Ogg"]);
    }

    #[test]
    fn test_subdirectories_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("album.mp3")).unwrap();
        File::create(dir.path().join("track.mp3")).unwrap();

        let files = scan_folder(dir.path()).unwrap();
        assert_eq!(files, ["track.mp3"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("no-such-folder");
        match scan_folder(&gone) {
            Err(ScanError::NotADirectory(path)) => assert!(path.contains("no-such-folder")),
            other => panic!("expected NotADirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(scan_folder(dir.path()).unwrap(), Vec::<String>::new());
    }
}
