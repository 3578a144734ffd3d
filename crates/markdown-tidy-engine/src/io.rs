//! Boundary plumbing: getting a whole document into memory.
//!
//! The pipeline itself is infallible and works on one in-memory string;
//! only this edge returns errors.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a whole document file into memory.
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Drain stdin to a single string; parsing expects complete input.
pub fn read_stdin() -> Result<String, IoError> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_file_returns_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "# Title\n\nBody").unwrap();

        let content = read_file(&path).unwrap();
        assert_eq!(content, "# Title\n\nBody");
    }

    #[test]
    fn read_file_reports_missing_path() {
        let result = read_file(Path::new("/nonexistent/doc.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
