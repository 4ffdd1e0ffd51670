//! Plain text file reads and writes
//!
//! Content is written byte-for-byte. Reads decode UTF-8 and substitute U+FFFD
//! for invalid sequences instead of refusing the file.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read the whole file as text.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("{} is not valid UTF-8, decoding lossily", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}

/// Create or truncate `path` and write `text` to it.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_is_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let text = "line one\r\nline two\n\ttabbed  \u{e9}\n";

        write_text(&path, text).unwrap();
        assert_eq!(fs::read(&path).unwrap(), text.as_bytes());
        assert_eq!(read_text(&path).unwrap(), text);
    }

    #[test]
    fn test_write_truncates_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        write_text(&path, "a much longer first version").unwrap();
        write_text(&path, "short").unwrap();
        assert_eq!(read_text(&path).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, Error::Read { path: ref p, .. } if p == &path));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("a.txt");
        let err = write_text(&path, "x").unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"caf\xe9").unwrap();
        assert_eq!(read_text(&path).unwrap(), "caf\u{fffd}");
    }
}
