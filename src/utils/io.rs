//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole file as UTF-8 text.
///
/// Invalid UTF-8 maps to `file.invalid_encoding`; every other failure maps to
/// `internal.io_error` with `operation` as context.
pub fn read_text(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::InvalidData {
            Error::file_invalid_encoding(path.display().to_string(), e.to_string())
        } else {
            Error::internal_io(e.to_string(), Some(operation.to_string()))
        }
    })
}

/// Write content to file with standardized error handling.
pub fn write_text(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn read_text_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "import a from './a.js';").unwrap();

        let content = read_text(temp.path(), "test read").unwrap();
        assert!(content.contains("./a.js"));
    }

    #[test]
    fn read_text_returns_io_error_for_missing_file() {
        let err = read_text(Path::new("/nonexistent/path.ts"), "test read").unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
        assert_eq!(err.details["context"], "test read");
    }

    #[test]
    fn read_text_rejects_invalid_utf8() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&[0x66, 0x72, 0xff, 0xfe, 0x6f]).unwrap();

        let err = read_text(temp.path(), "test read").unwrap_err();
        assert_eq!(err.code.as_str(), "file.invalid_encoding");
    }

    #[test]
    fn write_text_succeeds_for_valid_path() {
        let temp = NamedTempFile::new().unwrap();
        write_text(temp.path(), "new content", "test write").unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content, "new content");
    }

    #[test]
    fn write_text_fails_when_target_is_a_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = write_text(dir.path(), "content", "test write").unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
        assert_eq!(err.details["context"], "test write");
    }

    #[test]
    fn write_text_returns_error_for_invalid_path() {
        let err = write_text(
            Path::new("/nonexistent/dir/file.ts"),
            "content",
            "test write",
        )
        .unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }
}
