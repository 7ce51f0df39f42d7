use std::fs;
use std::path::{Path, PathBuf};

use noteblocks_syntax::ast::NoteDelimiter;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Buffer {path} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        path: PathBuf,
        source: std::str::Utf8Error,
    },
}

/// Contents of a brand-new buffer: one empty auto-detected block.
pub fn new_buffer_text(language: &str) -> String {
    NoteDelimiter::format(language, true)
}

/// Read a note buffer
pub fn read_buffer(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|err| IoError::InvalidUtf8 {
        path: path.to_path_buf(),
        source: err.utf8_error(),
    })
}

/// Read a note buffer, or start a new one if the file does not exist yet.
///
/// Nothing is written until the buffer is saved.
pub fn read_or_new_buffer(path: &Path, language: &str) -> Result<String, IoError> {
    match read_buffer(path) {
        Err(IoError::NotFound(_)) => {
            log::info!("{} does not exist, starting a new buffer", path.display());
            Ok(new_buffer_text(language))
        }
        other => other,
    }
}

/// Write a note buffer verbatim
pub fn write_buffer(path: &Path, content: &[u8]) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_is_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("buffer.txt");
        let content = "\n∞∞∞text\r\nkeep my line endings\r\n";

        write_buffer(&path, content.as_bytes()).unwrap();

        assert_eq!(read_buffer(&path).unwrap(), content);
    }

    #[test]
    fn test_missing_buffer_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = read_buffer(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_missing_buffer_starts_fresh() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let text = read_or_new_buffer(&path, "markdown").unwrap();

        assert_eq!(text, "\n∞∞∞markdown-a\n");
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_utf8_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.bin");
        std::fs::write(&path, [0xff, 0x00, 0xfe]).unwrap();

        let err = read_buffer(&path).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
