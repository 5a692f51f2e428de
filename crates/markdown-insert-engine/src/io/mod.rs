use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a text file and split it into lines.
///
/// Both `\n` and `\r\n` endings are accepted; a trailing newline does not
/// produce an extra empty line.
pub fn read_lines(path: &Path) -> Result<Vec<String>, IoError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => IoError::NotFound(path.to_path_buf()),
        _ => IoError::Io(e),
    })?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Read a whole markdown document
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write a processed document, creating parent directories as needed
pub fn write_document(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};

    #[test]
    fn test_read_lines_splits_on_newlines() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "lines.md", "one\ntwo\r\n\nfour\n");

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["one", "two", "", "four"]);
    }

    #[test]
    fn test_read_lines_empty_file() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "empty.md", "");

        assert!(read_lines(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_lines_not_found() {
        let dir = create_test_dir();
        let result = read_lines(&dir.path().join("missing.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_lines_rejects_directories() {
        let dir = create_test_dir();
        let result = read_lines(dir.path());
        assert!(matches!(result, Err(IoError::Io(_))));
    }

    #[test]
    fn test_read_document_success() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "doc.md", "# Title\n\nBody\n");

        assert_eq!(read_document(&path).unwrap(), "# Title\n\nBody\n");
    }

    #[test]
    fn test_read_document_not_found() {
        let result = read_document(Path::new("/this/path/does/not/exist.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_document_creates_parent_directories() {
        let dir = create_test_dir();
        let path = dir.path().join("out").join("nested").join("doc.md");

        write_document(&path, "content\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "content\n");
    }

    #[test]
    fn test_write_document_overwrites_existing() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "doc.md", "old");

        write_document(&path, "new").unwrap();

        assert_eq!(read_document(&path).unwrap(), "new");
    }
}
