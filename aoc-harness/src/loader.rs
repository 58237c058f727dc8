//! Reading puzzle input from disk

use crate::error::LoadError;
use crate::shape::{ParameterShape, PuzzleInput};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read a whole file as text
///
/// # Returns
/// * `Ok(String)` - The file content
/// * `Err(LoadError::NotFound)` - The path does not exist
/// * `Err(LoadError::Io)` - Any other read failure
pub fn read_input(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Read a file and shape it for a callable
pub fn load_input(path: &Path, shape: ParameterShape) -> Result<PuzzleInput, LoadError> {
    let text = read_input(path)?;
    debug!(path = %path.display(), bytes = text.len(), %shape, "loaded input");
    Ok(PuzzleInput::from_text(text, shape))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("input.txt");

        match load_input(&path, ParameterShape::Lines) {
            Err(LoadError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("input.txt");
        fs::write(&path, "1721\n979\n366\n").unwrap();

        let input = load_input(&path, ParameterShape::Lines).unwrap();
        assert_eq!(
            input,
            PuzzleInput::Lines(vec!["1721".into(), "979".into(), "366".into()])
        );
    }

    #[test]
    fn test_load_raw_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("input.txt");
        fs::write(&path, "Time: 7 15\nDistance: 9 40\n").unwrap();

        let input = load_input(&path, ParameterShape::RawText).unwrap();
        assert_eq!(
            input,
            PuzzleInput::Text("Time: 7 15\nDistance: 9 40\n".to_string())
        );
    }

    #[test]
    fn test_directory_is_io_error() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            read_input(temp.path()),
            Err(LoadError::Io { .. })
        ));
    }
}
