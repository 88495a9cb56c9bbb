use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
	#[error("file not found: {path}")]
	NotFound { path: PathBuf },
	#[error("read file failed: {path}")]
	Read {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("write file failed: {path}")]
	Write {
		path:   PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Where documents are loaded from and saved to.
pub trait Storage {
	/// Lines of the resource with their line endings removed.
	fn load_lines(&self, path: &Path) -> Result<Vec<String>, StorageError>;

	/// Writes `text` and returns the number of bytes written.
	fn save_text(&self, path: &Path, text: &str) -> Result<usize, StorageError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
	fn load_lines(&self, path: &Path) -> Result<Vec<String>, StorageError> {
		let bytes = fs::read(path).map_err(|source| match source.kind() {
			ErrorKind::NotFound => StorageError::NotFound { path: path.to_path_buf() },
			_ => StorageError::Read { path: path.to_path_buf(), source },
		})?;
		let text = String::from_utf8(bytes).map_err(|err| StorageError::Read {
			path:   path.to_path_buf(),
			source: io::Error::new(ErrorKind::InvalidData, err),
		})?;
		Ok(split_lines(&text))
	}

	fn save_text(&self, path: &Path, text: &str) -> Result<usize, StorageError> {
		fs::write(path, text).map_err(|source| StorageError::Write { path: path.to_path_buf(), source })?;
		Ok(text.len())
	}
}

pub(crate) fn split_lines(text: &str) -> Vec<String> {
	text.lines().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn split_lines_strips_newlines_and_carriage_returns() {
		assert_eq!(split_lines("abc\r\nde\n\n"), vec!["abc", "de", ""]);
		assert_eq!(split_lines("no newline"), vec!["no newline"]);
		assert!(split_lines("").is_empty());
	}

	#[test]
	fn save_then_load_keeps_lines() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("doc.txt");
		let written = FsStorage.save_text(&path, "abc\n\tde\n").expect("save should succeed");
		assert_eq!(written, 8);
		assert_eq!(FsStorage.load_lines(&path).expect("load should succeed"), vec!["abc", "\tde"]);
	}

	#[test]
	fn missing_file_is_reported_as_not_found() {
		let dir = tempfile::tempdir().expect("tempdir");
		let err = FsStorage.load_lines(&dir.path().join("missing.txt")).expect_err("should fail");
		assert!(matches!(err, StorageError::NotFound { .. }));
	}

	#[test]
	fn write_into_missing_directory_fails() {
		let dir = tempfile::tempdir().expect("tempdir");
		let err = FsStorage.save_text(&dir.path().join("nope").join("doc.txt"), "x\n").expect_err("should fail");
		assert!(matches!(err, StorageError::Write { .. }));
	}
}
