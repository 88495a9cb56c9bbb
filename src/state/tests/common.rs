use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::input::Key;
use crate::state::EditorState;
use crate::storage::{Storage, StorageError};

/// 5 text rows, 20 text columns, 6-wide gutter.
pub(super) fn test_state(lines: &[&str]) -> EditorState {
	let mut state = EditorState::new(&Config::default());
	state.load_document(PathBuf::from("test.txt"), lines.iter().map(|line| line.to_string()).collect());
	state.set_screen_size(7, 26);
	state
}

pub(super) fn row_texts(state: &EditorState) -> Vec<String> {
	state.document.rows().iter().map(|row| row.chars().to_string()).collect()
}

pub(super) fn chars(text: &str) -> Vec<Key> { text.chars().map(Key::Char).collect() }

#[derive(Default)]
pub(super) struct MemoryStorage {
	pub files:       RefCell<HashMap<PathBuf, String>>,
	pub fail_reads:  bool,
	pub fail_writes: bool,
	pub short_write: bool,
}

impl Storage for MemoryStorage {
	fn load_lines(&self, path: &Path) -> Result<Vec<String>, StorageError> {
		if self.fail_reads {
			return Err(StorageError::Read {
				path:   path.to_path_buf(),
				source: std::io::Error::new(std::io::ErrorKind::InvalidData, "not utf-8"),
			});
		}
		self
			.files
			.borrow()
			.get(path)
			.map(|text| text.lines().map(str::to_owned).collect())
			.ok_or_else(|| StorageError::NotFound { path: path.to_path_buf() })
	}

	fn save_text(&self, path: &Path, text: &str) -> Result<usize, StorageError> {
		if self.fail_writes {
			return Err(StorageError::Write {
				path:   path.to_path_buf(),
				source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
			});
		}
		self.files.borrow_mut().insert(path.to_path_buf(), text.to_string());
		Ok(if self.short_write { text.len() / 2 } else { text.len() })
	}
}
