use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use super::{Document, EditorState, PromptKind};
use crate::storage::{Storage, StorageError};

const SAVE_AS_PROMPT: &str = "save as: {} (ESC to cancel)";

impl EditorState {
	/// Loads `path` into the editor. A missing file starts an empty document
	/// that will be created on the first save; other failures keep the
	/// current document and report through the status line.
	pub fn open_file(&mut self, storage: &dyn Storage, path: PathBuf) {
		match storage.load_lines(&path) {
			Ok(lines) => {
				info!("opened {} ({} lines)", path.display(), lines.len());
				self.load_document(path, lines);
			}
			Err(StorageError::NotFound { .. }) => {
				info!("{} does not exist, starting a new file", path.display());
				self.load_document(path, Vec::new());
				self.set_status_message("new file");
			}
			Err(err) => {
				let err = anyhow::Error::new(err);
				error!("open failed: {:#}", err);
				self.set_status_message(format!("can't open file! {:#}", err));
			}
		}
	}

	/// Writes the document to its file, asking for a name first when it has
	/// none.
	pub fn save(&mut self, storage: &dyn Storage) {
		let Some(path) = self.document.filename().map(Path::to_path_buf) else {
			self.open_prompt(PromptKind::SaveAs, SAVE_AS_PROMPT);
			return;
		};

		let (text, len) = self.document.rows_to_text();
		match storage.save_text(&path, &text) {
			Ok(written) if written == len => {
				info!("saved {} ({} bytes)", path.display(), len);
				self.document.mark_clean();
				self.set_status_message(format!("{} bytes written to disk", len));
			}
			Ok(written) => {
				warn!("short write to {}: {} of {} bytes", path.display(), written, len);
				self.set_status_message(format!("can't save! I/O error: wrote {} of {} bytes", written, len));
			}
			Err(err) => {
				let err = anyhow::Error::new(err);
				error!("save failed: {:#}", err);
				self.set_status_message(format!("can't save! {:#}", err));
			}
		}
	}

	pub fn save_as(&mut self, storage: &dyn Storage, filename: impl Into<PathBuf>) {
		self.document.set_filename(filename.into());
		self.save(storage);
	}
}

impl Document {
	pub fn display_name(&self) -> String {
		self.filename().map(|path| path.display().to_string()).unwrap_or_else(|| "[No Name]".to_string())
	}
}
