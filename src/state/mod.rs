use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::{Config, LineNumbers};

mod document;
mod edit;
mod file;
mod prompt;
mod row;
mod search;
mod viewport;

#[cfg(test)]
mod tests;

pub use document::Document;
pub use edit::Direction;
pub use prompt::{Prompt, PromptKind, PromptOutcome};
pub use row::{Row, TAB_STOP};
pub use search::{FindDirection, FindState, SearchSnapshot};
pub use viewport::Viewport;

/// Lines taken by the status bar and the message bar.
pub const RESERVED_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
	pub x: usize,
	pub y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
	#[default]
	Normal,
	Insert,
}

impl Mode {
	pub fn as_str(&self) -> &'static str {
		match self {
			Mode::Normal => "NORMAL",
			Mode::Insert => "INSERT",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
	pub text:   String,
	pub set_at: Instant,
}

#[derive(Debug)]
pub struct EditorState {
	pub document:        Document,
	pub cursor:          Cursor,
	pub viewport:        Viewport,
	pub mode:            Mode,
	pub status:          Option<StatusMessage>,
	pub prompt:          Option<Prompt>,
	pub find:            FindState,
	pub line_numbers:    LineNumbers,
	/// Configured gutter width; the drawn gutter grows past it to fit the
	/// largest line number.
	pub min_gutter:      u16,
	pub message_timeout: Duration,
}

impl EditorState {
	pub fn new(config: &Config) -> Self {
		Self {
			document:        Document::new(),
			cursor:          Cursor::default(),
			viewport:        Viewport::default(),
			mode:            Mode::Normal,
			status:          None,
			prompt:          None,
			find:            FindState::default(),
			line_numbers:    config.line_numbers,
			min_gutter:      config.effective_gutter_width(),
			message_timeout: Duration::from_secs(config.message_timeout_secs),
		}
	}

	/// Replaces the document with freshly loaded lines and resets the view.
	pub fn load_document(&mut self, filename: PathBuf, lines: Vec<String>) {
		self.document = Document::from_lines(Some(filename), lines);
		self.cursor = Cursor::default();
		self.viewport.row_offset = 0;
		self.viewport.col_offset = 0;
	}

	/// Sizes the text area from the full terminal size.
	pub fn set_screen_size(&mut self, rows: u16, cols: u16) {
		self.viewport.screen_rows = usize::from(rows.saturating_sub(RESERVED_ROWS));
		self.viewport.term_cols = usize::from(cols);
		self.fit_gutter();
	}

	/// Sizes the gutter for the current row count and gives the rest of the
	/// terminal width to text.
	pub fn fit_gutter(&mut self) {
		let gutter = match self.line_numbers {
			LineNumbers::Off => 0,
			LineNumbers::Absolute | LineNumbers::Relative => {
				let digits = self.document.num_rows().max(1).ilog10() as usize + 1;
				usize::from(self.min_gutter).max(digits + 1)
			}
		};
		self.viewport.gutter = gutter;
		self.viewport.screen_cols = self.viewport.term_cols.saturating_sub(gutter);
	}

	pub fn set_status_message(&mut self, text: impl Into<String>) {
		let text = text.into();
		tracing::debug!("status message: {}", text);
		self.status = Some(StatusMessage { text, set_at: Instant::now() });
	}

	/// The status message while it is still fresh.
	pub fn visible_status_message(&self, now: Instant) -> Option<&str> {
		self
			.status
			.as_ref()
			.filter(|status| now.saturating_duration_since(status.set_at) < self.message_timeout)
			.map(|status| status.text.as_str())
	}

	pub fn current_row(&self) -> Option<&Row> { self.document.row(self.cursor.y) }

	pub fn is_insert_mode(&self) -> bool { self.mode == Mode::Insert }

	pub fn enter_insert_mode(&mut self) { self.mode = Mode::Insert; }

	pub fn exit_insert_mode(&mut self) { self.mode = Mode::Normal; }
}
