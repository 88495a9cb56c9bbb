use std::path::{Path, PathBuf};

use super::row::Row;

/// Ordered rows plus the dirty flag and the file they belong to.
///
/// Row indices outside the valid range are silently ignored by every
/// operation here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
	rows:     Vec<Row>,
	dirty:    bool,
	filename: Option<PathBuf>,
}

impl Document {
	pub fn new() -> Self { Self::default() }

	/// Builds a clean document from loaded lines.
	pub fn from_lines<I, S>(filename: Option<PathBuf>, lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { rows: lines.into_iter().map(Row::new).collect(), dirty: false, filename }
	}

	pub fn num_rows(&self) -> usize { self.rows.len() }

	pub fn row(&self, at: usize) -> Option<&Row> { self.rows.get(at) }

	pub fn rows(&self) -> &[Row] { &self.rows }

	pub fn is_dirty(&self) -> bool { self.dirty }

	pub fn filename(&self) -> Option<&Path> { self.filename.as_deref() }

	pub fn set_filename(&mut self, filename: PathBuf) { self.filename = Some(filename); }

	pub(crate) fn mark_clean(&mut self) { self.dirty = false; }

	pub fn insert_row(&mut self, at: usize, content: impl Into<String>) {
		if at > self.rows.len() {
			return;
		}
		self.rows.insert(at, Row::new(content));
		self.dirty = true;
	}

	pub fn delete_row(&mut self, at: usize) {
		if at >= self.rows.len() {
			return;
		}
		self.rows.remove(at);
		self.dirty = true;
	}

	pub fn row_insert_char(&mut self, y: usize, at: usize, ch: char) {
		if let Some(row) = self.rows.get_mut(y) {
			row.insert_char(at, ch);
			self.dirty = true;
		}
	}

	pub fn row_delete_char(&mut self, y: usize, at: usize) {
		if let Some(row) = self.rows.get_mut(y)
			&& row.delete_char(at)
		{
			self.dirty = true;
		}
	}

	pub fn row_append(&mut self, y: usize, content: &str) {
		if let Some(row) = self.rows.get_mut(y) {
			row.append(content);
			self.dirty = true;
		}
	}

	/// Truncates row `y` at logical column `at` and returns the removed tail.
	pub fn truncate_row(&mut self, y: usize, at: usize) -> Option<String> {
		let row = self.rows.get_mut(y)?;
		let tail = row.split_off(at);
		self.dirty = true;
		Some(tail)
	}

	/// Every row followed by a newline, and the byte length of that text.
	pub fn rows_to_text(&self) -> (String, usize) {
		let mut text = String::new();
		for row in &self.rows {
			text.push_str(row.chars());
			text.push('\n');
		}
		let len = text.len();
		(text, len)
	}
}
