use super::{Cursor, EditorState, PromptKind};
use crate::input::Key;

const SEARCH_PROMPT: &str = "search: {} (ESC to cancel, arrows to step)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FindDirection {
	#[default]
	Forward,
	Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FindState {
	pub last_match: Option<usize>,
	pub direction:  FindDirection,
}

/// Cursor and offsets captured when a search starts, restored on cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSnapshot {
	pub cursor:     Cursor,
	pub row_offset: usize,
	pub col_offset: usize,
}

impl EditorState {
	pub fn find(&mut self) {
		let snapshot = SearchSnapshot {
			cursor:     self.cursor,
			row_offset: self.viewport.row_offset,
			col_offset: self.viewport.col_offset,
		};
		self.find = FindState::default();
		self.open_prompt(PromptKind::Search(snapshot), SEARCH_PROMPT);
	}

	/// Runs after every keystroke typed into the search prompt.
	pub fn on_search_key(&mut self, query: &str, key: &Key) {
		match key {
			Key::Enter | Key::Escape => {
				self.find = FindState::default();
				return;
			}
			Key::ArrowRight | Key::ArrowDown => self.find.direction = FindDirection::Forward,
			Key::ArrowLeft | Key::ArrowUp => self.find.direction = FindDirection::Backward,
			_ => self.find = FindState::default(),
		}

		let num_rows = self.document.num_rows();
		if query.is_empty() || num_rows == 0 {
			return;
		}

		let direction = self.find.direction;
		let mut y = match self.find.last_match {
			Some(last) => next_row(last, direction, num_rows),
			None => self.cursor.y.min(num_rows - 1),
		};

		for _ in 0..num_rows {
			if let Some(row) = self.document.row(y)
				&& let Some(byte_idx) = row.render().find(query)
			{
				let match_rx = row.render()[..byte_idx].chars().count();
				self.cursor.y = y;
				self.cursor.x = row.rx_to_cx(match_rx);
				self.find.last_match = Some(y);
				// Pushes the match to the top of the screen on the next scroll.
				self.viewport.row_offset = num_rows;
				return;
			}
			y = next_row(y, direction, num_rows);
		}
	}

	pub(super) fn restore_search_snapshot(&mut self, snapshot: SearchSnapshot) {
		self.cursor = snapshot.cursor;
		self.viewport.row_offset = snapshot.row_offset;
		self.viewport.col_offset = snapshot.col_offset;
	}
}

fn next_row(y: usize, direction: FindDirection, num_rows: usize) -> usize {
	match direction {
		FindDirection::Forward if y + 1 >= num_rows => 0,
		FindDirection::Forward => y + 1,
		FindDirection::Backward if y == 0 => num_rows - 1,
		FindDirection::Backward => y - 1,
	}
}
