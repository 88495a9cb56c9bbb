use super::EditorState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Left,
	Right,
	Up,
	Down,
}

impl EditorState {
	pub fn insert_char(&mut self, ch: char) {
		if self.cursor.y == self.document.num_rows() {
			self.document.insert_row(self.document.num_rows(), "");
		}
		self.document.row_insert_char(self.cursor.y, self.cursor.x, ch);
		self.cursor.x += 1;
	}

	pub fn insert_newline(&mut self) {
		if self.cursor.x == 0 {
			self.document.insert_row(self.cursor.y, "");
		} else if let Some(tail) = self.document.truncate_row(self.cursor.y, self.cursor.x) {
			self.document.insert_row(self.cursor.y + 1, tail);
		} else {
			// Past the last row: behaves like an empty row being split.
			self.document.insert_row(self.cursor.y, "");
		}
		self.cursor.y += 1;
		self.cursor.x = 0;
	}

	/// Deletes the character left of the cursor, joining with the previous
	/// row at column 0.
	pub fn delete_char(&mut self) {
		if self.cursor.y >= self.document.num_rows() {
			return;
		}
		if self.cursor.x == 0 && self.cursor.y == 0 {
			return;
		}

		if self.cursor.x > 0 {
			self.document.row_delete_char(self.cursor.y, self.cursor.x - 1);
			self.cursor.x -= 1;
			return;
		}

		let y = self.cursor.y;
		let content = self.document.row(y).map(|row| row.chars().to_owned()).unwrap_or_default();
		self.cursor.x = self.document.row(y - 1).map(|row| row.len()).unwrap_or(0);
		self.document.row_append(y - 1, &content);
		self.document.delete_row(y);
		self.cursor.y -= 1;
	}

	/// Deletes the character under the cursor.
	pub fn delete_forward(&mut self) {
		self.move_cursor(Direction::Right);
		self.delete_char();
	}

	pub fn move_cursor(&mut self, direction: Direction) {
		let num_rows = self.document.num_rows();
		match direction {
			Direction::Up => {
				self.cursor.y = self.cursor.y.saturating_sub(1);
			}
			Direction::Down => {
				if self.cursor.y < num_rows {
					self.cursor.y += 1;
				}
			}
			Direction::Left => {
				if self.cursor.x > 0 {
					self.cursor.x -= 1;
				} else if self.cursor.y > 0 {
					self.cursor.y -= 1;
					self.cursor.x = self.current_row().map(|row| row.len()).unwrap_or(0);
				}
			}
			Direction::Right => {
				if let Some(row_len) = self.current_row().map(|row| row.len()) {
					if self.cursor.x < row_len {
						self.cursor.x += 1;
					} else {
						self.cursor.y += 1;
						self.cursor.x = 0;
					}
				}
			}
		}
		self.clamp_cursor_col();
	}

	pub fn page_up(&mut self) {
		for _ in 0..self.viewport.screen_rows {
			self.move_cursor(Direction::Up);
		}
	}

	pub fn page_down(&mut self) {
		for _ in 0..self.viewport.screen_rows {
			self.move_cursor(Direction::Down);
		}
	}

	pub fn move_cursor_line_start(&mut self) { self.cursor.x = 0; }

	pub fn move_cursor_line_end(&mut self) {
		self.cursor.x = self.current_row().map(|row| row.len()).unwrap_or(0);
	}

	/// Normal mode `a`: step right unless already at the end of the row.
	pub fn append_insert(&mut self) {
		if let Some(row_len) = self.current_row().map(|row| row.len())
			&& self.cursor.x < row_len
		{
			self.cursor.x += 1;
		}
		self.enter_insert_mode();
	}

	/// Normal mode `o`: open an empty row below the cursor and start inserting
	/// there.
	pub fn open_line_below(&mut self) {
		let at = (self.cursor.y + 1).min(self.document.num_rows());
		self.document.insert_row(at, "");
		self.cursor.y = at;
		self.cursor.x = 0;
		self.enter_insert_mode();
	}

	fn clamp_cursor_col(&mut self) {
		let row_len = self.current_row().map(|row| row.len()).unwrap_or(0);
		if self.cursor.x > row_len {
			self.cursor.x = row_len;
		}
	}
}
