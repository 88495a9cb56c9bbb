use super::EditorState;

/// Visible window over the document, in display columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
	pub row_offset:  usize,
	pub col_offset:  usize,
	pub render_x:    usize,
	pub screen_rows: usize,
	pub screen_cols: usize,
	pub term_cols:   usize,
	pub gutter:      usize,
}

impl EditorState {
	/// Refits the gutter, recomputes `render_x` and shifts the offsets until
	/// the cursor cell is visible.
	pub fn scroll(&mut self) {
		self.fit_gutter();
		let render_x = self.current_row().map(|row| row.cx_to_rx(self.cursor.x)).unwrap_or(0);
		let cursor_y = self.cursor.y;
		let viewport = &mut self.viewport;
		viewport.render_x = render_x;

		if cursor_y < viewport.row_offset {
			viewport.row_offset = cursor_y;
		}
		if cursor_y >= viewport.row_offset + viewport.screen_rows {
			viewport.row_offset = (cursor_y + 1).saturating_sub(viewport.screen_rows);
		}

		if render_x < viewport.col_offset {
			viewport.col_offset = render_x;
		}
		if render_x >= viewport.col_offset + viewport.screen_cols {
			viewport.col_offset = (render_x + 1).saturating_sub(viewport.screen_cols);
		}
	}
}
