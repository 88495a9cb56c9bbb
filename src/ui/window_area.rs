use std::fmt::Write as _;

use crate::config::LineNumbers;
use crate::state::EditorState;

const DIM: &str = "\x1b[90m";
const RESET: &str = "\x1b[m";
const CLEAR_LINE: &str = "\x1b[K";

/// Text rows, each followed by a line clear and `\r\n`.
pub(super) fn draw_rows(frame: &mut String, state: &EditorState) {
	let viewport = &state.viewport;
	let num_rows = state.document.num_rows();

	for screen_y in 0..viewport.screen_rows {
		let file_row = screen_y + viewport.row_offset;
		match state.document.row(file_row) {
			Some(row) => {
				draw_line_number(frame, state, file_row);
				frame.extend(row.render().chars().skip(viewport.col_offset).take(viewport.screen_cols));
			}
			None if num_rows == 0 && screen_y == viewport.screen_rows / 3 => {
				frame.push_str(&welcome_line(viewport.term_cols));
			}
			None => frame.push('~'),
		}
		frame.push_str(CLEAR_LINE);
		frame.push_str("\r\n");
	}
}

fn draw_line_number(frame: &mut String, state: &EditorState, file_row: usize) {
	let width = state.viewport.gutter.saturating_sub(1);
	match state.line_numbers {
		LineNumbers::Off => {}
		LineNumbers::Absolute => {
			let _ = write!(frame, "{DIM}{:>width$} {RESET}", file_row + 1);
		}
		LineNumbers::Relative if file_row == state.cursor.y => {
			let _ = write!(frame, "{:>width$} ", file_row + 1);
		}
		LineNumbers::Relative => {
			let _ = write!(frame, "{DIM}{:>width$} {RESET}", file_row.abs_diff(state.cursor.y));
		}
	}
}

pub(super) fn welcome_line(cols: usize) -> String {
	let mut message = format!("rowedit -- version {}", env!("CARGO_PKG_VERSION"));
	if message.len() > cols {
		message.truncate(cols.saturating_sub(1));
	}
	let padding = (cols - message.len()) / 2;
	if padding > 0 { format!("~{}{}", " ".repeat(padding - 1), message) } else { format!("~{}", message) }
}
