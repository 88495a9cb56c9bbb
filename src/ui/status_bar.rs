use std::time::Instant;

use crate::state::EditorState;

const INVERT: &str = "\x1b[7m";
const RESET: &str = "\x1b[m";

/// Inverted bar: mode, file name and dirty marker on the left, `line/total`
/// on the right when it fits.
pub(super) fn draw_status_bar(frame: &mut String, state: &EditorState) {
	let cols = state.viewport.term_cols;
	let name: String = state.document.display_name().chars().filter(|ch| !ch.is_control()).take(20).collect();
	let dirty = if state.document.is_dirty() { "[+]" } else { "" };
	let left: String = format!(" {}   {}{}", state.mode.as_str(), name, dirty).chars().take(cols).collect();
	let right = format!("{}/{} ", state.cursor.y + 1, state.document.num_rows());

	frame.push_str(INVERT);
	frame.push_str(&left);
	let mut len = left.chars().count();
	while len < cols {
		if cols - len == right.len() {
			frame.push_str(&right);
			break;
		}
		frame.push(' ');
		len += 1;
	}
	frame.push_str(RESET);
	frame.push_str("\r\n");
}

pub(super) fn draw_message_bar(frame: &mut String, state: &EditorState, now: Instant) {
	frame.push_str("\x1b[K");
	if let Some(message) = state.visible_status_message(now) {
		frame.extend(message.chars().filter(|ch| !ch.is_control()).take(state.viewport.term_cols));
	}
}
