mod status_bar;
mod terminal_session;
mod window_area;


use std::fmt::Write as _;
use std::time::Instant;

use crossterm::Command;
use crossterm::cursor::SetCursorStyle;

use crate::state::{EditorState, Mode};
use status_bar::{draw_message_bar, draw_status_bar};
pub use terminal_session::{TerminalSession, TerminalSessionError};
use window_area::draw_rows;

const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";
const CURSOR_HOME: &str = "\x1b[H";

/// Builds one complete frame per refresh so the terminal receives a single
/// write.
#[derive(Debug, Default)]
pub struct Renderer {
	frame: String,
}

impl Renderer {
	pub fn new() -> Self { Self::default() }

	/// Scrolls the viewport to the cursor, then composes the frame, cursor
	/// shape included.
	pub fn render(&mut self, state: &mut EditorState, now: Instant) -> &[u8] {
		state.scroll();

		let frame = &mut self.frame;
		frame.clear();
		frame.push_str(HIDE_CURSOR);
		frame.push_str(CURSOR_HOME);
		draw_rows(frame, state);
		draw_status_bar(frame, state);
		draw_message_bar(frame, state, now);

		let cursor_style = match state.mode {
			Mode::Insert => SetCursorStyle::SteadyBar,
			Mode::Normal => SetCursorStyle::SteadyBlock,
		};
		let _ = cursor_style.write_ansi(frame);

		let viewport = &state.viewport;
		let _ = write!(
			frame,
			"\x1b[{};{}H",
			state.cursor.y.saturating_sub(viewport.row_offset) + 1,
			viewport.render_x.saturating_sub(viewport.col_offset) + 1 + viewport.gutter
		);
		frame.push_str(SHOW_CURSOR);
		frame.as_bytes()
	}
}
