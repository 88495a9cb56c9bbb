use std::ops::ControlFlow;

use tracing::{debug, info};

use crate::action::EditorAction;
use crate::input::Key;
use crate::state::{Direction, EditorState, Mode, PromptKind, PromptOutcome};
use crate::storage::Storage;

/// Routes keys to editor operations according to the current mode.
///
/// Holds the only cross-key memory the editor has: the previous key (for the
/// insert-mode `jk` exit chord) and the quit confirmation counter.
pub struct ActionHandler {
	previous_key: Option<Key>,
	quit_times:   u8,
	quit_limit:   u8,
}

impl ActionHandler {
	pub fn new(quit_times: u8) -> Self { Self { previous_key: None, quit_times, quit_limit: quit_times } }

	pub fn quit_times(&self) -> u8 { self.quit_times }

	/// Applies one key. `Break` means the editor should exit.
	pub fn handle_key(&mut self, state: &mut EditorState, storage: &dyn Storage, key: Key) -> ControlFlow<()> {
		debug!("key {:?} in {:?}", key, state.mode);
		if key == Key::Unknown {
			return ControlFlow::Continue(());
		}

		if state.is_prompting() {
			self.handle_prompt_key(state, storage, key);
		} else if let Some(action) = self.resolve(state.mode, key) {
			if action == EditorAction::Quit {
				return self.quit(state);
			}
			self.apply(state, storage, action);
		}

		self.previous_key = Some(key);
		self.quit_times = self.quit_limit;
		ControlFlow::Continue(())
	}

	pub fn resolve(&self, mode: Mode, key: Key) -> Option<EditorAction> {
		let action = match (mode, key) {
			(_, Key::ArrowLeft) => EditorAction::Move(Direction::Left),
			(_, Key::ArrowRight) => EditorAction::Move(Direction::Right),
			(_, Key::ArrowUp) => EditorAction::Move(Direction::Up),
			(_, Key::ArrowDown) => EditorAction::Move(Direction::Down),
			(_, Key::PageUp) => EditorAction::PageUp,
			(_, Key::PageDown) => EditorAction::PageDown,
			(_, Key::Home) => EditorAction::MoveLineStart,
			(_, Key::End) => EditorAction::MoveLineEnd,
			(_, Key::Ctrl('f')) => EditorAction::Find,
			(_, Key::Ctrl('s')) => EditorAction::Save,
			(_, Key::Ctrl('q')) => EditorAction::Quit,

			(Mode::Normal, Key::Char('i')) => EditorAction::EnterInsert,
			(Mode::Normal, Key::Char('a')) => EditorAction::AppendInsert,
			(Mode::Normal, Key::Char('o')) => EditorAction::OpenLineBelowInsert,
			(Mode::Normal, Key::Char('h')) => EditorAction::Move(Direction::Left),
			(Mode::Normal, Key::Char('j')) => EditorAction::Move(Direction::Down),
			(Mode::Normal, Key::Char('k')) => EditorAction::Move(Direction::Up),
			(Mode::Normal, Key::Char('l')) => EditorAction::Move(Direction::Right),
			(Mode::Normal, Key::Char('/')) => EditorAction::Find,
			(Mode::Normal, _) => return None,

			(Mode::Insert, Key::Escape | Key::Ctrl('l')) => EditorAction::ExitInsert,
			(Mode::Insert, Key::Enter) => EditorAction::InsertNewline,
			(Mode::Insert, Key::Backspace | Key::Ctrl('h')) => EditorAction::DeleteChar,
			(Mode::Insert, Key::Delete) => EditorAction::DeleteForward,
			(Mode::Insert, Key::Char('k')) if self.previous_key == Some(Key::Char('j')) => {
				EditorAction::ExitInsertChord
			}
			(Mode::Insert, Key::Char(ch)) => EditorAction::InsertChar(ch),
			(Mode::Insert, _) => return None,
		};
		Some(action)
	}

	fn apply(&mut self, state: &mut EditorState, storage: &dyn Storage, action: EditorAction) {
		debug!("apply {:?}", action);
		match action {
			EditorAction::EnterInsert => state.enter_insert_mode(),
			EditorAction::AppendInsert => state.append_insert(),
			EditorAction::OpenLineBelowInsert => state.open_line_below(),
			EditorAction::ExitInsert => state.exit_insert_mode(),
			EditorAction::ExitInsertChord => {
				state.delete_char();
				state.exit_insert_mode();
			}
			EditorAction::Move(direction) => state.move_cursor(direction),
			EditorAction::PageUp => state.page_up(),
			EditorAction::PageDown => state.page_down(),
			EditorAction::MoveLineStart => state.move_cursor_line_start(),
			EditorAction::MoveLineEnd => state.move_cursor_line_end(),
			EditorAction::InsertChar(ch) => state.insert_char(ch),
			EditorAction::InsertNewline => state.insert_newline(),
			EditorAction::DeleteChar => state.delete_char(),
			EditorAction::DeleteForward => state.delete_forward(),
			EditorAction::Find => state.find(),
			EditorAction::Save => state.save(storage),
			EditorAction::Quit => {}
		}
	}

	fn handle_prompt_key(&mut self, state: &mut EditorState, storage: &dyn Storage, key: Key) {
		match state.prompt_key(&key) {
			PromptOutcome::Submitted { kind: PromptKind::SaveAs, input } => state.save_as(storage, input),
			PromptOutcome::Cancelled { kind: PromptKind::SaveAs } => state.set_status_message("save aborted"),
			PromptOutcome::Submitted { kind: PromptKind::Search(_), .. }
			| PromptOutcome::Cancelled { kind: PromptKind::Search(_) }
			| PromptOutcome::Pending => {}
		}
	}

	fn quit(&mut self, state: &mut EditorState) -> ControlFlow<()> {
		if state.document.is_dirty() && self.quit_times > 0 {
			state.set_status_message(format!(
				"unsaved changes! press Ctrl-Q {} more times to quit",
				self.quit_times
			));
			self.quit_times -= 1;
			self.previous_key = Some(Key::Ctrl('q'));
			return ControlFlow::Continue(());
		}
		info!("quit requested, dirty={}", state.document.is_dirty());
		ControlFlow::Break(())
	}
}
