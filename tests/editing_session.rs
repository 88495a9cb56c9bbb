use std::fs;
use std::path::Path;

use rowedit::action_handler::ActionHandler;
use rowedit::config::Config;
use rowedit::input::{InputError, KeyDecoder};
use rowedit::state::{EditorState, Mode};
use rowedit::storage::FsStorage;

fn editor(path: &Path) -> EditorState {
	let mut state = EditorState::new(&Config::default());
	state.set_screen_size(24, 80);
	state.open_file(&FsStorage, path.to_path_buf());
	state
}

/// Feeds raw terminal bytes through the decoder and dispatcher. Returns true
/// when the editor asked to exit before the input ran out.
fn type_bytes(state: &mut EditorState, bytes: &[u8]) -> bool {
	let mut decoder = KeyDecoder::new(bytes);
	let mut handler = ActionHandler::new(2);
	loop {
		match decoder.read_key() {
			Ok(key) => {
				if handler.handle_key(state, &FsStorage, key).is_break() {
					return true;
				}
			}
			Err(InputError::Closed) => return false,
			Err(err) => panic!("unexpected input error: {err}"),
		}
	}
}

#[test]
fn edit_save_and_quit_existing_file() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("notes.txt");
	fs::write(&path, "hello\nworld\n").expect("write fixture");

	let mut state = editor(&path);
	assert!(type_bytes(&mut state, b"jifoo\x1b\x13\x11"));
	assert_eq!(fs::read_to_string(&path).expect("read back"), "hello\nfooworld\n");
}

#[test]
fn arrow_keys_and_search_move_the_cursor() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("list.txt");
	fs::write(&path, "alpha\nbeta\nworld\n").expect("write fixture");

	let mut state = editor(&path);
	assert!(!type_bytes(&mut state, b"\x1b[B\x1b[C"));
	assert_eq!((state.cursor.x, state.cursor.y), (1, 1));

	assert!(!type_bytes(&mut state, b"/wor\r"));
	assert_eq!((state.cursor.x, state.cursor.y), (0, 2));

	assert!(type_bytes(&mut state, b"iX\x1b\x13\x11"));
	assert_eq!(fs::read_to_string(&path).expect("read back"), "alpha\nbeta\nXworld\n");
}

#[test]
fn unsaved_changes_need_three_quits() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("draft.txt");
	fs::write(&path, "draft\n").expect("write fixture");

	let mut state = editor(&path);
	assert!(!type_bytes(&mut state, b"ix\x1b\x11\x11"));
	assert!(state.document.is_dirty());

	let mut state = editor(&path);
	assert!(type_bytes(&mut state, b"ix\x1b\x11\x11\x11"));
	assert_eq!(fs::read_to_string(&path).expect("read back"), "draft\n");
}

#[test]
fn missing_file_is_created_on_save() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("new.txt");

	let mut state = editor(&path);
	assert_eq!(state.status.as_ref().map(|status| status.text.as_str()), Some("new file"));
	assert!(type_bytes(&mut state, b"ihi\rthere\x1b\x13\x11"));
	assert_eq!(fs::read_to_string(&path).expect("read back"), "hi\nthere\n");
}

#[test]
fn jk_chord_and_utf8_input() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("chord.txt");
	fs::write(&path, "\n").expect("write fixture");

	let mut state = editor(&path);
	assert!(!type_bytes(&mut state, "iéjk".as_bytes()));
	assert_eq!(state.mode, Mode::Normal);
	assert_eq!(state.document.row(0).map(|row| row.chars()), Some("é"));
}
