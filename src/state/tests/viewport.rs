use std::path::PathBuf;

use super::common::test_state;
use crate::config::{Config, LineNumbers};
use crate::state::{Direction, EditorState};

fn assert_cursor_visible(state: &EditorState) {
	let viewport = &state.viewport;
	assert!(
		viewport.row_offset <= state.cursor.y && state.cursor.y < viewport.row_offset + viewport.screen_rows,
		"row {} outside {}..{}",
		state.cursor.y,
		viewport.row_offset,
		viewport.row_offset + viewport.screen_rows
	);
	assert!(
		viewport.col_offset <= viewport.render_x && viewport.render_x < viewport.col_offset + viewport.screen_cols,
		"column {} outside {}..{}",
		viewport.render_x,
		viewport.col_offset,
		viewport.col_offset + viewport.screen_cols
	);
}

#[test]
fn scrolling_down_keeps_cursor_on_last_screen_row() {
	let lines: Vec<String> = (0..12).map(|i| format!("{}", i)).collect();
	let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
	let mut state = test_state(&refs);

	for _ in 0..7 {
		state.move_cursor(Direction::Down);
		state.scroll();
		assert_cursor_visible(&state);
	}
	assert_eq!(state.cursor.y, 7);
	assert_eq!(state.viewport.row_offset, 3);

	for _ in 0..7 {
		state.move_cursor(Direction::Up);
		state.scroll();
		assert_cursor_visible(&state);
	}
	assert_eq!(state.viewport.row_offset, 0);
}

#[test]
fn render_x_accounts_for_tabs() {
	let mut state = test_state(&["\tx"]);
	state.cursor.x = 1;
	state.scroll();
	assert_eq!(state.viewport.render_x, 8);
	assert_eq!(state.viewport.col_offset, 0);
}

#[test]
fn long_rows_scroll_horizontally() {
	let mut state = test_state(&["abcdefghijklmnopqrstuvwxyz0123456789", "short"]);
	state.move_cursor_line_end();
	state.scroll();
	assert_eq!(state.viewport.render_x, 36);
	assert_eq!(state.viewport.col_offset, 17);
	assert_cursor_visible(&state);

	state.move_cursor(Direction::Down);
	state.scroll();
	assert_eq!(state.viewport.render_x, 5);
	assert_eq!(state.viewport.col_offset, 5);
	assert_cursor_visible(&state);
}

#[test]
fn cursor_stays_visible_across_mixed_moves() {
	let mut state = test_state(&[
		"\t\tdeep indent with text",
		"x",
		"a\tb\tc\td\te\tf",
		"",
		"plain line that is longer than the screen",
		"\t",
		"last",
	]);
	let moves = [
		Direction::Right,
		Direction::Right,
		Direction::Right,
		Direction::Down,
		Direction::Down,
		Direction::Right,
		Direction::Right,
		Direction::Right,
		Direction::Right,
		Direction::Down,
		Direction::Down,
		Direction::Down,
		Direction::Left,
		Direction::Up,
		Direction::Down,
		Direction::Down,
		Direction::Down,
		Direction::Down,
		Direction::Up,
	];
	for direction in moves {
		state.move_cursor(direction);
		state.scroll();
		assert_cursor_visible(&state);
	}
	state.move_cursor_line_end();
	state.scroll();
	assert_cursor_visible(&state);
}

#[test]
fn cursor_on_virtual_last_row_is_visible() {
	let lines: Vec<String> = (0..5).map(|i| format!("{}", i)).collect();
	let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
	let mut state = test_state(&refs);
	state.page_down();
	state.page_down();
	state.scroll();
	assert_eq!(state.cursor.y, 5);
	assert_eq!(state.viewport.row_offset, 1);
	assert_eq!(state.viewport.render_x, 0);
}

#[test]
fn gutter_grows_with_the_row_count() {
	let config = Config { line_numbers: LineNumbers::Absolute, gutter_width: 2, ..Config::default() };
	let mut state = EditorState::new(&config);
	state.load_document(PathBuf::from("count.txt"), (1..=9).map(|i| i.to_string()).collect());
	state.set_screen_size(7, 26);
	assert_eq!(state.viewport.gutter, 2);
	assert_eq!(state.viewport.screen_cols, 24);

	state.cursor.y = 9;
	state.insert_char('0');
	state.scroll();
	assert_eq!(state.viewport.gutter, 3);
	assert_eq!(state.viewport.screen_cols, 23);
}

#[test]
fn default_gutter_is_kept_while_numbers_fit() {
	let state = test_state(&["a"]);
	assert_eq!(state.viewport.gutter, 6);
	assert_eq!(state.viewport.screen_cols, 20);
}
