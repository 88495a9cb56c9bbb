use crate::state::Direction;

/// What a key means once the current mode has been taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
	EnterInsert,
	AppendInsert,
	OpenLineBelowInsert,
	ExitInsert,
	ExitInsertChord,
	Move(Direction),
	PageUp,
	PageDown,
	MoveLineStart,
	MoveLineEnd,
	InsertChar(char),
	InsertNewline,
	DeleteChar,
	DeleteForward,
	Find,
	Save,
	Quit,
}
