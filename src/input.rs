use std::collections::VecDeque;
use std::io::{self, ErrorKind, Read};

use thiserror::Error;

const READ_CHUNK: usize = 32;
const ESC: u8 = 0x1b;

/// Decoded key event, independent of the editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
	Char(char),
	Ctrl(char),
	Enter,
	Backspace,
	Escape,
	ArrowLeft,
	ArrowRight,
	ArrowUp,
	ArrowDown,
	Delete,
	Home,
	End,
	PageUp,
	PageDown,
	Unknown,
}

#[derive(Debug, Error)]
pub enum InputError {
	#[error("read from input failed")]
	Read {
		#[source]
		source: io::Error,
	},
	#[error("input stream closed")]
	Closed,
}

/// Turns a raw byte stream into [`Key`]s.
///
/// Each refill is a single `read` call. Escape sequences are decoded only
/// from bytes already received: an incomplete sequence becomes a bare
/// `Escape` instead of blocking for the rest, and bytes that arrive together
/// (pastes, fast typing) are all kept for the following calls.
pub struct KeyDecoder<R> {
	reader:  R,
	pending: VecDeque<u8>,
}

impl<R: Read> KeyDecoder<R> {
	pub fn new(reader: R) -> Self { Self { reader, pending: VecDeque::new() } }

	/// Blocks until at least one key is available.
	pub fn read_key(&mut self) -> Result<Key, InputError> {
		if self.pending.is_empty() {
			self.fill()?;
		}
		self.decode()
	}

	fn fill(&mut self) -> Result<(), InputError> {
		let mut buf = [0u8; READ_CHUNK];
		loop {
			match self.reader.read(&mut buf) {
				Ok(0) => return Err(InputError::Closed),
				Ok(n) => {
					self.pending.extend(&buf[..n]);
					return Ok(());
				}
				Err(err) if err.kind() == ErrorKind::Interrupted => continue,
				Err(source) => return Err(InputError::Read { source }),
			}
		}
	}

	fn decode(&mut self) -> Result<Key, InputError> {
		let Some(first) = self.pending.pop_front() else {
			return Ok(Key::Unknown);
		};
		match first {
			ESC => Ok(self.decode_escape()),
			0..=0x7f => Ok(key_from_ascii(first)),
			_ => self.decode_utf8(first),
		}
	}

	fn decode_escape(&mut self) -> Key {
		match self.pending.front() {
			Some(b'[') => {
				self.pending.pop_front();
				self.decode_csi()
			}
			Some(b'O') => {
				self.pending.pop_front();
				match self.pending.pop_front() {
					Some(b'H') => Key::Home,
					Some(b'F') => Key::End,
					_ => Key::Escape,
				}
			}
			_ => Key::Escape,
		}
	}

	/// `ESC [` has been consumed. Takes parameter bytes up to the final byte;
	/// whatever the sequence was, it is consumed whole.
	fn decode_csi(&mut self) -> Key {
		let mut params = Vec::new();
		while let Some(&byte) = self.pending.front() {
			match byte {
				0x20..=0x3f => {
					params.push(byte);
					self.pending.pop_front();
				}
				0x40..=0x7e => {
					self.pending.pop_front();
					return csi_key(&params, byte);
				}
				_ => break,
			}
		}
		Key::Escape
	}

	/// Continuation bytes always follow their lead byte, so this waits for
	/// them when a read ended in the middle of a character.
	fn decode_utf8(&mut self, lead: u8) -> Result<Key, InputError> {
		let width = match lead {
			0xc0..=0xdf => 2,
			0xe0..=0xef => 3,
			0xf0..=0xf7 => 4,
			_ => return Ok(Key::Unknown),
		};
		let mut bytes = vec![lead];
		while bytes.len() < width {
			if self.pending.is_empty() {
				self.fill()?;
			}
			match self.pending.front() {
				Some(&byte) if byte & 0xc0 == 0x80 => {
					bytes.push(byte);
					self.pending.pop_front();
				}
				_ => return Ok(Key::Unknown),
			}
		}
		Ok(std::str::from_utf8(&bytes).ok().and_then(|s| s.chars().next()).map(Key::Char).unwrap_or(Key::Unknown))
	}
}

fn csi_key(params: &[u8], last: u8) -> Key {
	match (params, last) {
		([], b'A') => Key::ArrowUp,
		([], b'B') => Key::ArrowDown,
		([], b'C') => Key::ArrowRight,
		([], b'D') => Key::ArrowLeft,
		([], b'H') => Key::Home,
		([], b'F') => Key::End,
		([b'1' | b'7'], b'~') => Key::Home,
		([b'3'], b'~') => Key::Delete,
		([b'4' | b'8'], b'~') => Key::End,
		([b'5'], b'~') => Key::PageUp,
		([b'6'], b'~') => Key::PageDown,
		_ => Key::Escape,
	}
}

pub fn key_from_ascii(byte: u8) -> Key {
	match byte {
		b'\r' => Key::Enter,
		b'\t' => Key::Char('\t'),
		0x7f => Key::Backspace,
		ESC => Key::Escape,
		0x01..=0x1a => Key::Ctrl(char::from(b'a' + byte - 1)),
		0x00 | 0x1c..=0x1f => Key::Unknown,
		_ => Key::Char(char::from(byte)),
	}
}
