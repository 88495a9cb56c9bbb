pub const TAB_STOP: usize = 8;

/// One logical line of the document.
///
/// `render` is derived from `chars` on every mutation and is never edited
/// directly. Both lengths are counted in characters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
	chars:      String,
	render:     String,
	len:        usize,
	render_len: usize,
}

impl Row {
	pub fn new(content: impl Into<String>) -> Self {
		let mut row = Self { chars: content.into(), render: String::new(), len: 0, render_len: 0 };
		row.update();
		row
	}

	pub fn chars(&self) -> &str { &self.chars }

	pub fn render(&self) -> &str { &self.render }

	pub fn len(&self) -> usize { self.len }

	pub fn is_empty(&self) -> bool { self.len == 0 }

	pub fn render_len(&self) -> usize { self.render_len }

	/// Display column of logical column `cx`.
	pub fn cx_to_rx(&self, cx: usize) -> usize {
		self.chars.chars().take(cx).fold(0, |rx, ch| advance(rx, ch))
	}

	/// First logical column whose display extent passes `rx`, or `len()` when
	/// `rx` lies beyond the rendered row.
	pub fn rx_to_cx(&self, rx: usize) -> usize {
		let mut cur_rx = 0;
		for (cx, ch) in self.chars.chars().enumerate() {
			cur_rx = advance(cur_rx, ch);
			if cur_rx > rx {
				return cx;
			}
		}
		self.len
	}

	pub(super) fn insert_char(&mut self, at: usize, ch: char) {
		let at = at.min(self.len);
		let offset = self.byte_offset(at);
		self.chars.insert(offset, ch);
		self.update();
	}

	pub(super) fn delete_char(&mut self, at: usize) -> bool {
		if at >= self.len {
			return false;
		}
		let offset = self.byte_offset(at);
		self.chars.remove(offset);
		self.update();
		true
	}

	pub(super) fn append(&mut self, content: &str) {
		self.chars.push_str(content);
		self.update();
	}

	/// Cuts the row at `at` and returns the tail.
	pub(super) fn split_off(&mut self, at: usize) -> String {
		let offset = self.byte_offset(at.min(self.len));
		let tail = self.chars.split_off(offset);
		self.update();
		tail
	}

	fn byte_offset(&self, cx: usize) -> usize {
		self.chars.char_indices().nth(cx).map(|(offset, _)| offset).unwrap_or(self.chars.len())
	}

	fn update(&mut self) {
		self.len = self.chars.chars().count();
		self.render = expand_tabs(&self.chars);
		self.render_len = self.render.chars().count();
	}
}

fn advance(rx: usize, ch: char) -> usize {
	if ch == '\t' { rx + (TAB_STOP - 1) - (rx % TAB_STOP) + 1 } else { rx + 1 }
}

pub(crate) fn expand_tabs(chars: &str) -> String {
	let mut render = String::with_capacity(chars.len());
	let mut col = 0;
	for ch in chars.chars() {
		if ch == '\t' {
			render.push(' ');
			col += 1;
			while col % TAB_STOP != 0 {
				render.push(' ');
				col += 1;
			}
		} else {
			render.push(ch);
			col += 1;
		}
	}
	render
}
