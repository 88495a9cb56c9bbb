use super::{EditorState, SearchSnapshot};
use crate::input::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
	Search(SearchSnapshot),
	SaveAs,
}

/// One-line input shown in the message bar. `template` holds a single `{}`
/// that is replaced with the typed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
	pub kind:     PromptKind,
	pub template: &'static str,
	pub input:    String,
}

impl Prompt {
	pub fn message(&self) -> String { self.template.replacen("{}", &self.input, 1) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
	Pending,
	Submitted { kind: PromptKind, input: String },
	Cancelled { kind: PromptKind },
}

impl EditorState {
	pub fn open_prompt(&mut self, kind: PromptKind, template: &'static str) {
		let prompt = Prompt { kind, template, input: String::new() };
		self.set_status_message(prompt.message());
		self.prompt = Some(prompt);
	}

	pub fn is_prompting(&self) -> bool { self.prompt.is_some() }

	/// Feeds one key into the open prompt. Search prompts run the incremental
	/// search on every key; a cancelled search restores the view it started
	/// from.
	pub fn prompt_key(&mut self, key: &Key) -> PromptOutcome {
		let Some(prompt) = self.prompt.as_mut() else {
			return PromptOutcome::Pending;
		};

		let mut outcome = PromptOutcome::Pending;
		match key {
			Key::Backspace | Key::Delete | Key::Ctrl('h') => {
				prompt.input.pop();
			}
			Key::Escape => outcome = PromptOutcome::Cancelled { kind: prompt.kind },
			Key::Enter if !prompt.input.is_empty() => {
				outcome = PromptOutcome::Submitted { kind: prompt.kind, input: prompt.input.clone() };
			}
			Key::Char(ch) if !ch.is_control() => prompt.input.push(*ch),
			_ => {}
		}

		let kind = prompt.kind;
		let query = prompt.input.clone();
		let message = prompt.message();
		let finished = outcome != PromptOutcome::Pending;
		let missed = matches!(kind, PromptKind::Search(_)) && self.find.last_match.is_none();

		if finished {
			self.prompt = None;
			self.status = None;
		}
		if let PromptKind::Search(snapshot) = kind {
			self.on_search_key(&query, key);
			match &outcome {
				PromptOutcome::Cancelled { .. } => self.restore_search_snapshot(snapshot),
				PromptOutcome::Submitted { input, .. } if missed => {
					self.set_status_message(format!("no match for \"{}\"", input));
				}
				_ => {}
			}
		}
		if !finished {
			self.set_status_message(message);
		}
		outcome
	}
}
