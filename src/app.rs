use std::io;
use std::path::PathBuf;
use std::time::Instant;

use thiserror::Error;
use tracing::{info, trace};

use crate::action_handler::ActionHandler;
use crate::config::Config;
use crate::input::{InputError, KeyDecoder};
use crate::state::EditorState;
use crate::storage::FsStorage;
use crate::ui::{Renderer, TerminalSession, TerminalSessionError};

const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

#[derive(Debug, Error)]
pub enum AppError {
	#[error(transparent)]
	Terminal(#[from] TerminalSessionError),
	#[error("read key failed")]
	Input {
		#[source]
		source: InputError,
	},
}

pub struct App {
	state:          EditorState,
	renderer:       Renderer,
	action_handler: ActionHandler,
	storage:        FsStorage,
}

impl App {
	pub fn new(config: &Config) -> Self {
		Self {
			state:          EditorState::new(config),
			renderer:       Renderer::new(),
			action_handler: ActionHandler::new(config.quit_times),
			storage:        FsStorage,
		}
	}

	/// Runs the read-apply-render loop until the user quits. The terminal is
	/// restored when this returns, whether it succeeded or not.
	pub fn run(mut self, path: Option<PathBuf>) -> Result<(), AppError> {
		let mut session = TerminalSession::enter("rowedit")?;
		if let Some(path) = path {
			self.state.open_file(&self.storage, path);
		}
		if self.state.status.is_none() {
			self.state.set_status_message(HELP_MESSAGE);
		}

		let mut input = KeyDecoder::new(io::stdin());
		loop {
			let (rows, cols) = session.size()?;
			self.state.set_screen_size(rows, cols);
			let frame = self.renderer.render(&mut self.state, Instant::now());
			session.write_frame(frame)?;
			trace!("redraw");

			let key = input.read_key().map_err(|source| AppError::Input { source })?;
			if self.action_handler.handle_key(&mut self.state, &self.storage, key).is_break() {
				break;
			}
		}

		info!("editor loop finished");
		Ok(())
	}
}
