use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;
use time::macros::format_description;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;

pub const LOG_FILE_NAME: &str = "rowedit.log";
/// Overrides the directory the log file is written to.
pub const LOG_DIR_ENV: &str = "ROWEDIT_LOG_DIR";

#[derive(Debug, Error)]
pub enum LoggingError {
	#[error("create log directory failed: {path}")]
	CreateLogDir {
		path:   PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("initialize tracing subscriber failed")]
	InitSubscriber {
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},
}

/// Sends `tracing` output to [`LOG_FILE_NAME`] so nothing is ever printed over
/// the editor screen. `RUST_LOG` selects the filter, `info` by default.
pub fn init_logging() -> Result<PathBuf, LoggingError> {
	let log_dir = log_dir(std::env::var_os(LOG_DIR_ENV));
	std::fs::create_dir_all(&log_dir)
		.map_err(|source| LoggingError::CreateLogDir { path: log_dir.clone(), source })?;

	let timer =
		UtcTime::new(format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"));
	tracing_subscriber::fmt()
		.with_timer(timer)
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_writer(tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME))
		.with_ansi(false)
		.with_target(false)
		.try_init()
		.map_err(|source| LoggingError::InitSubscriber { source })?;

	Ok(log_dir.join(LOG_FILE_NAME))
}

fn log_dir(override_dir: Option<OsString>) -> PathBuf {
	match override_dir.filter(|dir| !dir.is_empty()) {
		Some(dir) => PathBuf::from(dir),
		None => platform_log_dir(),
	}
}

#[cfg_attr(target_os = "windows", allow(dead_code))]
fn home() -> PathBuf { std::env::var_os("HOME").map(PathBuf::from).unwrap_or_else(std::env::temp_dir) }

fn platform_log_dir() -> PathBuf {
	#[cfg(target_os = "windows")]
	{
		std::env::var_os("LOCALAPPDATA").map(PathBuf::from).unwrap_or_else(std::env::temp_dir).join("rowedit")
	}

	#[cfg(target_os = "macos")]
	{
		home().join("Library").join("Logs").join("rowedit")
	}

	#[cfg(all(unix, not(target_os = "macos")))]
	{
		std::env::var_os("XDG_STATE_HOME")
			.map(PathBuf::from)
			.unwrap_or_else(|| home().join(".local").join("state"))
			.join("rowedit")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn override_dir_wins() {
		assert_eq!(log_dir(Some(OsString::from("/tmp/rowedit-logs"))), PathBuf::from("/tmp/rowedit-logs"));
	}

	#[test]
	fn empty_override_falls_back_to_platform_dir() {
		let dir = log_dir(Some(OsString::new()));
		assert_eq!(dir, platform_log_dir());
		assert!(dir.ends_with("rowedit"));
	}
}
