use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("read config file failed: {path}")]
	Read {
		path:   PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("parse config file failed: {path}")]
	Parse {
		path:   PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineNumbers {
	Off,
	Absolute,
	#[default]
	Relative,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
	pub line_numbers:         LineNumbers,
	pub gutter_width:         u16,
	pub quit_times:           u8,
	pub message_timeout_secs: u64,
}

impl Default for Config {
	fn default() -> Self {
		Self { line_numbers: LineNumbers::Relative, gutter_width: 6, quit_times: 2, message_timeout_secs: 5 }
	}
}

impl Config {
	/// Loads `explicit` when given, otherwise the per-user config file if one
	/// exists, otherwise the defaults.
	pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
		if let Some(path) = explicit {
			return Self::from_file(path);
		}
		let path = user_config_dir().join("config.toml");
		if path.is_file() {
			return Self::from_file(&path);
		}
		Ok(Self::default())
	}

	pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path)
			.map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
		Self::parse(&text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
	}

	pub fn parse(text: &str) -> Result<Self, toml::de::Error> { toml::from_str(text) }

	pub fn effective_gutter_width(&self) -> u16 {
		match self.line_numbers {
			LineNumbers::Off => 0,
			LineNumbers::Absolute | LineNumbers::Relative => self.gutter_width,
		}
	}
}

fn user_config_dir() -> PathBuf {
	#[cfg(target_os = "windows")]
	{
		std::env::var_os("APPDATA").map(PathBuf::from).unwrap_or_else(std::env::temp_dir).join("rowedit")
	}

	#[cfg(target_os = "macos")]
	{
		std::env::var_os("HOME")
			.map(PathBuf::from)
			.unwrap_or_else(std::env::temp_dir)
			.join("Library")
			.join("Application Support")
			.join("rowedit")
	}

	#[cfg(all(unix, not(target_os = "macos")))]
	{
		if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
			return config_home.join("rowedit");
		}
		std::env::var_os("HOME").map(PathBuf::from).unwrap_or_else(std::env::temp_dir).join(".config").join("rowedit")
	}
}
