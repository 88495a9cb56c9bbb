use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rowedit::{app::App, config::Config, logging};

/// A small modal terminal text editor.
#[derive(Parser, Debug)]
#[command(name = "rowedit", version, about)]
struct Cli {
	/// File to edit (starts an empty buffer if omitted)
	file:   Option<PathBuf>,
	/// Config file to use instead of the per-user one
	#[arg(long)]
	config: Option<PathBuf>,
}

fn main() {
	if let Err(err) = run() {
		eprintln!("{:#}", err);
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();
	logging::init_logging().context("initialize logging failed")?;
	let config = Config::load(cli.config.as_deref()).context("load config failed")?;
	App::new(&config).run(cli.file).context("run editor failed")
}
