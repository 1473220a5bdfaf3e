//! Console host for stone commands.
//!
//! Loads `stone.toml`, registers the builtin commands and runs command lines
//! given with `-c` or read from stdin, one per line.

mod builtins;
mod cli;
mod host;
mod world;

use std::path::Path;

use clap::Parser;
use cli::Cli;
use host::Host;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	// Config loading logs under a scoped subscriber; the configured level
	// only takes over once the file has been read.
	let config = tracing::subscriber::with_default(subscriber(cli.verbose, "info"), || match &cli.config {
		Some(path) => stone_config::load(path),
		None => stone_config::load_from_dir(Path::new(".")),
	})?;
	tracing::subscriber::set_global_default(subscriber(cli.verbose, &config.logging.level))?;

	let mut host = Host::from_config(&config)?;
	if let Some(name) = cli.name {
		host.console_mut().name = name;
	}
	if let Some(level) = cli.permission {
		host.console_mut().permission_level = level;
	}

	if cli.commands.is_empty() {
		host.run_lines(std::io::stdin().lock(), std::io::stdout().lock())?;
		return Ok(());
	}

	let failures = host.run_commands(&cli.commands, std::io::stdout().lock())?;
	if failures > 0 {
		anyhow::bail!("{failures} command(s) failed");
	}
	Ok(())
}

fn subscriber(verbose: bool, level: &str) -> impl tracing::Subscriber + Send + Sync + use<> {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { level }));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).finish()
}
