use std::path::PathBuf;

use clap::Parser;
use stone_primitives::PermissionLevel;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "stone")]
#[command(about = "Run stone commands from the console")]
#[command(version)]
pub struct Cli {
	/// Config file (defaults to ./stone.toml if present)
	#[arg(long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,

	/// Console permission level (0-4)
	#[arg(long, value_name = "LEVEL", value_parser = parse_permission)]
	pub permission: Option<PermissionLevel>,

	/// Console name reported to commands
	#[arg(long)]
	pub name: Option<String>,

	/// Command line to run; repeatable. Reads stdin when omitted.
	#[arg(short = 'c', long = "command", value_name = "LINE")]
	pub commands: Vec<String>,
}

fn parse_permission(s: &str) -> Result<PermissionLevel, String> {
	let level: u8 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
	PermissionLevel::new(level).map_err(|e| e.to_string())
}
