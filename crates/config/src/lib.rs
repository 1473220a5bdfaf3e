//! Configuration for the stone command host.
//!
//! Configuration is a single TOML file, `stone.toml` by default:
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [console]
//! name = "Server"
//! permission = 4
//!
//! [[soft_enums]]
//! name = "gamemode"
//! values = ["survival", "creative", "adventure"]
//! case_sensitive = false
//!
//! [[actors]]
//! id = 1
//! name = "Steve"
//! identifier = "minecraft:player"
//! pos = [0.0, 64.0, 0.0]
//! permission = 1
//! ```
//!
//! Every section is optional. A missing file yields the defaults.

mod error;

use std::collections::HashSet;
use std::path::Path;

pub use error::{ConfigError, Result};
use serde::Deserialize;
use stone_primitives::{Actor, PermissionLevel};

/// File name looked up by [`load_from_dir`].
pub const CONFIG_FILE: &str = "stone.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Parsed and validated configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub logging: LoggingConfig,
	pub console: ConsoleConfig,
	/// Soft enums registered at startup.
	pub soft_enums: Vec<SoftEnumConfig>,
	/// Actors of the host's fixed world.
	pub actors: Vec<Actor>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
	/// Default level when `RUST_LOG` is unset.
	pub level: String,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self { level: "info".into() }
	}
}

/// Origin used for lines typed at the host console.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
	pub name: String,
	pub permission: PermissionLevel,
}

impl Default for ConsoleConfig {
	fn default() -> Self {
		Self {
			name: "Server".into(),
			permission: PermissionLevel::OWNER,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoftEnumConfig {
	pub name: String,
	#[serde(default)]
	pub values: Vec<String>,
	#[serde(default = "default_case_sensitive")]
	pub case_sensitive: bool,
}

fn default_case_sensitive() -> bool {
	true
}

impl Config {
	/// Checks cross-field rules serde cannot express.
	pub fn validate(&self) -> Result<()> {
		if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
			return Err(ConfigError::InvalidLogLevel(self.logging.level.clone()));
		}

		let mut enums = HashSet::new();
		for (index, entry) in self.soft_enums.iter().enumerate() {
			if entry.name.is_empty() {
				return Err(ConfigError::EmptySoftEnumName { index });
			}
			if !enums.insert(entry.name.as_str()) {
				return Err(ConfigError::DuplicateSoftEnum(entry.name.clone()));
			}
		}

		let mut ids = HashSet::new();
		for actor in &self.actors {
			if !ids.insert(actor.id) {
				return Err(ConfigError::DuplicateActor(actor.id));
			}
		}
		Ok(())
	}
}

/// Parses and validates configuration text.
pub fn parse_config_str(content: &str) -> Result<Config> {
	let config: Config = toml::from_str(content)?;
	config.validate()?;
	Ok(config)
}

/// Loads a configuration file.
pub fn load(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	let config = parse_config_str(&content)?;
	tracing::debug!(
		path = %path.display(),
		soft_enums = config.soft_enums.len(),
		actors = config.actors.len(),
		"loaded config"
	);
	Ok(config)
}

/// Loads [`CONFIG_FILE`] from `dir`, or the defaults if it does not exist.
pub fn load_from_dir(dir: &Path) -> Result<Config> {
	let path = dir.join(CONFIG_FILE);
	if !path.exists() {
		tracing::debug!(path = %path.display(), "no config file, using defaults");
		return Ok(Config::default());
	}
	load(&path)
}
