//! Error types for configuration loading.

use std::path::PathBuf;

use stone_primitives::ActorId;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The log level is not a known level name.
	#[error("invalid log level: {0} (expected trace, debug, info, warn or error)")]
	InvalidLogLevel(String),

	/// A soft enum entry has an empty name.
	#[error("soft enum {index} has an empty name")]
	EmptySoftEnumName {
		/// Position of the entry in the file.
		index: usize,
	},

	/// Two soft enum entries share a name.
	#[error("soft enum declared twice: {0}")]
	DuplicateSoftEnum(String),

	/// Two actors share an id.
	#[error("actor id used twice: {0}")]
	DuplicateActor(ActorId),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
