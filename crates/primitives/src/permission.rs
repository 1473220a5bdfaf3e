use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Permission level a command requires or an origin holds.
///
/// Ordered from least privileged (`ANY`, 0) to most privileged (`OWNER`, 4,
/// the console).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PermissionLevel(u8);

/// A permission level outside `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("permission level {0} out of range (expected 0..=4)")]
pub struct PermissionLevelError(pub u8);

impl PermissionLevel {
	/// Any player.
	pub const ANY: Self = Self(0);
	/// Operators allowed to run game-master commands.
	pub const GAME_MASTERS: Self = Self(1);
	/// Server administrators.
	pub const ADMIN: Self = Self(2);
	/// The hosting player.
	pub const HOST: Self = Self(3);
	/// The console; highest level.
	pub const OWNER: Self = Self(4);

	/// Validates a raw level.
	pub const fn new(level: u8) -> Result<Self, PermissionLevelError> {
		if level <= Self::OWNER.0 { Ok(Self(level)) } else { Err(PermissionLevelError(level)) }
	}

	/// Raw numeric level.
	pub const fn get(self) -> u8 {
		self.0
	}

	/// Whether an origin at this level may run something requiring `required`.
	pub fn satisfies(self, required: Self) -> bool {
		self >= required
	}
}

impl TryFrom<u8> for PermissionLevel {
	type Error = PermissionLevelError;

	fn try_from(level: u8) -> Result<Self, Self::Error> {
		Self::new(level)
	}
}

impl From<PermissionLevel> for u8 {
	fn from(level: PermissionLevel) -> Self {
		level.0
	}
}

impl fmt::Display for PermissionLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
