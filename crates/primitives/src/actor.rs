use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{PermissionLevel, Vec3};

/// Entity identifier shared by every player.
pub const PLAYER_IDENTIFIER: &str = "minecraft:player";

/// Runtime id of an actor, unique within one world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Snapshot of an entity as the host reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
	/// Runtime id.
	pub id: ActorId,
	/// Display name (the player name for players).
	pub name: String,
	/// Namespaced entity type, e.g. `minecraft:zombie`.
	pub identifier: String,
	/// Feet position.
	pub pos: Vec3,
	/// Dimension id.
	#[serde(default)]
	pub dim: i32,
	/// Player permission, if the host exposes one.
	#[serde(default)]
	pub permission: Option<PermissionLevel>,
	/// Player uuid.
	#[serde(default)]
	pub uuid: Option<String>,
	/// Xbox user id.
	#[serde(default)]
	pub xuid: Option<String>,
}

impl Actor {
	/// Creates a player actor.
	pub fn player(id: u64, name: impl Into<String>, pos: Vec3) -> Self {
		Self::new(id, name, PLAYER_IDENTIFIER, pos)
	}

	/// Creates an actor of an arbitrary entity type.
	pub fn new(id: u64, name: impl Into<String>, identifier: impl Into<String>, pos: Vec3) -> Self {
		Self {
			id: ActorId(id),
			name: name.into(),
			identifier: identifier.into(),
			pos,
			dim: 0,
			permission: None,
			uuid: None,
			xuid: None,
		}
	}

	/// Sets the player permission.
	pub fn with_permission(mut self, permission: PermissionLevel) -> Self {
		self.permission = Some(permission);
		self
	}

	/// Whether this actor is a player.
	pub fn is_player(&self) -> bool {
		self.identifier == PLAYER_IDENTIFIER
	}

	/// Checks the entity type, accepting both `zombie` and `minecraft:zombie`.
	pub fn is_type(&self, ty: &str) -> bool {
		if ty.contains(':') {
			self.identifier == ty
		} else {
			self.identifier.strip_prefix("minecraft:") == Some(ty)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn type_check_accepts_short_and_namespaced_forms() {
		let zombie = Actor::new(2, "Zombie", "minecraft:zombie", Vec3::ZERO);
		assert!(zombie.is_type("zombie"));
		assert!(zombie.is_type("minecraft:zombie"));
		assert!(!zombie.is_type("player"));
		assert!(!zombie.is_player());
		assert!(Actor::player(1, "Steve", Vec3::ZERO).is_type("player"));
	}

	#[test]
	fn actor_deserializes_with_defaults() {
		let actor: Actor = toml::from_str(
			r#"
id = 7
name = "Alex"
identifier = "minecraft:player"
pos = [0.0, 64.0, 0.0]
permission = 2
"#,
		)
		.unwrap();
		assert!(actor.is_player());
		assert_eq!(actor.dim, 0);
		assert_eq!(actor.permission, Some(PermissionLevel::ADMIN));
		assert_eq!(actor.uuid, None);
	}
}
