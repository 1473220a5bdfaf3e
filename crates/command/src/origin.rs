use stone_primitives::{Actor, BlockPos, PermissionLevel, Vec3};

/// Identity and context a command executes under.
///
/// Supplied by the caller for each invocation. The resolver only reads the
/// permission level and position; handlers receive the whole origin.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOrigin {
	/// Name reported to handlers (player name or console name).
	pub name: String,
	/// Level checked against the command's requirement.
	pub permission_level: PermissionLevel,
	/// Position relative coordinates and distance filters are measured from.
	pub world_pos: Option<Vec3>,
	/// Actor the command runs as, if any.
	pub actor: Option<Actor>,
}

impl CommandOrigin {
	/// An origin with no position and no actor.
	pub fn new(name: impl Into<String>, permission_level: PermissionLevel) -> Self {
		Self {
			name: name.into(),
			permission_level,
			world_pos: None,
			actor: None,
		}
	}

	/// A console origin at the highest permission level.
	pub fn console(name: impl Into<String>) -> Self {
		Self::new(name, PermissionLevel::OWNER)
	}

	/// An origin running as `actor`, at the actor's permission level.
	pub fn for_actor(actor: &Actor) -> Self {
		Self {
			name: actor.name.clone(),
			permission_level: actor.permission.unwrap_or_default(),
			world_pos: Some(actor.pos),
			actor: Some(actor.clone()),
		}
	}

	pub fn with_position(mut self, pos: Vec3) -> Self {
		self.world_pos = Some(pos);
		self
	}

	pub fn with_permission(mut self, level: PermissionLevel) -> Self {
		self.permission_level = level;
		self
	}

	/// Block containing the origin position.
	pub fn block_pos(&self) -> Option<BlockPos> {
		self.world_pos.map(Vec3::block_pos)
	}
}
