use stone_primitives::{Actor, ActorId};

/// Live entity set selectors are resolved against.
///
/// Implemented by the host. Resolution only reads through this trait.
pub trait World: Send + Sync {
	/// Snapshot of every loaded actor.
	fn actors(&self) -> Vec<Actor>;

	/// Looks up one actor by id.
	fn actor(&self, id: ActorId) -> Option<Actor> {
		self.actors().into_iter().find(|a| a.id == id)
	}

	/// Picks an index in `0..len` for `@r`. `len` is never zero.
	fn random_index(&self, _len: usize) -> usize {
		0
	}
}

/// A fixed list of actors.
#[derive(Debug, Clone, Default)]
pub struct StaticWorld {
	actors: Vec<Actor>,
}

impl StaticWorld {
	pub fn new(actors: Vec<Actor>) -> Self {
		Self { actors }
	}
}

impl World for StaticWorld {
	fn actors(&self) -> Vec<Actor> {
		self.actors.clone()
	}
}
