use rand::Rng;
use stone_command::World;
use stone_primitives::Actor;

/// The console's world: the actors listed in the config file.
pub struct ConsoleWorld {
	actors: Vec<Actor>,
}

impl ConsoleWorld {
	pub fn new(actors: Vec<Actor>) -> Self {
		Self { actors }
	}
}

impl World for ConsoleWorld {
	fn actors(&self) -> Vec<Actor> {
		self.actors.clone()
	}

	fn random_index(&self, len: usize) -> usize {
		rand::thread_rng().gen_range(0..len)
	}
}
