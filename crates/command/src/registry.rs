//! Process-scoped command registry.
//!
//! Readers load an immutable snapshot and never block. Writers clone the
//! current snapshot, apply their change and publish it with compare-and-swap,
//! retrying if another writer won the race.

use std::sync::Arc;

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap as HashMap;

use crate::definition::CommandDefinition;
use crate::error::RegistryError;

/// Maximum edit distance for "did you mean" suggestions.
const SUGGEST_DISTANCE: usize = 2;

/// Immutable view of the registered commands.
#[derive(Clone, Default)]
pub struct CommandSnapshot {
	by_name: HashMap<Box<str>, Arc<CommandDefinition>>,
}

impl CommandSnapshot {
	#[inline]
	pub fn get(&self, name: &str) -> Option<&Arc<CommandDefinition>> {
		self.by_name.get(name)
	}

	pub fn len(&self) -> usize {
		self.by_name.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_name.is_empty()
	}
}

/// Owner of every [`CommandDefinition`], keyed by unique name.
pub struct CommandRegistry {
	snap: ArcSwap<CommandSnapshot>,
}

impl Default for CommandRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl CommandRegistry {
	pub fn new() -> Self {
		Self {
			snap: ArcSwap::from_pointee(CommandSnapshot::default()),
		}
	}

	/// Registers `definition` under `name`.
	///
	/// Fails without touching the registry if the name is taken or the
	/// definition is malformed.
	pub fn register(&self, name: impl Into<String>, definition: CommandDefinition) -> Result<(), RegistryError> {
		let name = name.into();
		definition.validate(&name)?;
		let definition = Arc::new(definition);

		loop {
			let cur = self.snap.load_full();
			if cur.by_name.contains_key(name.as_str()) {
				tracing::warn!(command = %name, "rejected duplicate command registration");
				return Err(RegistryError::DuplicateCommand(name));
			}

			let mut next = (*cur).clone();
			next.by_name.insert(Box::from(name.as_str()), definition.clone());

			let prev = self.snap.compare_and_swap(&cur, Arc::new(next));
			if Arc::ptr_eq(&prev, &cur) {
				tracing::debug!(
					command = %name,
					overloads = definition.overloads().len(),
					permission = %definition.permission_level,
					"registered command"
				);
				return Ok(());
			}
		}
	}

	/// Looks up a command by exact name.
	#[inline]
	pub fn lookup(&self, name: &str) -> Option<Arc<CommandDefinition>> {
		self.snap.load().get(name).cloned()
	}

	/// Current snapshot.
	pub fn snapshot(&self) -> Arc<CommandSnapshot> {
		self.snap.load_full()
	}

	/// Registered names, sorted.
	pub fn names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.snap.load().by_name.keys().map(|k| k.to_string()).collect();
		names.sort_unstable();
		names
	}

	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.snap.load().is_empty()
	}

	/// Suggests a registered name close to `name`.
	pub fn suggest(&self, name: &str) -> Option<String> {
		let snap = self.snap.load();
		snap.by_name
			.keys()
			.map(|k| (strsim::levenshtein(name, k), k))
			.filter(|(d, _)| *d <= SUGGEST_DISTANCE)
			.min_by(|(da, a), (db, b)| da.cmp(db).then_with(|| a.cmp(b)))
			.map(|(_, k)| k.to_string())
	}
}

#[cfg(test)]
mod tests;
