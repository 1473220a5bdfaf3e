//! Command execution: tokenize a line, resolve it and run the handler.

use std::borrow::Cow;
use std::sync::Arc;

use stone_invocation::{Invocation, parse_command_line};
use stone_primitives::ActorId;

use crate::definition::{CommandContext, CommandDefinition};
use crate::error::{DispatchError, RegistryError};
use crate::origin::CommandOrigin;
use crate::registry::CommandRegistry;
use crate::resolve::Resolver;
use crate::soft_enum::SoftEnumRegistry;
use crate::world::World;

/// Nesting limit for commands that invoke other commands.
pub const MAX_DEPTH: usize = 16;

/// Executes command lines against shared registries and a world.
#[derive(Clone)]
pub struct Dispatcher {
	registry: Arc<CommandRegistry>,
	soft_enums: Arc<SoftEnumRegistry>,
	world: Arc<dyn World>,
}

impl Dispatcher {
	/// A dispatcher with empty registries.
	pub fn new(world: Arc<dyn World>) -> Self {
		Self::with_registries(Arc::default(), Arc::default(), world)
	}

	pub fn with_registries(registry: Arc<CommandRegistry>, soft_enums: Arc<SoftEnumRegistry>, world: Arc<dyn World>) -> Self {
		Self { registry, soft_enums, world }
	}

	pub fn registry(&self) -> &CommandRegistry {
		&self.registry
	}

	pub fn soft_enums(&self) -> &SoftEnumRegistry {
		&self.soft_enums
	}

	pub fn world(&self) -> &dyn World {
		&*self.world
	}

	/// Shorthand for registering on the underlying registry.
	pub fn register(&self, name: impl Into<String>, definition: CommandDefinition) -> Result<(), RegistryError> {
		self.registry.register(name, definition)
	}

	pub fn resolver(&self) -> Resolver<'_> {
		Resolver::new(&self.registry, &self.soft_enums, &*self.world)
	}

	/// Runs `line` as `origin`. Returns the handler's output unmodified.
	pub fn execute(&self, line: &str, origin: &CommandOrigin) -> Result<Option<String>, DispatchError> {
		self.run(line, origin, 0, true)
	}

	/// Runs `line` as `origin` without the permission gate.
	pub fn execute_privileged(&self, line: &str, origin: &CommandOrigin) -> Result<Option<String>, DispatchError> {
		self.run(line, origin, 0, false)
	}

	/// Runs `line` from inside a handler at nesting `depth`.
	pub(crate) fn execute_nested(&self, line: &str, origin: &CommandOrigin, depth: usize) -> Result<Option<String>, DispatchError> {
		self.check_depth(line, depth)?;
		self.run(line, origin, depth, true)
	}

	/// Routes an [`Invocation`] to the matching origin.
	///
	/// `current` is the origin of the command being executed, if any; it is
	/// required by [`Invocation::Current`].
	pub fn invoke(&self, invocation: &Invocation, current: Option<&CommandOrigin>) -> Result<Option<String>, DispatchError> {
		self.invoke_at(invocation, current, 0)
	}

	pub(crate) fn invoke_at(&self, invocation: &Invocation, current: Option<&CommandOrigin>, depth: usize) -> Result<Option<String>, DispatchError> {
		tracing::debug!(invocation = %invocation.describe(), depth, "invoking command");
		let line = invocation.line();
		let origin = match invocation {
			Invocation::Current { .. } => Cow::Borrowed(current.ok_or(DispatchError::NoCurrentOrigin)?),
			Invocation::Actor { actor, .. } | Invocation::Privileged { actor, .. } => Cow::Owned(self.actor_origin(*actor)?),
			Invocation::Console { name, .. } => Cow::Owned(CommandOrigin::console(name.as_str())),
		};
		self.check_depth(line, depth)?;
		self.run(line, &origin, depth, !invocation.bypasses_permission())
	}

	fn actor_origin(&self, id: ActorId) -> Result<CommandOrigin, DispatchError> {
		let actor = self.world.actor(id).ok_or(DispatchError::UnknownActor(id))?;
		Ok(CommandOrigin::for_actor(&actor))
	}

	fn check_depth(&self, line: &str, depth: usize) -> Result<(), DispatchError> {
		if depth > MAX_DEPTH {
			tracing::warn!(line, depth, "command nesting limit reached");
			return Err(DispatchError::RecursionLimit { limit: MAX_DEPTH });
		}
		Ok(())
	}

	fn run(&self, line: &str, origin: &CommandOrigin, depth: usize, check_permission: bool) -> Result<Option<String>, DispatchError> {
		let parsed = parse_command_line(line).inspect_err(|err| tracing::debug!(line, %err, "rejected command line"))?;
		tracing::debug!(command = %parsed.name, origin = %origin.name, args = parsed.args.len(), depth, "dispatching command");

		let resolution = self
			.resolver()
			.resolve_with(&parsed.name, &parsed.args, origin, check_permission)
			.inspect_err(|err| tracing::debug!(command = %parsed.name, %err, "rejected command"))?;

		let ctx = CommandContext {
			origin,
			command: &parsed.name,
			dispatcher: self,
			depth,
		};
		resolution.overload().invoke(&ctx, resolution.args()).map_err(|source| {
			tracing::warn!(command = %parsed.name, error = %source, "command handler failed");
			DispatchError::Handler {
				command: parsed.name.clone(),
				source,
			}
		})
	}
}

#[cfg(test)]
mod tests;
