//! Command definitions: overloads, handlers and the context handlers run in.

use std::fmt;
use std::sync::Arc;

use stone_invocation::Invocation;
use stone_primitives::PermissionLevel;

use crate::dispatch::Dispatcher;
use crate::error::{DispatchError, HandlerResult, RegistryError};
use crate::kind::{ArgumentKind, ArgumentSpec};
use crate::origin::CommandOrigin;
use crate::registry::CommandRegistry;
use crate::soft_enum::SoftEnumRegistry;
use crate::value::ResolvedArgs;
use crate::world::World;

/// Shared handler invoked with the execution context and resolved arguments.
pub type CommandHandler = Arc<dyn Fn(&CommandContext<'_>, &ResolvedArgs) -> HandlerResult + Send + Sync>;

/// Context provided to command handlers.
pub struct CommandContext<'a> {
	pub(crate) origin: &'a CommandOrigin,
	pub(crate) command: &'a str,
	pub(crate) dispatcher: &'a Dispatcher,
	pub(crate) depth: usize,
}

impl<'a> CommandContext<'a> {
	/// Origin of the command currently executing.
	pub fn origin(&self) -> &'a CommandOrigin {
		self.origin
	}

	/// Name the command was invoked by.
	pub fn command(&self) -> &'a str {
		self.command
	}

	/// World the command executes in.
	pub fn world(&self) -> &'a dyn World {
		self.dispatcher.world()
	}

	/// Registered commands, for handlers that list them.
	pub fn registry(&self) -> &'a CommandRegistry {
		self.dispatcher.registry()
	}

	/// Soft enums, for handlers that update them.
	pub fn soft_enums(&self) -> &'a SoftEnumRegistry {
		self.dispatcher.soft_enums()
	}

	/// Runs another command line as the current origin.
	pub fn invoke(&self, line: &str) -> Result<Option<String>, DispatchError> {
		self.dispatcher.execute_nested(line, self.origin, self.depth + 1)
	}

	/// Routes an [`Invocation`] from inside this command. `Current` runs as
	/// this command's origin.
	pub fn dispatch(&self, invocation: &Invocation) -> Result<Option<String>, DispatchError> {
		self.dispatcher.invoke_at(invocation, Some(self.origin), self.depth + 1)
	}
}

/// One callable shape of a command.
#[derive(Clone)]
pub struct CommandOverload {
	parameters: Vec<ArgumentSpec>,
	handler: CommandHandler,
}

impl CommandOverload {
	pub fn new<P, F>(parameters: P, handler: F) -> Self
	where
		P: IntoIterator<Item = ArgumentSpec>,
		F: Fn(&CommandContext<'_>, &ResolvedArgs) -> HandlerResult + Send + Sync + 'static,
	{
		Self {
			parameters: parameters.into_iter().collect(),
			handler: Arc::new(handler),
		}
	}

	/// Declared parameters, in order.
	pub fn parameters(&self) -> &[ArgumentSpec] {
		&self.parameters
	}

	/// Calls the handler.
	pub fn invoke(&self, ctx: &CommandContext<'_>, args: &ResolvedArgs) -> HandlerResult {
		(self.handler)(ctx, args)
	}

	/// Renders a usage line such as `/tell <target: target> <msg: message>`.
	pub fn usage(&self, command: &str) -> String {
		let mut line = format!("/{command}");
		for param in &self.parameters {
			line.push(' ');
			line.push_str(&param.usage());
		}
		line
	}

	fn validate(&self) -> Result<(), String> {
		let mut seen_optional: Option<&str> = None;
		let last = self.parameters.len().saturating_sub(1);
		for (i, param) in self.parameters.iter().enumerate() {
			if param.name.is_empty() {
				return Err(format!("parameter {i} has no name"));
			}
			match (seen_optional, param.optional) {
				(Some(opt), false) => {
					return Err(format!("required parameter '{}' follows optional parameter '{opt}'", param.name));
				}
				(None, true) => seen_optional = Some(param.name.as_str()),
				_ => {}
			}
			if param.kind == ArgumentKind::Message && i != last {
				return Err(format!("message parameter '{}' must be last", param.name));
			}
			if param.enum_ref().is_some_and(str::is_empty) {
				return Err(format!("soft-enum parameter '{}' has no enum name", param.name));
			}
		}
		Ok(())
	}
}

impl fmt::Debug for CommandOverload {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CommandOverload").field("parameters", &self.parameters).finish_non_exhaustive()
	}
}

/// A named command's description, permission and overloads.
///
/// Overload order is significant: resolution picks the first overload that
/// accepts the input.
#[derive(Debug, Clone)]
pub struct CommandDefinition {
	pub description: String,
	pub permission_level: PermissionLevel,
	overloads: Vec<CommandOverload>,
}

impl CommandDefinition {
	/// A definition with no overloads yet, runnable by anyone.
	pub fn new(description: impl Into<String>) -> Self {
		Self {
			description: description.into(),
			permission_level: PermissionLevel::ANY,
			overloads: Vec::new(),
		}
	}

	pub fn permission(mut self, level: PermissionLevel) -> Self {
		self.permission_level = level;
		self
	}

	/// Appends an overload after the existing ones.
	pub fn overload<P, F>(mut self, parameters: P, handler: F) -> Self
	where
		P: IntoIterator<Item = ArgumentSpec>,
		F: Fn(&CommandContext<'_>, &ResolvedArgs) -> HandlerResult + Send + Sync + 'static,
	{
		self.overloads.push(CommandOverload::new(parameters, handler));
		self
	}

	/// Overloads in declaration order.
	pub fn overloads(&self) -> &[CommandOverload] {
		&self.overloads
	}

	/// One usage line per overload.
	pub fn usage(&self, command: &str) -> Vec<String> {
		self.overloads.iter().map(|o| o.usage(command)).collect()
	}

	/// Checks the structural rules enforced at registration.
	pub fn validate(&self, name: &str) -> Result<(), RegistryError> {
		let invalid = |reason: String| RegistryError::InvalidDefinition {
			command: name.to_string(),
			reason,
		};
		if name.is_empty() || name.starts_with('/') || name.chars().any(char::is_whitespace) {
			return Err(invalid("name must be non-empty, without a leading slash or whitespace".into()));
		}
		if self.overloads.is_empty() {
			return Err(invalid("at least one overload is required".into()));
		}
		for (i, overload) in self.overloads.iter().enumerate() {
			overload.validate().map_err(|reason| invalid(format!("overload {i}: {reason}")))?;
		}
		Ok(())
	}
}
