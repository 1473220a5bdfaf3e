//! Error types for registration, coercion, resolution and dispatch.

use stone_invocation::TokenizeError;
use stone_primitives::{ActorId, PermissionLevel};
use thiserror::Error;

use crate::kind::ArgumentKind;

/// A token could not be converted to its declared argument kind.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid value for '{parameter}' ({kind}): {reason}")]
pub struct CoercionError {
	/// Name of the parameter being coerced.
	pub parameter: String,
	/// Declared kind of the parameter.
	pub kind: ArgumentKind,
	/// Human-readable cause.
	pub reason: String,
}

/// Why one overload did not match the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverloadMismatch {
	/// Input ended before a required parameter.
	#[error("missing required argument '{parameter}'")]
	MissingArgument {
		/// The required parameter.
		parameter: String,
	},
	/// Every parameter was satisfied but input remained.
	#[error("{count} unexpected trailing token(s)")]
	TrailingTokens {
		/// Number of unconsumed tokens.
		count: usize,
	},
	/// A token failed coercion.
	#[error(transparent)]
	Coercion(#[from] CoercionError),
}

/// Failures of [`crate::Resolver::resolve`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolutionError {
	/// No command with this name is registered.
	#[error("unknown command: {name}{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	UnknownCommand {
		/// The requested name.
		name: String,
		/// A registered name close to the requested one.
		suggestion: Option<String>,
	},
	/// The origin's permission level is below the command's.
	#[error("insufficient permission for '{command}': requires level {required}, origin has {actual}")]
	InsufficientPermission {
		/// Command name.
		command: String,
		/// Level the command requires.
		required: PermissionLevel,
		/// Level the origin holds.
		actual: PermissionLevel,
	},
	/// No overload accepted the tokens.
	#[error("no overload of '{command}' matches the given arguments")]
	NoMatchingOverload {
		/// Command name.
		command: String,
		/// One entry per overload, in declaration order.
		mismatches: Vec<OverloadMismatch>,
	},
}

/// Failures of [`crate::CommandRegistry::register`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// A command with this name already exists.
	#[error("command already registered: {0}")]
	DuplicateCommand(String),
	/// The definition violates a structural rule.
	#[error("invalid definition for '{command}': {reason}")]
	InvalidDefinition {
		/// Command name.
		command: String,
		/// Violated rule.
		reason: String,
	},
}

/// Failures of [`crate::SoftEnumRegistry`] mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SoftEnumError {
	/// No soft enum with this name exists.
	#[error("unknown soft enum: {0}")]
	UnknownEnum(String),
}

/// Failure reported by a command handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HandlerError(pub String);

impl HandlerError {
	/// Creates a handler error from any message.
	pub fn new(message: impl Into<String>) -> Self {
		Self(message.into())
	}
}

impl From<DispatchError> for HandlerError {
	fn from(err: DispatchError) -> Self {
		Self(err.to_string())
	}
}

/// Failures of [`crate::Dispatcher`] entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
	/// The command line could not be tokenized.
	#[error(transparent)]
	Tokenize(#[from] TokenizeError),
	/// The command could not be resolved.
	#[error(transparent)]
	Resolution(#[from] ResolutionError),
	/// The selected handler failed.
	#[error("command '{command}' failed: {source}")]
	Handler {
		/// Command name.
		command: String,
		/// Error returned by the handler.
		#[source]
		source: HandlerError,
	},
	/// The invocation names an actor the world does not know.
	#[error("unknown actor {0}")]
	UnknownActor(ActorId),
	/// A run-as-current invocation was made outside a command handler.
	#[error("no command origin is active")]
	NoCurrentOrigin,
	/// Nested invocations exceeded the depth limit.
	#[error("command nesting exceeded {limit} levels")]
	RecursionLimit {
		/// The configured limit.
		limit: usize,
	},
}

/// Result type returned by command handlers.
pub type HandlerResult = Result<Option<String>, HandlerError>;
