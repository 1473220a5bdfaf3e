//! Canonical invocation types for command dispatch.
//!
//! Every entry point (console input, scripts running a command as the current
//! origin, as an entity, or privileged) converts its request into an
//! [`Invocation`] before dispatch.

pub mod tokenize;

use stone_primitives::ActorId;
pub use tokenize::{CommandLine, TokenizeError, parse_command_line, tokenize};

/// A request to run one command line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Invocation {
	/// Run as the origin of the command currently executing.
	Current {
		/// Full command line, leading slash optional.
		line: String,
	},
	/// Run as an actor, subject to the actor's permission level.
	Actor {
		/// Actor the command executes as.
		actor: ActorId,
		/// Full command line.
		line: String,
	},
	/// Run as a named console origin.
	Console {
		/// Console name reported to handlers.
		name: String,
		/// Full command line.
		line: String,
	},
	/// Run as an actor with the permission check bypassed.
	Privileged {
		/// Actor the command executes as.
		actor: ActorId,
		/// Full command line.
		line: String,
	},
}

impl Invocation {
	/// Creates an invocation that runs as the current origin.
	pub fn current(line: impl Into<String>) -> Self {
		Self::Current { line: line.into() }
	}

	/// Creates an invocation that runs as `actor`.
	pub fn actor(actor: ActorId, line: impl Into<String>) -> Self {
		Self::Actor { actor, line: line.into() }
	}

	/// Creates a console invocation.
	pub fn console(name: impl Into<String>, line: impl Into<String>) -> Self {
		Self::Console {
			name: name.into(),
			line: line.into(),
		}
	}

	/// Creates a privileged invocation as `actor`.
	pub fn privileged(actor: ActorId, line: impl Into<String>) -> Self {
		Self::Privileged { actor, line: line.into() }
	}

	/// The command line to execute.
	pub fn line(&self) -> &str {
		match self {
			Self::Current { line } | Self::Actor { line, .. } | Self::Console { line, .. } | Self::Privileged { line, .. } => line,
		}
	}

	/// Whether the permission gate is skipped for this invocation.
	pub fn bypasses_permission(&self) -> bool {
		matches!(self, Self::Privileged { .. })
	}

	/// Short description for tracing/logging.
	pub fn describe(&self) -> String {
		match self {
			Self::Current { line } => format!("current:{line}"),
			Self::Actor { actor, line } => format!("actor{actor}:{line}"),
			Self::Console { name, line } => format!("console({name}):{line}"),
			Self::Privileged { actor, line } => format!("privileged{actor}:{line}"),
		}
	}
}
