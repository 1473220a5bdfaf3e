//! Overload resolution: picks the first overload of a command whose
//! parameters accept the raw tokens and coerces them into [`ResolvedArgs`].

use std::sync::Arc;

use crate::coerce::{CoerceCtx, coerce_argument};
use crate::definition::{CommandDefinition, CommandOverload};
use crate::error::{OverloadMismatch, ResolutionError};
use crate::origin::CommandOrigin;
use crate::registry::CommandRegistry;
use crate::soft_enum::SoftEnumRegistry;
use crate::value::ResolvedArgs;
use crate::world::World;

/// The overload selected for an input and its coerced arguments.
#[derive(Debug, Clone)]
pub struct Resolution {
	/// Definition the overload belongs to.
	pub definition: Arc<CommandDefinition>,
	/// Index of the selected overload in declaration order.
	pub overload_index: usize,
	/// Coerced arguments, one per supplied parameter.
	pub args: ResolvedArgs,
}

impl Resolution {
	pub fn overload(&self) -> &CommandOverload {
		&self.definition.overloads()[self.overload_index]
	}

	pub fn args(&self) -> &ResolvedArgs {
		&self.args
	}
}

/// Resolves commands against one set of registries and one world.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
	registry: &'a CommandRegistry,
	soft_enums: &'a SoftEnumRegistry,
	world: &'a dyn World,
}

impl<'a> Resolver<'a> {
	pub fn new(registry: &'a CommandRegistry, soft_enums: &'a SoftEnumRegistry, world: &'a dyn World) -> Self {
		Self { registry, soft_enums, world }
	}

	/// Resolves `name` with `tokens` for `origin`.
	///
	/// The permission gate runs before any token is parsed. Overloads are
	/// tried in declaration order and the first that accepts every token
	/// wins, even if a later one would also match.
	pub fn resolve<S: AsRef<str>>(&self, name: &str, tokens: &[S], origin: &CommandOrigin) -> Result<Resolution, ResolutionError> {
		self.resolve_with(name, tokens, origin, true)
	}

	/// Like [`Resolver::resolve`], skipping the permission gate when
	/// `check_permission` is false.
	pub(crate) fn resolve_with<S: AsRef<str>>(&self, name: &str, tokens: &[S], origin: &CommandOrigin, check_permission: bool) -> Result<Resolution, ResolutionError> {
		let Some(definition) = self.registry.lookup(name) else {
			let suggestion = self.registry.suggest(name);
			tracing::trace!(command = name, ?suggestion, "unknown command");
			return Err(ResolutionError::UnknownCommand {
				name: name.to_string(),
				suggestion,
			});
		};

		if check_permission && !origin.permission_level.satisfies(definition.permission_level) {
			tracing::debug!(
				command = name,
				origin = %origin.name,
				required = %definition.permission_level,
				actual = %origin.permission_level,
				"permission denied"
			);
			return Err(ResolutionError::InsufficientPermission {
				command: name.to_string(),
				required: definition.permission_level,
				actual: origin.permission_level,
			});
		}

		let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
		let soft_enums = self.soft_enums.snapshot();
		let ctx = CoerceCtx {
			origin,
			soft_enums: &soft_enums,
			world: self.world,
		};

		let mut mismatches = Vec::with_capacity(definition.overloads().len());
		for (index, overload) in definition.overloads().iter().enumerate() {
			match match_overload(overload, &tokens, &ctx) {
				Ok(args) => {
					tracing::trace!(command = name, overload = index, args = args.len(), "resolved overload");
					return Ok(Resolution {
						definition,
						overload_index: index,
						args,
					});
				}
				Err(mismatch) => {
					tracing::trace!(command = name, overload = index, %mismatch, "overload rejected");
					mismatches.push(mismatch);
				}
			}
		}

		Err(ResolutionError::NoMatchingOverload {
			command: name.to_string(),
			mismatches,
		})
	}
}

fn match_overload(overload: &CommandOverload, tokens: &[&str], ctx: &CoerceCtx<'_>) -> Result<ResolvedArgs, OverloadMismatch> {
	let mut cursor = 0;
	let mut values = Vec::with_capacity(overload.parameters().len());

	for param in overload.parameters() {
		let rest = &tokens[cursor..];
		if rest.is_empty() {
			if param.optional {
				break;
			}
			return Err(OverloadMismatch::MissingArgument {
				parameter: param.name.clone(),
			});
		}
		let coerced = coerce_argument(rest, param, ctx)?;
		cursor += coerced.consumed;
		values.push(coerced.value);
	}

	if cursor < tokens.len() {
		return Err(OverloadMismatch::TrailingTokens {
			count: tokens.len() - cursor,
		});
	}
	Ok(ResolvedArgs::new(values))
}
