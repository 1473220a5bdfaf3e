//! Per-parameter coercion of raw tokens into typed [`Value`]s.
//!
//! Coercion consumes a variable number of tokens: `position` takes three and
//! `message` takes everything left, so callers advance a cursor by
//! [`Coerced::consumed`] rather than by one.

mod block;
mod list;
mod position;
mod selector;

use std::num::IntErrorKind;

pub use block::parse_block;
pub use position::{Coordinate, parse_position};

use crate::error::CoercionError;
use crate::kind::{ArgumentKind, ArgumentSpec, TokenCount};
use crate::origin::CommandOrigin;
use crate::soft_enum::{SoftEnum, SoftEnumSnapshot};
use crate::value::Value;
use crate::world::World;

/// Soft enum values listed in a mismatch message before truncating.
const ENUM_PREVIEW: usize = 8;

/// Everything coercion may read besides the tokens themselves.
#[derive(Clone, Copy)]
pub struct CoerceCtx<'a> {
	/// Origin of the invocation; supplies the base for relative coordinates.
	pub origin: &'a CommandOrigin,
	/// Soft enum values, fixed for the whole resolution.
	pub soft_enums: &'a SoftEnumSnapshot,
	/// Entities selectors are resolved against.
	pub world: &'a dyn World,
}

/// A coerced value and the number of tokens it used.
#[derive(Debug, Clone, PartialEq)]
pub struct Coerced {
	pub value: Value,
	pub consumed: usize,
}

/// Coerces the front of `tokens` according to `spec`.
///
/// `tokens` is the remaining input; it must hold at least as many tokens as
/// the kind consumes.
pub fn coerce_argument(tokens: &[&str], spec: &ArgumentSpec, ctx: &CoerceCtx<'_>) -> Result<Coerced, CoercionError> {
	let fail = |reason: String| CoercionError {
		parameter: spec.name.clone(),
		kind: spec.kind.clone(),
		reason,
	};

	let needed = match spec.kind.token_count() {
		TokenCount::Fixed(n) => n,
		TokenCount::Rest => 1,
	};
	if tokens.len() < needed {
		return Err(fail(format!("expected {needed} token(s), found {}", tokens.len())));
	}
	let token = tokens[0];

	let value = match &spec.kind {
		ArgumentKind::String => Value::String(token.to_string()),
		ArgumentKind::Text => Value::Text(token.to_string()),
		ArgumentKind::Int => Value::Int(parse_int(token).map_err(fail)?),
		ArgumentKind::Float => Value::Float(parse_float(token).map_err(fail)?),
		ArgumentKind::Bool => Value::Bool(parse_bool(token).map_err(fail)?),
		ArgumentKind::Message => {
			return Ok(Coerced {
				value: Value::Message(tokens.join(" ")),
				consumed: tokens.len(),
			});
		}
		ArgumentKind::SoftEnum(name) => {
			let values = ctx.soft_enums.get(name).ok_or_else(|| fail(format!("soft enum '{name}' is not registered")))?;
			let canonical = values.find(token).ok_or_else(|| fail(format!("'{token}' is not one of: {}", preview(values))))?;
			Value::SoftEnum(canonical.to_string())
		}
		ArgumentKind::Position => {
			let pos = parse_position(&tokens[..3], ctx.origin.world_pos).map_err(fail)?;
			return Ok(Coerced {
				value: Value::Position(pos),
				consumed: 3,
			});
		}
		ArgumentKind::Selector => Value::Selector(selector::select(token, ctx, false).map_err(fail)?),
		ArgumentKind::PlayerSelector => Value::PlayerSelector(selector::select(token, ctx, true).map_err(fail)?),
		ArgumentKind::Block => Value::Block(parse_block(token).map_err(fail)?),
		ArgumentKind::Json => Value::Json(serde_json::from_str(token).map_err(|e| fail(format!("invalid JSON: {e}")))?),
	};

	Ok(Coerced { value, consumed: 1 })
}

/// Parses a 32-bit signed integer.
pub fn parse_int(token: &str) -> Result<i32, String> {
	token.parse::<i32>().map_err(|e| match e.kind() {
		IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => format!("integer out of range: '{token}'"),
		_ => format!("invalid integer: '{token}'"),
	})
}

/// Parses a finite floating point number.
pub fn parse_float(token: &str) -> Result<f64, String> {
	match token.parse::<f64>() {
		Ok(v) if v.is_finite() => Ok(v),
		_ => Err(format!("invalid number: '{token}'")),
	}
}

/// Accepts exactly `true` or `false`.
pub fn parse_bool(token: &str) -> Result<bool, String> {
	match token {
		"true" => Ok(true),
		"false" => Ok(false),
		_ => Err(format!("invalid boolean: '{token}' (expected true or false)")),
	}
}

fn preview(values: &SoftEnum) -> String {
	let mut shown: Vec<&str> = values.values().take(ENUM_PREVIEW).collect();
	if values.len() > ENUM_PREVIEW {
		shown.push("...");
	}
	shown.join(", ")
}
