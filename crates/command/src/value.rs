//! Coerced argument values handed to command handlers.

use std::collections::BTreeMap;
use std::fmt;

use stone_primitives::{Actor, Vec3};

/// A parsed block reference such as `minecraft:wool["color"="red"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockState {
	/// Namespaced block name.
	pub name: String,
	/// Block state overrides, sorted by key.
	pub states: BTreeMap<String, String>,
}

impl fmt::Display for BlockState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)?;
		if !self.states.is_empty() {
			f.write_str("[")?;
			for (i, (k, v)) in self.states.iter().enumerate() {
				if i > 0 {
					f.write_str(",")?;
				}
				write!(f, "{k}={v}")?;
			}
			f.write_str("]")?;
		}
		Ok(())
	}
}

/// One coerced argument, tagged by the kind that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// From a `string` parameter.
	String(String),
	/// From an `int` parameter.
	Int(i32),
	/// From a `float` parameter.
	Float(f64),
	/// From a `bool` parameter.
	Bool(bool),
	/// From a `text` parameter.
	Text(String),
	/// From a `message` parameter.
	Message(String),
	/// From a `soft-enum` parameter, in the enum's registered spelling.
	SoftEnum(String),
	/// From a `position` parameter, already made absolute.
	Position(Vec3),
	/// From a `selector` parameter.
	Selector(Vec<Actor>),
	/// From a `player-selector` parameter.
	PlayerSelector(Vec<Actor>),
	/// From a `block` parameter.
	Block(BlockState),
	/// From a `json` parameter.
	Json(serde_json::Value),
}

impl Value {
	/// String payload of `string`, `text`, `message` and `soft-enum` values.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) | Self::Text(s) | Self::Message(s) | Self::SoftEnum(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_int(&self) -> Option<i32> {
		match self {
			Self::Int(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_float(&self) -> Option<f64> {
		match self {
			Self::Float(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_position(&self) -> Option<Vec3> {
		match self {
			Self::Position(v) => Some(*v),
			_ => None,
		}
	}

	/// Targets of either selector kind.
	pub fn as_actors(&self) -> Option<&[Actor]> {
		match self {
			Self::Selector(a) | Self::PlayerSelector(a) => Some(a),
			_ => None,
		}
	}

	pub fn as_block(&self) -> Option<&BlockState> {
		match self {
			Self::Block(b) => Some(b),
			_ => None,
		}
	}

	pub fn as_json(&self) -> Option<&serde_json::Value> {
		match self {
			Self::Json(j) => Some(j),
			_ => None,
		}
	}
}

/// Arguments of a resolved overload, in parameter order.
///
/// Shorter than the parameter list when optional trailing parameters were
/// omitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedArgs {
	values: Vec<Value>,
}

impl ResolvedArgs {
	pub(crate) fn new(values: Vec<Value>) -> Self {
		Self { values }
	}

	/// The value at `index`, or `None` if it was omitted.
	pub fn get(&self, index: usize) -> Option<&Value> {
		self.values.get(index)
	}

	/// Number of supplied arguments.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.values.iter()
	}

	pub fn str(&self, index: usize) -> Option<&str> {
		self.get(index)?.as_str()
	}

	pub fn int(&self, index: usize) -> Option<i32> {
		self.get(index)?.as_int()
	}

	pub fn float(&self, index: usize) -> Option<f64> {
		self.get(index)?.as_float()
	}

	pub fn bool(&self, index: usize) -> Option<bool> {
		self.get(index)?.as_bool()
	}

	pub fn position(&self, index: usize) -> Option<Vec3> {
		self.get(index)?.as_position()
	}

	pub fn actors(&self, index: usize) -> Option<&[Actor]> {
		self.get(index)?.as_actors()
	}

	pub fn block(&self, index: usize) -> Option<&BlockState> {
		self.get(index)?.as_block()
	}

	pub fn json(&self, index: usize) -> Option<&serde_json::Value> {
		self.get(index)?.as_json()
	}
}

impl<'a> IntoIterator for &'a ResolvedArgs {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.values.iter()
	}
}
