//! Parameter declarations: argument kinds and per-parameter specs.

use std::fmt;

/// Semantic type of a command parameter.
///
/// `SoftEnum` carries the name of the runtime value set it is checked
/// against, so an enum reference exists exactly when the kind is a soft enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
	/// One token, taken literally.
	String,
	/// One token, 32-bit signed integer.
	Int,
	/// One token, finite floating point number.
	Float,
	/// One token, `true` or `false`.
	Bool,
	/// One token, taken literally.
	Text,
	/// Every remaining token, joined by single spaces.
	Message,
	/// One token from the named soft enum.
	SoftEnum(String),
	/// Three coordinate tokens, absolute or `~`-relative.
	Position,
	/// One target selector token, any entity type.
	Selector,
	/// One target selector token, players only.
	PlayerSelector,
	/// One block token with optional states.
	Block,
	/// One JSON token. The tokenizer strips one level of quotes, so a string
	/// scalar is written as `"\"hi\""`.
	Json,
}

/// How many tokens a kind consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCount {
	/// Exactly this many tokens.
	Fixed(usize),
	/// All remaining tokens.
	Rest,
}

impl ArgumentKind {
	/// Declared type name, as written in overload declarations.
	pub fn name(&self) -> &'static str {
		match self {
			Self::String => "string",
			Self::Int => "int",
			Self::Float => "float",
			Self::Bool => "bool",
			Self::Text => "text",
			Self::Message => "message",
			Self::SoftEnum(_) => "soft-enum",
			Self::Position => "position",
			Self::Selector => "selector",
			Self::PlayerSelector => "player-selector",
			Self::Block => "block",
			Self::Json => "json",
		}
	}

	/// Token consumption of this kind.
	pub fn token_count(&self) -> TokenCount {
		match self {
			Self::Message => TokenCount::Rest,
			Self::Position => TokenCount::Fixed(3),
			_ => TokenCount::Fixed(1),
		}
	}

	/// Name of the soft enum this kind refers to.
	pub fn enum_ref(&self) -> Option<&str> {
		match self {
			Self::SoftEnum(name) => Some(name),
			_ => None,
		}
	}

	/// Placeholder shown in usage lines.
	pub fn usage_label(&self) -> &str {
		match self {
			Self::SoftEnum(name) => name,
			Self::Position => "x y z",
			Self::Selector | Self::PlayerSelector => "target",
			other => other.name(),
		}
	}
}

impl fmt::Display for ArgumentKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// One declared parameter of an overload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArgumentSpec {
	/// Parameter name, used in diagnostics and usage lines.
	pub name: String,
	/// Semantic type.
	pub kind: ArgumentKind,
	/// Whether the parameter may be omitted from the tail of the input.
	pub optional: bool,
}

impl ArgumentSpec {
	/// Creates a required parameter.
	pub fn new(name: impl Into<String>, kind: ArgumentKind) -> Self {
		Self {
			name: name.into(),
			kind,
			optional: false,
		}
	}

	/// Marks this parameter optional.
	pub fn optional(mut self) -> Self {
		self.optional = true;
		self
	}

	/// Name of the referenced soft enum, for `soft-enum` parameters.
	pub fn enum_ref(&self) -> Option<&str> {
		self.kind.enum_ref()
	}

	/// Renders `<name: kind>` or `[name: kind]`.
	pub fn usage(&self) -> String {
		let label = self.kind.usage_label();
		if self.optional {
			format!("[{}: {label}]", self.name)
		} else {
			format!("<{}: {label}>", self.name)
		}
	}

	/// `string` parameter.
	pub fn string(name: impl Into<String>) -> Self {
		Self::new(name, ArgumentKind::String)
	}

	/// `int` parameter.
	pub fn int(name: impl Into<String>) -> Self {
		Self::new(name, ArgumentKind::Int)
	}

	/// `float` parameter.
	pub fn float(name: impl Into<String>) -> Self {
		Self::new(name, ArgumentKind::Float)
	}

	/// `bool` parameter.
	pub fn bool(name: impl Into<String>) -> Self {
		Self::new(name, ArgumentKind::Bool)
	}

	/// `text` parameter.
	pub fn text(name: impl Into<String>) -> Self {
		Self::new(name, ArgumentKind::Text)
	}

	/// `message` parameter.
	pub fn message(name: impl Into<String>) -> Self {
		Self::new(name, ArgumentKind::Message)
	}

	/// `soft-enum` parameter checked against `enum_name`.
	pub fn soft_enum(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
		Self::new(name, ArgumentKind::SoftEnum(enum_name.into()))
	}

	/// `position` parameter.
	pub fn position(name: impl Into<String>) -> Self {
		Self::new(name, ArgumentKind::Position)
	}

	/// `selector` parameter.
	pub fn selector(name: impl Into<String>) -> Self {
		Self::new(name, ArgumentKind::Selector)
	}

	/// `player-selector` parameter.
	pub fn player_selector(name: impl Into<String>) -> Self {
		Self::new(name, ArgumentKind::PlayerSelector)
	}

	/// `block` parameter.
	pub fn block(name: impl Into<String>) -> Self {
		Self::new(name, ArgumentKind::Block)
	}

	/// `json` parameter.
	pub fn json(name: impl Into<String>) -> Self {
		Self::new(name, ArgumentKind::Json)
	}
}
