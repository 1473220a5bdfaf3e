use stone_primitives::Vec3;

/// One coordinate of a `position` argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinate {
	/// A world coordinate.
	Absolute(f64),
	/// An offset from the origin (`~` or `~N`).
	Relative(f64),
}

impl Coordinate {
	pub fn parse(token: &str) -> Result<Self, String> {
		if let Some(rest) = token.strip_prefix('~') {
			if rest.is_empty() {
				return Ok(Self::Relative(0.0));
			}
			return finite(rest).map(Self::Relative).ok_or_else(|| format!("invalid relative coordinate: '{token}'"));
		}
		finite(token).map(Self::Absolute).ok_or_else(|| format!("invalid coordinate: '{token}'"))
	}

	pub fn is_relative(self) -> bool {
		matches!(self, Self::Relative(_))
	}

	pub fn resolve(self, base: f64) -> f64 {
		match self {
			Self::Absolute(v) => v,
			Self::Relative(delta) => base + delta,
		}
	}
}

/// Parses three coordinate tokens into an absolute position.
///
/// Relative coordinates are offsets from `origin`; with no origin position
/// they are rejected instead of guessing a base.
pub fn parse_position(tokens: &[&str], origin: Option<Vec3>) -> Result<Vec3, String> {
	let [x, y, z] = tokens else {
		return Err(format!("expected 3 coordinates, found {}", tokens.len()));
	};
	let (x, y, z) = (Coordinate::parse(x)?, Coordinate::parse(y)?, Coordinate::parse(z)?);

	let base = match origin {
		Some(pos) => pos,
		None if x.is_relative() || y.is_relative() || z.is_relative() => {
			return Err("relative coordinates need an origin with a position".into());
		}
		None => Vec3::ZERO,
	};
	Ok(Vec3::new(x.resolve(base.x), y.resolve(base.y), z.resolve(base.z)))
}

fn finite(s: &str) -> Option<f64> {
	s.parse::<f64>().ok().filter(|v| v.is_finite())
}
