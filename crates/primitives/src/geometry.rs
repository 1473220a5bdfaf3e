use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in world space.
///
/// Serialized as a `[x, y, z]` array so config files can write positions
/// the same way the host reports them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vec3 {
	/// East/west axis.
	pub x: f64,
	/// Vertical axis.
	pub y: f64,
	/// North/south axis.
	pub z: f64,
}

impl Vec3 {
	/// The world origin.
	pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

	/// Creates a new point.
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	/// Squared euclidean distance to `other`.
	pub fn distance_squared(self, other: Self) -> f64 {
		let dx = self.x - other.x;
		let dy = self.y - other.y;
		let dz = self.z - other.z;
		dx * dx + dy * dy + dz * dz
	}

	/// Euclidean distance to `other`.
	pub fn distance(self, other: Self) -> f64 {
		self.distance_squared(other).sqrt()
	}

	/// The block containing this point.
	pub fn block_pos(self) -> BlockPos {
		BlockPos::new(floor_to_i32(self.x), floor_to_i32(self.y), floor_to_i32(self.z))
	}
}

impl From<[f64; 3]> for Vec3 {
	fn from([x, y, z]: [f64; 3]) -> Self {
		Self::new(x, y, z)
	}
}

impl From<Vec3> for [f64; 3] {
	fn from(v: Vec3) -> Self {
		[v.x, v.y, v.z]
	}
}

impl fmt::Display for Vec3 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} {}", self.x, self.y, self.z)
	}
}

/// Integer block coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct BlockPos {
	/// East/west axis.
	pub x: i32,
	/// Vertical axis.
	pub y: i32,
	/// North/south axis.
	pub z: i32,
}

impl BlockPos {
	/// Creates a new block position.
	pub const fn new(x: i32, y: i32, z: i32) -> Self {
		Self { x, y, z }
	}
}

impl From<[i32; 3]> for BlockPos {
	fn from([x, y, z]: [i32; 3]) -> Self {
		Self::new(x, y, z)
	}
}

impl From<BlockPos> for [i32; 3] {
	fn from(p: BlockPos) -> Self {
		[p.x, p.y, p.z]
	}
}

impl fmt::Display for BlockPos {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} {}", self.x, self.y, self.z)
	}
}

// Saturating: `as` clamps out-of-range floats and maps NaN to 0.
fn floor_to_i32(v: f64) -> i32 {
	v.floor() as i32
}

#[cfg(test)]
mod tests;
