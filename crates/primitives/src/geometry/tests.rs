use proptest::prelude::*;

use super::{BlockPos, Vec3};

#[test]
fn block_pos_floors_negative_coordinates() {
	let pos = Vec3::new(-0.5, 64.9, 10.0);
	assert_eq!(pos.block_pos(), BlockPos::new(-1, 64, 10));
}

#[test]
fn distance_is_euclidean() {
	let a = Vec3::new(0.0, 0.0, 0.0);
	let b = Vec3::new(3.0, 4.0, 0.0);
	assert_eq!(a.distance(b), 5.0);
	assert_eq!(a.distance_squared(b), 25.0);
}

#[test]
fn vec3_deserializes_from_array() {
	#[derive(serde::Deserialize)]
	struct Holder {
		pos: Vec3,
	}

	let holder: Holder = toml::from_str("pos = [1.5, 64.0, -3.0]").unwrap();
	assert_eq!(holder.pos, Vec3::new(1.5, 64.0, -3.0));
}

proptest! {
	#[test]
	fn block_pos_contains_point(x in -1.0e6f64..1.0e6, y in -512.0f64..512.0, z in -1.0e6f64..1.0e6) {
		let p = Vec3::new(x, y, z);
		let b = p.block_pos();
		prop_assert!(f64::from(b.x) <= x && x < f64::from(b.x) + 1.0);
		prop_assert!(f64::from(b.y) <= y && y < f64::from(b.y) + 1.0);
		prop_assert!(f64::from(b.z) <= z && z < f64::from(b.z) + 1.0);
	}
}
