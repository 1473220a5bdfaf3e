use std::sync::atomic::{AtomicBool, Ordering};

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn register_deduplicates_in_order() {
	let enums = SoftEnumRegistry::new();
	enums.register("colors", ["red", "green", "red", "blue"], true);
	let colors = enums.get("colors").unwrap();
	assert_eq!(colors.values().collect::<Vec<_>>(), vec!["red", "green", "blue"]);
}

#[test]
fn case_insensitive_find_returns_registered_spelling() {
	let enum_ = SoftEnum::new(["Red", "Green"], false);
	assert_eq!(enum_.find("rEd"), Some("Red"));
	assert_eq!(enum_.find("blue"), None);

	let strict = SoftEnum::new(["Red"], true);
	assert_eq!(strict.find("Red"), Some("Red"));
	assert_eq!(strict.find("red"), None);
}

#[test]
fn update_unknown_enum_fails() {
	let enums = SoftEnumRegistry::new();
	assert_eq!(enums.update("missing", ["a"]), Err(SoftEnumError::UnknownEnum("missing".into())));
	assert!(enums.get("missing").is_none());
}

#[test]
fn update_keeps_case_flag() {
	let enums = SoftEnumRegistry::new();
	enums.register("maps", ["Lobby"], false);
	enums.update("maps", ["Arena"]).unwrap();
	let maps = enums.get("maps").unwrap();
	assert!(!maps.case_sensitive());
	assert_eq!(maps.find("arena"), Some("Arena"));
	assert_eq!(maps.find("lobby"), None);
}

#[test]
fn register_replaces_existing() {
	let enums = SoftEnumRegistry::new();
	enums.register("maps", ["Lobby"], false);
	enums.register("maps", ["Arena"], true);
	let maps = enums.get("maps").unwrap();
	assert!(maps.case_sensitive());
	assert_eq!(maps.values().collect::<Vec<_>>(), vec!["Arena"]);
	assert_eq!(enums.names(), vec!["maps"]);
}

#[test]
fn old_snapshot_survives_update() {
	let enums = SoftEnumRegistry::new();
	enums.register("colors", ["red"], true);
	let before = enums.snapshot();
	enums.update("colors", ["blue"]).unwrap();
	assert_eq!(before.get("colors").unwrap().values().collect::<Vec<_>>(), vec!["red"]);
	assert_eq!(enums.snapshot().get("colors").unwrap().values().collect::<Vec<_>>(), vec!["blue"]);
}

#[test]
fn readers_never_observe_torn_sets() {
	let old: Vec<String> = (0..64).map(|i| format!("old{i}")).collect();
	let new: Vec<String> = (0..64).map(|i| format!("new{i}")).collect();
	let enums = SoftEnumRegistry::new();
	enums.register("colors", old.clone(), true);
	let done = AtomicBool::new(false);

	std::thread::scope(|s| {
		s.spawn(|| {
			for i in 0..500 {
				let values = if i % 2 == 0 { &new } else { &old };
				enums.update("colors", values.iter().cloned()).unwrap();
			}
			done.store(true, Ordering::Release);
		});
		for _ in 0..2 {
			s.spawn(|| {
				while !done.load(Ordering::Acquire) {
					let colors = enums.get("colors").unwrap();
					let all_old = colors.values().all(|v| v.starts_with("old"));
					let all_new = colors.values().all(|v| v.starts_with("new"));
					assert!(all_old || all_new, "observed a mixed set");
					assert_eq!(colors.len(), 64);
				}
			});
		}
	});
}
