use pretty_assertions::assert_eq;
use rstest::rstest;
use stone_primitives::PermissionLevel;

use super::*;
use crate::kind::ArgumentSpec;

fn noop_definition(description: &str) -> CommandDefinition {
	CommandDefinition::new(description).overload([ArgumentSpec::string("str")], |_, _| Ok(None))
}

#[test]
fn duplicate_registration_keeps_first() {
	let registry = CommandRegistry::new();
	registry.register("test", noop_definition("first")).unwrap();

	let err = registry.register("test", noop_definition("second")).unwrap_err();
	assert_eq!(err, RegistryError::DuplicateCommand("test".into()));
	assert_eq!(registry.lookup("test").unwrap().description, "first");
	assert_eq!(registry.len(), 1);
}

#[test]
fn names_are_sorted() {
	let registry = CommandRegistry::new();
	for name in ["tp", "give", "say"] {
		registry.register(name, noop_definition(name)).unwrap();
	}
	assert_eq!(registry.names(), vec!["give", "say", "tp"]);
}

#[test]
fn lookup_is_exact() {
	let registry = CommandRegistry::new();
	registry.register("say", noop_definition("say")).unwrap();
	assert!(registry.lookup("say").is_some());
	assert!(registry.lookup("SAY").is_none());
	assert!(registry.lookup("sa").is_none());
}

#[test]
fn suggests_close_names_only() {
	let registry = CommandRegistry::new();
	registry.register("teleport", noop_definition("tp")).unwrap();
	registry.register("give", noop_definition("give")).unwrap();
	assert_eq!(registry.suggest("telport").as_deref(), Some("teleport"));
	assert_eq!(registry.suggest("gvie").as_deref(), Some("give"));
	assert_eq!(registry.suggest("weather"), None);
}

#[test]
fn keeps_permission_level() {
	let registry = CommandRegistry::new();
	registry.register("op", noop_definition("op").permission(PermissionLevel::HOST)).unwrap();
	assert_eq!(registry.lookup("op").unwrap().permission_level, PermissionLevel::HOST);
}

#[rstest]
#[case::empty_name("", noop_definition("x"), "name must be non-empty")]
#[case::slash_name("/x", noop_definition("x"), "leading slash")]
#[case::spaced_name("a b", noop_definition("x"), "whitespace")]
#[case::no_overloads("x", CommandDefinition::new("x"), "at least one overload")]
#[case::required_after_optional(
	"x",
	CommandDefinition::new("x").overload([ArgumentSpec::int("a").optional(), ArgumentSpec::int("b")], |_, _| Ok(None)),
	"required parameter 'b' follows optional parameter 'a'"
)]
#[case::message_not_last(
	"x",
	CommandDefinition::new("x").overload([ArgumentSpec::message("m"), ArgumentSpec::int("n")], |_, _| Ok(None)),
	"message parameter 'm' must be last"
)]
#[case::empty_enum_ref(
	"x",
	CommandDefinition::new("x").overload([ArgumentSpec::soft_enum("c", "")], |_, _| Ok(None)),
	"has no enum name"
)]
fn rejects_invalid_definitions(#[case] name: &str, #[case] definition: CommandDefinition, #[case] expected: &str) {
	let registry = CommandRegistry::new();
	match registry.register(name, definition) {
		Err(RegistryError::InvalidDefinition { reason, .. }) => {
			assert!(reason.contains(expected), "reason: {reason}");
		}
		other => panic!("expected InvalidDefinition, got {other:?}"),
	}
	assert!(registry.is_empty());
}

#[test]
fn accepts_optional_tail_and_trailing_message() {
	let registry = CommandRegistry::new();
	let def = CommandDefinition::new("tell")
		.overload([ArgumentSpec::player_selector("target"), ArgumentSpec::message("msg").optional()], |_, _| Ok(None));
	registry.register("tell", def).unwrap();
}

#[test]
fn concurrent_registration_keeps_every_command() {
	let registry = CommandRegistry::new();
	std::thread::scope(|s| {
		for t in 0..4 {
			let registry = &registry;
			s.spawn(move || {
				for i in 0..25 {
					registry.register(format!("cmd{t}_{i}"), noop_definition("x")).unwrap();
				}
			});
		}
	});
	assert_eq!(registry.len(), 100);
}
