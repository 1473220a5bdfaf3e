use pretty_assertions::assert_eq;
use rstest::rstest;
use stone_invocation::TokenizeError;
use stone_primitives::{Actor, ActorId, PermissionLevel, Vec3};

use super::*;
use crate::error::{HandlerError, ResolutionError};
use crate::kind::ArgumentSpec;
use crate::world::StaticWorld;

fn dispatcher() -> Dispatcher {
	let world = StaticWorld::new(vec![
		Actor::player(1, "Steve", Vec3::new(0.0, 64.0, 0.0)),
		Actor::player(2, "Alex", Vec3::new(4.0, 64.0, 0.0)).with_permission(PermissionLevel::ADMIN),
	]);
	let dispatcher = Dispatcher::new(Arc::new(world));

	dispatcher
		.register(
			"test",
			CommandDefinition::new("echo test")
				.overload([ArgumentSpec::string("str")], |_, args| Ok(args.str(0).map(|s| format!("string:{s}"))))
				.overload([ArgumentSpec::player_selector("players"), ArgumentSpec::message("boom")], |_, args| {
					let names: Vec<&str> = args.actors(0).unwrap_or_default().iter().map(|a| a.name.as_str()).collect();
					Ok(Some(format!("{} <- {}", names.join(","), args.str(1).unwrap_or_default())))
				}),
		)
		.unwrap();
	dispatcher
		.register(
			"whoami",
			CommandDefinition::new("print origin").overload([], |ctx, _| Ok(Some(format!("{}@{}", ctx.origin().name, ctx.command())))),
		)
		.unwrap();
	dispatcher
		.register(
			"op",
			CommandDefinition::new("admin only")
				.permission(PermissionLevel::ADMIN)
				.overload([ArgumentSpec::int("n")], |_, args| Ok(args.int(0).map(|n| n.to_string()))),
		)
		.unwrap();
	dispatcher
		.register("run", CommandDefinition::new("nested").overload([ArgumentSpec::message("line")], |ctx, args| {
			Ok(ctx.invoke(args.str(0).unwrap_or_default())?)
		}))
		.unwrap();
	dispatcher
		.register("fail", CommandDefinition::new("always fails").overload([], |_, _| Err(HandlerError::new("boom"))))
		.unwrap();
	dispatcher
}

#[test]
fn handler_output_is_returned_unmodified() {
	let d = dispatcher();
	let console = CommandOrigin::console("Server");
	assert_eq!(d.execute("/test hello", &console).unwrap(), Some("string:hello".into()));
	assert_eq!(d.execute("test @a hello there friend", &console).unwrap(), Some("Steve,Alex <- hello there friend".into()));
}

#[test]
fn quoted_token_reaches_string_overload() {
	let d = dispatcher();
	let out = d.execute(r#"/test "hello world""#, &CommandOrigin::console("Server")).unwrap();
	assert_eq!(out, Some("string:hello world".into()));
}

#[test]
fn context_exposes_origin_and_command() {
	let d = dispatcher();
	assert_eq!(d.execute("whoami", &CommandOrigin::console("Server")).unwrap(), Some("Server@whoami".into()));
}

#[test]
fn tokenize_errors_surface() {
	let d = dispatcher();
	let console = CommandOrigin::console("Server");
	assert_eq!(d.execute("   ", &console), Err(DispatchError::Tokenize(TokenizeError::Empty)));
	assert_eq!(d.execute("/", &console), Err(DispatchError::Tokenize(TokenizeError::Empty)));
}

#[rstest]
#[case("test @a I <3 [brackets", "Steve,Alex <- I <3 [brackets")]
#[case("test @a smile :{", "Steve,Alex <- smile :{")]
#[case(r#"test @a say "hi"#, r#"Steve,Alex <- say "hi"#)]
#[case(r#"test @a {"a": 1} and [more"#, r#"Steve,Alex <- {"a": 1} and [more"#)]
fn unbalanced_free_text_reaches_message(#[case] line: &str, #[case] expected: &str) {
	let d = dispatcher();
	assert_eq!(d.execute(line, &CommandOrigin::console("Server")).unwrap(), Some(expected.to_string()));
}

#[test]
fn json_string_scalar_needs_escaped_quotes() {
	let d = dispatcher();
	d.register(
		"data",
		CommandDefinition::new("echo json").overload([ArgumentSpec::json("value")], |_, args| Ok(args.json(0).map(|v| format!("{v:?}")))),
	)
	.unwrap();
	let console = CommandOrigin::console("Server");

	assert_eq!(d.execute(r#"data "\"hi\"""#, &console).unwrap(), Some(format!("{:?}", serde_json::json!("hi"))));
	assert_eq!(d.execute(r#"data {"a": "b c"}"#, &console).unwrap(), Some(format!("{:?}", serde_json::json!({"a": "b c"}))));
	assert!(matches!(d.execute(r#"data "hi""#, &console), Err(DispatchError::Resolution(ResolutionError::NoMatchingOverload { .. }))));
}

#[test]
fn unterminated_quote_is_literal_text() {
	let d = dispatcher();
	assert_eq!(d.execute(r#"/test "open"#, &CommandOrigin::console("Server")).unwrap(), Some(r#"string:"open"#.into()));
}

#[test]
fn handler_errors_are_wrapped() {
	let d = dispatcher();
	let err = d.execute("fail", &CommandOrigin::console("Server")).unwrap_err();
	assert_eq!(err, DispatchError::Handler {
		command: "fail".into(),
		source: HandlerError::new("boom"),
	});
	assert_eq!(err.to_string(), "command 'fail' failed: boom");
}

#[test]
fn privileged_skips_only_the_permission_gate() {
	let d = dispatcher();
	let member = CommandOrigin::new("member", PermissionLevel::ANY);

	assert!(matches!(
		d.execute("op 1", &member),
		Err(DispatchError::Resolution(ResolutionError::InsufficientPermission { .. }))
	));
	assert_eq!(d.execute_privileged("op 1", &member).unwrap(), Some("1".into()));
	assert!(matches!(
		d.execute_privileged("op x", &member),
		Err(DispatchError::Resolution(ResolutionError::NoMatchingOverload { .. }))
	));
}

#[test]
fn invocation_routes() {
	let d = dispatcher();

	assert_eq!(d.invoke(&Invocation::console("Rcon", "whoami"), None).unwrap(), Some("Rcon@whoami".into()));
	assert_eq!(d.invoke(&Invocation::actor(ActorId(1), "whoami"), None).unwrap(), Some("Steve@whoami".into()));

	// Steve has no permission level; Alex is an admin.
	assert!(d.invoke(&Invocation::actor(ActorId(1), "op 3"), None).is_err());
	assert_eq!(d.invoke(&Invocation::actor(ActorId(2), "op 3"), None).unwrap(), Some("3".into()));
	assert_eq!(d.invoke(&Invocation::privileged(ActorId(1), "op 3"), None).unwrap(), Some("3".into()));

	assert_eq!(d.invoke(&Invocation::actor(ActorId(99), "whoami"), None), Err(DispatchError::UnknownActor(ActorId(99))));
}

#[test]
fn current_invocation_needs_an_origin() {
	let d = dispatcher();
	assert_eq!(d.invoke(&Invocation::current("whoami"), None), Err(DispatchError::NoCurrentOrigin));

	let origin = CommandOrigin::console("Script");
	assert_eq!(d.invoke(&Invocation::current("whoami"), Some(&origin)).unwrap(), Some("Script@whoami".into()));
}

#[test]
fn handlers_can_run_nested_commands() {
	let d = dispatcher();
	let out = d.execute("run whoami", &CommandOrigin::console("Server")).unwrap();
	assert_eq!(out, Some("Server@whoami".into()));
}

#[test]
fn nested_commands_keep_the_permission_gate() {
	let d = dispatcher();
	let member = CommandOrigin::new("member", PermissionLevel::ANY);
	let err = d.execute("run op 1", &member).unwrap_err();
	let DispatchError::Handler { source, .. } = &err else {
		panic!("unexpected error: {err}");
	};
	assert!(source.0.contains("insufficient permission"), "{source}");
}

#[test]
fn self_recursion_hits_the_depth_limit() {
	let d = dispatcher();
	d.register("loop", CommandDefinition::new("recurses").overload([], |ctx, _| Ok(ctx.invoke("loop")?))).unwrap();

	let err = d.execute("loop", &CommandOrigin::console("Server")).unwrap_err();
	assert!(err.to_string().contains(&format!("nesting exceeded {MAX_DEPTH} levels")), "{err}");
}

#[test]
fn handlers_can_route_invocations() {
	let d = dispatcher();
	d.register(
		"as",
		CommandDefinition::new("run as an actor").overload([ArgumentSpec::int("id"), ArgumentSpec::message("line")], |ctx, args| {
			let id = ActorId(u64::try_from(args.int(0).unwrap_or_default()).map_err(|_| HandlerError::new("negative id"))?);
			Ok(ctx.dispatch(&Invocation::actor(id, args.str(1).unwrap_or_default()))?)
		}),
	)
	.unwrap();
	d.register("again", CommandDefinition::new("rerun as current").overload([], |ctx, _| Ok(ctx.dispatch(&Invocation::current("whoami"))?)))
		.unwrap();

	let console = CommandOrigin::console("Server");
	assert_eq!(d.execute("as 2 whoami", &console).unwrap(), Some("Alex@whoami".into()));
	assert_eq!(d.execute("again", &console).unwrap(), Some("Server@whoami".into()));
	assert!(d.execute("as 9 whoami", &console).is_err());
}
