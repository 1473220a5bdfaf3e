//! Commands every console host provides.

use stone_command::{ArgumentSpec, CommandContext, CommandDefinition, Dispatcher, HandlerError, HandlerResult, RegistryError, ResolvedArgs};
use stone_invocation::Invocation;
use stone_primitives::PermissionLevel;

/// Registers the builtin commands on `dispatcher`.
pub fn register(dispatcher: &Dispatcher) -> Result<(), RegistryError> {
	dispatcher.register(
		"test",
		CommandDefinition::new("test command")
			.overload([ArgumentSpec::string("str")], |_, args| Ok(args.str(0).map(|s| format!("str: {s}"))))
			.overload([ArgumentSpec::player_selector("str"), ArgumentSpec::message("boom")], test_players),
	)?;
	dispatcher.register(
		"help",
		CommandDefinition::new("list commands or show the usage of one")
			.overload([ArgumentSpec::string("command").optional()], help),
	)?;
	dispatcher.register(
		"say",
		CommandDefinition::new("broadcast a message").overload([ArgumentSpec::message("message")], |ctx, args| {
			let message = args.str(0).unwrap_or_default();
			tracing::info!(origin = %ctx.origin().name, message, "broadcast");
			Ok(Some(format!("[{}] {message}", ctx.origin().name)))
		}),
	)?;
	dispatcher.register(
		"locate",
		CommandDefinition::new("show where targets are").overload([ArgumentSpec::selector("targets")], |_, args| {
			let lines: Vec<String> = args.actors(0).unwrap_or_default().iter().map(|a| format!("{} ({}) at {}", a.name, a.id, a.pos)).collect();
			Ok(Some(lines.join("\n")))
		}),
	)?;
	dispatcher.register(
		"setblock",
		CommandDefinition::new("place a block")
			.permission(PermissionLevel::GAME_MASTERS)
			.overload([ArgumentSpec::position("pos"), ArgumentSpec::block("block")], |_, args| {
				let pos = args.position(0).ok_or_else(|| HandlerError::new("missing position"))?;
				let block = args.block(1).ok_or_else(|| HandlerError::new("missing block"))?;
				Ok(Some(format!("placed {block} at {}", pos.block_pos())))
			}),
	)?;
	dispatcher.register(
		"enum",
		CommandDefinition::new("show or replace the values of a soft enum")
			.permission(PermissionLevel::ADMIN)
			.overload([ArgumentSpec::string("name")], show_enum)
			.overload([ArgumentSpec::string("name"), ArgumentSpec::message("values")], update_enum),
	)?;
	dispatcher.register(
		"sudo",
		CommandDefinition::new("run a command as each target")
			.permission(PermissionLevel::GAME_MASTERS)
			.overload([ArgumentSpec::player_selector("targets"), ArgumentSpec::message("command")], sudo),
	)?;
	Ok(())
}

fn test_players(_: &CommandContext<'_>, args: &ResolvedArgs) -> HandlerResult {
	let names: Vec<&str> = args.actors(0).unwrap_or_default().iter().map(|a| a.name.as_str()).collect();
	Ok(Some(format!("{}: {}", names.join(", "), args.str(1).unwrap_or_default())))
}

fn help(ctx: &CommandContext<'_>, args: &ResolvedArgs) -> HandlerResult {
	let registry = ctx.registry();
	if let Some(name) = args.str(0) {
		let name = name.strip_prefix('/').unwrap_or(name);
		let definition = registry.lookup(name).ok_or_else(|| HandlerError::new(format!("unknown command: {name}")))?;
		let mut lines = vec![format!("{name}: {}", definition.description)];
		lines.extend(definition.usage(name));
		return Ok(Some(lines.join("\n")));
	}

	let level = ctx.origin().permission_level;
	let lines: Vec<String> = registry
		.names()
		.into_iter()
		.filter_map(|name| {
			let definition = registry.lookup(&name)?;
			level.satisfies(definition.permission_level).then(|| format!("/{name} - {}", definition.description))
		})
		.collect();
	Ok(Some(lines.join("\n")))
}

fn show_enum(ctx: &CommandContext<'_>, args: &ResolvedArgs) -> HandlerResult {
	let name = args.str(0).unwrap_or_default();
	let values = ctx.soft_enums().get(name).ok_or_else(|| HandlerError::new(format!("unknown soft enum: {name}")))?;
	Ok(Some(format!("{name}: {}", values.values().collect::<Vec<_>>().join(", "))))
}

fn update_enum(ctx: &CommandContext<'_>, args: &ResolvedArgs) -> HandlerResult {
	let name = args.str(0).unwrap_or_default();
	let values: Vec<&str> = args.str(1).unwrap_or_default().split_whitespace().collect();
	ctx.soft_enums().update(name, values.iter().copied()).map_err(|e| HandlerError::new(e.to_string()))?;
	Ok(Some(format!("updated {name} ({} values)", values.len())))
}

fn sudo(ctx: &CommandContext<'_>, args: &ResolvedArgs) -> HandlerResult {
	let line = args.str(1).unwrap_or_default();
	let mut outputs = Vec::new();
	for target in args.actors(0).unwrap_or_default() {
		if let Some(out) = ctx.dispatch(&Invocation::actor(target.id, line))? {
			outputs.push(out);
		}
	}
	Ok((!outputs.is_empty()).then(|| outputs.join("\n")))
}
