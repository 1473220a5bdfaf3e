//! Target selectors: `@a`, `@e`, `@p`, `@r`, `@s` with `[key=value,...]`
//! filters, or a bare player name.
//!
//! Supported filters: `type`, `name` (both negatable with `!` and
//! repeatable), `r`, `rm` (distance from the origin) and `c` (count;
//! negative counts take the farthest targets).

use stone_primitives::{Actor, Vec3};

use super::CoerceCtx;
use super::list::{split_pairs, unquote};

#[derive(Debug, Clone, PartialEq)]
enum Target {
	AllPlayers,
	AllEntities,
	Nearest,
	Random,
	Origin,
	Name(String),
}

#[derive(Debug, Clone, PartialEq)]
struct Match {
	negated: bool,
	value: String,
}

impl Match {
	fn parse(raw: &str) -> Self {
		match raw.strip_prefix('!') {
			Some(rest) => Self {
				negated: true,
				value: unquote(rest.trim()),
			},
			None => Self {
				negated: false,
				value: unquote(raw),
			},
		}
	}

	fn check(&self, hit: bool) -> bool {
		hit != self.negated
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Filters {
	types: Vec<Match>,
	names: Vec<Match>,
	radius: Option<f64>,
	min_radius: Option<f64>,
	count: Option<i32>,
}

impl Filters {
	fn needs_position(&self) -> bool {
		self.radius.is_some() || self.min_radius.is_some()
	}

	fn matches(&self, actor: &Actor, origin: Option<Vec3>) -> bool {
		if !self.types.iter().all(|m| m.check(actor.is_type(&m.value))) {
			return false;
		}
		if !self.names.iter().all(|m| m.check(actor.name.eq_ignore_ascii_case(&m.value))) {
			return false;
		}
		let Some(origin) = origin else { return true };
		let dist = actor.pos.distance(origin);
		self.radius.is_none_or(|r| dist <= r) && self.min_radius.is_none_or(|rm| dist >= rm)
	}
}

#[derive(Debug, Clone, PartialEq)]
struct Selector {
	target: Target,
	filters: Filters,
}

fn parse(token: &str) -> Result<Selector, String> {
	let Some(body) = token.strip_prefix('@') else {
		if token.is_empty() {
			return Err("empty target".into());
		}
		return Ok(Selector {
			target: Target::Name(token.to_string()),
			filters: Filters::default(),
		});
	};

	let (head, args) = match body.split_once('[') {
		Some((head, rest)) => {
			let inner = rest.strip_suffix(']').ok_or_else(|| format!("unterminated selector arguments in '{token}'"))?;
			(head, Some(inner))
		}
		None => (body, None),
	};

	let target = match head {
		"a" => Target::AllPlayers,
		"e" => Target::AllEntities,
		"p" => Target::Nearest,
		"r" => Target::Random,
		"s" => Target::Origin,
		other => return Err(format!("unknown selector '@{other}'")),
	};

	let mut filters = Filters::default();
	for (key, value) in split_pairs(args.unwrap_or_default())? {
		match key {
			"type" => filters.types.push(Match::parse(value)),
			"name" => filters.names.push(Match::parse(value)),
			"r" => filters.radius = Some(parse_distance(key, value)?),
			"rm" => filters.min_radius = Some(parse_distance(key, value)?),
			"c" => {
				let count = value.parse::<i32>().ok().filter(|c| *c != 0).ok_or_else(|| format!("invalid count: '{value}'"))?;
				filters.count = Some(count);
			}
			other => return Err(format!("unknown selector argument '{other}'")),
		}
	}

	Ok(Selector { target, filters })
}

fn parse_distance(key: &str, value: &str) -> Result<f64, String> {
	value
		.parse::<f64>()
		.ok()
		.filter(|v| v.is_finite() && *v >= 0.0)
		.ok_or_else(|| format!("invalid distance for '{key}': '{value}'"))
}

/// Resolves `token` to the matching actors of the context's world.
pub(super) fn select(token: &str, ctx: &CoerceCtx<'_>, players_only: bool) -> Result<Vec<Actor>, String> {
	let Selector { target, filters } = parse(token)?;
	let origin = ctx.origin.world_pos;

	if origin.is_none() && (filters.needs_position() || target == Target::Nearest) {
		return Err(format!("selector '{token}' needs an origin with a position"));
	}

	let mut candidates: Vec<Actor> = match &target {
		Target::Origin => {
			let actor = ctx.origin.actor.clone().ok_or_else(|| "@s needs an origin that is an actor".to_string())?;
			vec![actor]
		}
		Target::Name(name) => ctx.world.actors().into_iter().filter(|a| a.is_player() && a.name.eq_ignore_ascii_case(name)).collect(),
		Target::AllEntities => ctx.world.actors(),
		Target::Random if !filters.types.is_empty() => ctx.world.actors(),
		Target::AllPlayers | Target::Nearest | Target::Random => ctx.world.actors().into_iter().filter(Actor::is_player).collect(),
	};

	candidates.retain(|a| filters.matches(a, origin));
	if players_only {
		candidates.retain(Actor::is_player);
	}

	let count = filters.count.or(match target {
		Target::Nearest | Target::Random => Some(1),
		_ => None,
	});

	if let Some(count) = count {
		let limit = count.unsigned_abs() as usize;
		if target == Target::Random {
			candidates = pick_random(candidates, limit, ctx);
		} else {
			if let Some(origin) = origin {
				let by_distance = |a: &Actor, b: &Actor| a.pos.distance_squared(origin).total_cmp(&b.pos.distance_squared(origin));
				if count > 0 {
					candidates.sort_by(by_distance);
				} else {
					candidates.sort_by(|a, b| by_distance(b, a));
				}
			}
			candidates.truncate(limit);
		}
	}

	if candidates.is_empty() {
		let what = if players_only { "players" } else { "targets" };
		return Err(format!("no {what} matched selector '{token}'"));
	}
	Ok(candidates)
}

fn pick_random(mut pool: Vec<Actor>, limit: usize, ctx: &CoerceCtx<'_>) -> Vec<Actor> {
	let mut picked = Vec::with_capacity(limit.min(pool.len()));
	while picked.len() < limit && !pool.is_empty() {
		let idx = ctx.world.random_index(pool.len()) % pool.len();
		picked.push(pool.swap_remove(idx));
	}
	picked
}
