use std::collections::BTreeMap;

use super::list::{split_pairs, unquote};
use crate::value::BlockState;

const DEFAULT_NAMESPACE: &str = "minecraft";

/// Parses `[namespace:]name` with an optional `[key=value,...]` state list.
///
/// State keys and values may be quoted, as in `wool["color"="red"]`.
pub fn parse_block(token: &str) -> Result<BlockState, String> {
	let (id, states) = match token.split_once('[') {
		Some((id, rest)) => {
			let inner = rest.strip_suffix(']').ok_or_else(|| format!("unterminated block states in '{token}'"))?;
			(id, Some(inner))
		}
		None => (token, None),
	};

	let name = block_id(id)?;
	let mut map = BTreeMap::new();
	if let Some(inner) = states {
		for (key, value) in split_pairs(inner)? {
			let key = unquote(key);
			if map.insert(key.clone(), unquote(value)).is_some() {
				return Err(format!("duplicate block state '{key}'"));
			}
		}
	}

	Ok(BlockState { name, states: map })
}

fn block_id(id: &str) -> Result<String, String> {
	let (namespace, path) = id.split_once(':').unwrap_or((DEFAULT_NAMESPACE, id));
	let valid = |s: &str, extra: &[char]| !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.') || extra.contains(&c));
	if !valid(namespace, &[]) || !valid(path, &['/']) {
		return Err(format!("invalid block id: '{id}'"));
	}
	Ok(format!("{namespace}:{path}"))
}
