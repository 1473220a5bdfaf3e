//! `key=value,...` lists shared by selector filters and block states.

/// Splits the inside of a `[...]` list into trimmed `(key, value)` pairs.
///
/// Commas inside double quotes or nested brackets do not split. Empty
/// entries are skipped.
pub(super) fn split_pairs(inner: &str) -> Result<Vec<(&str, &str)>, String> {
	let mut pairs = Vec::new();
	for entry in split_top_level(inner)? {
		let entry = entry.trim();
		if entry.is_empty() {
			continue;
		}
		let (key, value) = entry.split_once('=').ok_or_else(|| format!("expected key=value, found '{entry}'"))?;
		let key = key.trim();
		if key.is_empty() {
			return Err(format!("missing key in '{entry}'"));
		}
		pairs.push((key, value.trim()));
	}
	Ok(pairs)
}

/// Removes surrounding double quotes and resolves `\"` and `\\`.
pub(super) fn unquote(s: &str) -> String {
	let Some(inner) = s.strip_prefix('"').and_then(|s| s.strip_suffix('"')) else {
		return s.to_string();
	};
	let mut out = String::with_capacity(inner.len());
	let mut chars = inner.chars();
	while let Some(ch) = chars.next() {
		if ch == '\\'
			&& let Some(next) = chars.next()
		{
			out.push(next);
		} else {
			out.push(ch);
		}
	}
	out
}

fn split_top_level(inner: &str) -> Result<Vec<&str>, String> {
	let mut parts = Vec::new();
	let mut depth = 0usize;
	let mut in_quote = false;
	let mut escaped = false;
	let mut start = 0;

	for (i, ch) in inner.char_indices() {
		if in_quote {
			match (escaped, ch) {
				(true, _) => escaped = false,
				(false, '\\') => escaped = true,
				(false, '"') => in_quote = false,
				_ => {}
			}
			continue;
		}
		match ch {
			'"' => in_quote = true,
			'[' | '{' => depth += 1,
			']' | '}' => depth = depth.saturating_sub(1),
			',' if depth == 0 => {
				parts.push(&inner[start..i]);
				start = i + 1;
			}
			_ => {}
		}
	}
	if in_quote {
		return Err("unterminated quote".into());
	}
	parts.push(&inner[start..]);
	Ok(parts)
}
