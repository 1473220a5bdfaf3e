//! Splits command lines into argument tokens.
//!
//! Rules:
//!
//! * Tokens are separated by whitespace.
//! * A `"` at the start of a token opens a quoted span; the span is one token
//!   with the quotes removed and `\"` / `\\` unescaped.
//! * `[...]` and `{...}` spans are kept intact, whitespace and quotes
//!   included, so selector filters and JSON reach their parsers untouched.
//! * A quote or bracket that is never closed does not group anything: from
//!   the token it opened in, the rest of the line is split on whitespace with
//!   every character kept as written. Free text such as `I <3 [brackets`
//!   therefore still reaches a `message` parameter.

use std::str::CharIndices;

use thiserror::Error;

/// Errors produced while tokenizing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
	/// The line had no command name.
	#[error("empty command line")]
	Empty,
}

/// A command line split into its name and argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
	/// Command name without the leading slash.
	pub name: String,
	/// Argument tokens after the name.
	pub args: Vec<String>,
}

/// Parses a full command line such as `/give @p diamond 3`.
pub fn parse_command_line(line: &str) -> Result<CommandLine, TokenizeError> {
	let line = line.trim_start();
	let line = line.strip_prefix('/').unwrap_or(line);
	let mut tokens = tokenize(line).into_iter();
	let name = tokens.next().filter(|n| !n.is_empty()).ok_or(TokenizeError::Empty)?;
	Ok(CommandLine { name, args: tokens.collect() })
}

/// Splits `input` into tokens.
pub fn tokenize(input: &str) -> Vec<String> {
	let mut tokens = Vec::new();
	let mut current = String::new();
	let mut started = false;
	let mut token_start = 0;
	let mut depth = 0usize;
	let mut chars = input.char_indices();

	while let Some((pos, ch)) = chars.next() {
		if !started && !ch.is_whitespace() {
			token_start = pos;
		}
		match ch {
			c if c.is_whitespace() && depth == 0 => {
				if started {
					tokens.push(std::mem::take(&mut current));
					started = false;
				}
			}
			'"' if !started && depth == 0 => {
				started = true;
				if !read_quoted(&mut chars, &mut current, false) {
					return split_verbatim(tokens, &input[token_start..]);
				}
			}
			'"' if depth > 0 => {
				current.push(ch);
				if !read_quoted(&mut chars, &mut current, true) {
					return split_verbatim(tokens, &input[token_start..]);
				}
				current.push(ch);
			}
			'[' | '{' => {
				started = true;
				depth += 1;
				current.push(ch);
			}
			']' | '}' => {
				started = true;
				depth = depth.saturating_sub(1);
				current.push(ch);
			}
			_ => {
				started = true;
				current.push(ch);
			}
		}
	}

	if depth > 0 {
		return split_verbatim(tokens, &input[token_start..]);
	}
	if started {
		tokens.push(current);
	}
	tokens
}

fn split_verbatim(mut tokens: Vec<String>, rest: &str) -> Vec<String> {
	tokens.extend(rest.split_whitespace().map(str::to_string));
	tokens
}

/// Consumes a quoted span up to and including the closing quote. Returns
/// `false` if the input ends first.
///
/// With `verbatim`, escapes are copied as written; otherwise they are
/// resolved and the surrounding quotes are dropped.
fn read_quoted(chars: &mut CharIndices<'_>, out: &mut String, verbatim: bool) -> bool {
	while let Some((_, ch)) = chars.next() {
		match ch {
			'"' => return true,
			'\\' => {
				let Some((_, escaped)) = chars.next() else { break };
				if verbatim || !matches!(escaped, '"' | '\\') {
					out.push('\\');
				}
				out.push(escaped);
			}
			_ => out.push(ch),
		}
	}
	false
}
