use std::io::{self, BufRead, Write};
use std::sync::Arc;

use stone_command::{CommandOrigin, DispatchError, Dispatcher, RegistryError, ResolutionError};
use stone_config::Config;

use crate::builtins;
use crate::world::ConsoleWorld;

/// A dispatcher with the builtin commands, the configured soft enums and a
/// console origin to run lines as.
pub struct Host {
	dispatcher: Dispatcher,
	console: CommandOrigin,
}

impl Host {
	pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
		let dispatcher = Dispatcher::new(Arc::new(ConsoleWorld::new(config.actors.clone())));
		for entry in &config.soft_enums {
			dispatcher.soft_enums().register(&entry.name, entry.values.iter().cloned(), entry.case_sensitive);
		}
		builtins::register(&dispatcher)?;

		let console = CommandOrigin::new(config.console.name.clone(), config.console.permission);
		tracing::info!(
			console = %console.name,
			permission = %console.permission_level,
			commands = dispatcher.registry().len(),
			actors = config.actors.len(),
			"host ready"
		);
		Ok(Self { dispatcher, console })
	}

	pub fn console_mut(&mut self) -> &mut CommandOrigin {
		&mut self.console
	}

	/// Runs one line as the console.
	pub fn execute(&self, line: &str) -> Result<Option<String>, DispatchError> {
		self.dispatcher.execute(line, &self.console)
	}

	/// Executes every non-blank, non-`#` line of `input`, writing outputs and
	/// errors to `out`. Returns the number of failed lines.
	pub fn run_lines(&self, input: impl BufRead, mut out: impl Write) -> io::Result<usize> {
		let mut failures = 0;
		for line in input.lines() {
			let line = line?;
			let line = line.trim();
			if line.is_empty() || line.starts_with('#') {
				continue;
			}
			if !self.run_one(line, &mut out)? {
				failures += 1;
			}
		}
		Ok(failures)
	}

	/// Executes each entry of `commands` as one command line, as given.
	/// Returns the number of failed commands.
	pub fn run_commands(&self, commands: &[String], mut out: impl Write) -> io::Result<usize> {
		let mut failures = 0;
		for command in commands {
			if !self.run_one(command, &mut out)? {
				failures += 1;
			}
		}
		Ok(failures)
	}

	fn run_one(&self, line: &str, out: &mut impl Write) -> io::Result<bool> {
		let ok = match self.execute(line) {
			Ok(Some(output)) => {
				writeln!(out, "{output}")?;
				true
			}
			Ok(None) => true,
			Err(err) => {
				writeln!(out, "{}", self.render_error(&err))?;
				false
			}
		};
		out.flush()?;
		Ok(ok)
	}

	/// Formats `err` for the console, adding usage lines when no overload
	/// matched.
	pub fn render_error(&self, err: &DispatchError) -> String {
		let mut text = format!("error: {err}");
		if let DispatchError::Resolution(ResolutionError::NoMatchingOverload { command, mismatches }) = err
			&& let Some(definition) = self.dispatcher.registry().lookup(command)
		{
			for (usage, mismatch) in definition.usage(command).into_iter().zip(mismatches) {
				text.push_str(&format!("\n  {usage}  ({mismatch})"));
			}
		}
		text
	}
}
