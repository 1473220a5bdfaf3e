//! Runs the `stone` binary end to end.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

const CONFIG: &str = r#"
[logging]
level = "warn"

[[soft_enums]]
name = "kit"
values = ["starter"]

[[actors]]
id = 1
name = "Steve"
identifier = "minecraft:player"
pos = [0.0, 64.0, 0.0]
"#;

fn stone(dir: &Path, args: &[&str], stdin: Option<&str>) -> Output {
	let mut child = Command::new(env!("CARGO_BIN_EXE_stone"))
		.args(args)
		.current_dir(dir)
		.env_remove("RUST_LOG")
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("stone binary should start");
	{
		let mut pipe = child.stdin.take().expect("stdin is piped");
		pipe.write_all(stdin.unwrap_or_default().as_bytes()).expect("stdin should accept input");
	}
	child.wait_with_output().expect("stone binary should exit")
}

fn stdout(output: &Output) -> String {
	String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn runs_command_flags_in_order() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("stone.toml"), CONFIG).unwrap();

	let output = stone(dir.path(), &["-c", "test hello", "-c", "test @a hi there"], None);
	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
	assert_eq!(stdout(&output), "str: hello\nSteve: hi there\n");
}

#[test]
fn failed_command_sets_exit_status() {
	let dir = tempfile::tempdir().unwrap();
	let output = stone(dir.path(), &["-c", "tset x"], None);
	assert!(!output.status.success());
	assert_eq!(stdout(&output), "error: unknown command: tset (did you mean 'test'?)\n");
}

#[test]
fn reads_lines_from_stdin() {
	let dir = tempfile::tempdir().unwrap();
	let output = stone(dir.path(), &["--name", "Rcon"], Some("say hello\n# skipped\nbogus\n"));
	assert!(output.status.success());
	let out = stdout(&output);
	assert!(out.starts_with("[Rcon] hello\n"), "{out}");
	assert!(out.contains("error: unknown command: bogus"), "{out}");
}

#[test]
fn permission_flag_limits_the_console() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("stone.toml"), CONFIG).unwrap();

	let output = stone(dir.path(), &["--permission", "0", "-c", "enum kit"], None);
	assert!(!output.status.success());
	assert!(stdout(&output).contains("insufficient permission"));

	let output = stone(dir.path(), &["-c", "enum kit"], None);
	assert_eq!(stdout(&output), "kit: starter\n");
}

#[test]
fn explicit_config_path_is_loaded() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("custom.toml");
	std::fs::write(&path, CONFIG).unwrap();

	let output = stone(dir.path(), &["--config", path.to_str().unwrap(), "-c", "locate Steve"], None);
	assert_eq!(stdout(&output), "Steve (#1) at 0 64 0\n");
}

#[test]
fn invalid_config_fails_startup() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("stone.toml"), "[console]\npermission = 7\n").unwrap();

	let output = stone(dir.path(), &["-c", "help"], None);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("TOML parse error"));
}

#[test]
fn verbose_shows_config_loading() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("stone.toml"), CONFIG).unwrap();
	let output = stone(dir.path(), &["-v", "-c", "test hi"], None);
	assert!(String::from_utf8_lossy(&output.stderr).contains("loaded config"));

	let empty = tempfile::tempdir().unwrap();
	let output = stone(empty.path(), &["--verbose", "-c", "test hi"], None);
	assert!(String::from_utf8_lossy(&output.stderr).contains("no config file, using defaults"));
}

#[test]
fn command_flag_is_one_line_even_with_newlines() {
	let dir = tempfile::tempdir().unwrap();
	let output = stone(dir.path(), &["-c", "say one\nsay two", "-c", "#skip"], None);
	assert!(!output.status.success());
	let out = stdout(&output);
	assert!(out.starts_with("[Server] one say two\nerror: unknown command: #skip"), "{out}");
}
