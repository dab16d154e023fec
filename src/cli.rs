//! Argument parsing and dispatch for the `lattelab` binary.
//!
//! Grounded on the teacher's argument-free `src/main.rs`, which hard-codes a
//! single scenario per build; here a settings file is read at runtime and
//! `--benchmark`/`--version`/`--help` are handled the way a small CLI tool
//! in this corpus would (plain `std::env::args()`, no argument-parsing
//! crate, since the surface is four cases).

use std::process::ExitCode;

use anyhow::Context;

use crate::config::Settings;
use crate::error::LbmError;
use crate::timestep::build_solver;
use crate::utils::terminal_utils::print_error;

const USAGE: &str = "\
Usage:
  lattelab <settings.json>    Run one simulation from a JSON settings file
  lattelab --benchmark        Run the built-in benchmark sweep
  lattelab --version          Print the version and exit
  lattelab --help             Print this message and exit";

/// Parses `argv` (excluding the program name) and runs the corresponding
/// action, returning the process exit code: 0 success, 1 malformed input,
/// 2 missing settings file.
pub fn run(args: &[String]) -> ExitCode {
    ExitCode::from(dispatch(args))
}

/// Exit-code-returning core of [`run`]. Split out because `ExitCode` does
/// not implement `PartialEq`, so tests assert on the underlying `u8`.
fn dispatch(args: &[String]) -> u8 {
    match args {
        [] => {
            print_error("missing argument: a settings file path is required");
            println!("{USAGE}");
            2
        }
        [flag] if flag == "--version" => {
            println!("lattelab {}", env!("CARGO_PKG_VERSION"));
            0
        }
        [flag] if flag == "--help" => {
            println!("{USAGE}");
            0
        }
        [flag] if flag == "--benchmark" => match crate::solver::benchmark::run() {
            Ok(()) => 0,
            Err(e) => {
                print_error(&e.to_string());
                1
            }
        },
        [path] => run_simulation(path),
        _ => {
            print_error("too many arguments");
            println!("{USAGE}");
            1
        }
    }
}

fn run_simulation(path: &str) -> u8 {
    let settings = match Settings::load(path) {
        Ok(s) => s,
        Err(LbmError::SettingsNotFound(path)) => {
            print_error(&format!("settings file not found: {path}"));
            return 2;
        }
        Err(e) => {
            print_error(&e.to_string());
            return 1;
        }
    };

    let outcome: anyhow::Result<()> = (|| {
        let mut solver = build_solver(&settings).with_context(|| format!("building solver from {path}"))?;
        solver.run().with_context(|| format!("running simulation from {path}"))?;
        Ok(())
    })();

    match outcome {
        Ok(()) => 0,
        Err(e) => {
            print_error(&format!("{e:#}"));
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_exits_with_missing_file_code() {
        assert_eq!(dispatch(&[]), 2);
    }

    #[test]
    fn version_flag_succeeds() {
        assert_eq!(dispatch(&["--version".to_string()]), 0);
    }

    #[test]
    fn help_flag_succeeds() {
        assert_eq!(dispatch(&["--help".to_string()]), 0);
    }

    #[test]
    fn unknown_settings_path_exits_with_missing_file_code() {
        assert_eq!(dispatch(&["/nonexistent/settings.json".to_string()]), 2);
    }

    #[test]
    fn too_many_arguments_is_malformed_input() {
        assert_eq!(dispatch(&["a.json".to_string(), "b.json".to_string()]), 1);
    }

    #[test]
    fn malformed_settings_file_exits_with_malformed_input_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not valid json").unwrap();
        assert_eq!(dispatch(&[path.to_str().unwrap().to_string()]), 1);
    }

    #[test]
    fn valid_settings_file_runs_to_completion() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"model":"D2Q9","nx":4,"ny":4,"nz":1,"viscosity":0.1,"time_steps":2,"output_interval":0}"#,
        )
        .unwrap();
        assert_eq!(dispatch(&[path.to_str().unwrap().to_string()]), 0);
    }
}
