use std::{path::Path, process::Command, time::Duration};

use anyhow::{Context, Result};

use crate::ext::CommandExt;

/// The three command lines run inside each day directory. Every line is a
/// program followed by its arguments.
#[derive(Debug, Clone)]
pub struct Toolchain {
  pub build: Vec<String>,
  pub run: Vec<String>,
  pub test: Vec<String>,
}

impl Toolchain {
  /// `cargo build --release`, `cargo run --release` and `cargo test`, using
  /// `cargo` as the program name.
  pub fn cargo(cargo: &str) -> Self {
    Self {
      build: line(cargo, &["build", "--release"]),
      run: line(cargo, &["run", "--release"]),
      test: line(cargo, &["test"]),
    }
  }

  pub fn build(&self, dir: &Path) -> Result<()> {
    command(&self.build, dir)?.check_success_quiet(None)
  }

  /// Runs the solution once, discarding its output.
  pub fn run(&self, dir: &Path, timeout: Option<Duration>) -> Result<()> {
    command(&self.run, dir)?.check_success_quiet(timeout)
  }

  /// Runs the test suite and returns everything it printed.
  pub fn test(&self, dir: &Path) -> Result<String> {
    command(&self.test, dir)?.combined_output()
  }
}

impl Default for Toolchain {
  fn default() -> Self {
    Self::cargo("cargo")
  }
}

fn line(program: &str, args: &[&str]) -> Vec<String> {
  std::iter::once(program).chain(args.iter().copied()).map(String::from).collect()
}

fn command(line: &[String], dir: &Path) -> Result<Command> {
  let (program, args) = line.split_first().context("empty command line")?;

  let mut command = Command::new(program);
  command.args(args).current_dir(dir);

  Ok(command)
}
