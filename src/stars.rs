use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::{days::DayDir, run::Toolchain};

pub const STAR: &str = "⭐";

static PASSED_TESTS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"test result: ok\. ([0-9]+) passed").expect("valid regex"));

/// Returns the passed count of the first successful `test result` line.
pub fn parse_passed(output: &str) -> Result<usize> {
  let captures = PASSED_TESTS
    .captures(output)
    .context("no passed tests line found")?;

  captures[1].parse().context("passed count")
}

/// Runs the day's tests and returns how many passed.
pub fn test_day(toolchain: &Toolchain, dir: &DayDir) -> Result<usize> {
  eprint!("testing {:?}... ", dir.name);

  let output = toolchain.test(&dir.path).context("test")?;
  let stars = parse_passed(&output);

  match &stars {
    Ok(stars) => eprintln!("{}", STAR.repeat(*stars)),
    Err(_) => eprintln!("failed"),
  }

  stars
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  const CARGO_TEST: &str = "
running 2 tests
test tests::part1 ... ok
test tests::part2 ... ok

test result: ok. 2 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.01s

   Doc-tests day01

running 0 tests

test result: ok. 0 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.00s
";

  #[test]
  fn first_summary_line_wins() {
    assert_eq!(parse_passed(CARGO_TEST).unwrap(), 2);
  }

  #[test]
  fn counts_above_nine() {
    assert_eq!(parse_passed("test result: ok. 12 passed; 0 failed").unwrap(), 12);
  }

  #[test]
  fn failed_suite_has_no_passed_line() {
    let output = "test result: FAILED. 1 passed; 1 failed; 0 ignored";

    assert!(parse_passed(output).is_err());
    assert!(parse_passed("").is_err());
  }

  #[test]
  fn test_day_reads_both_streams() {
    let root = TempDir::new().unwrap();
    let toolchain = Toolchain {
      build: vec!["true".into()],
      run: vec!["true".into()],
      test: vec![
        "sh".into(),
        "-c".into(),
        "echo 'test result: ok. 3 passed; 0 failed' >&2; exit 1".into(),
      ],
    };
    let dir = DayDir {
      day: 4,
      name: "day04".into(),
      path: root.path().to_path_buf(),
    };

    assert_eq!(test_day(&toolchain, &dir).unwrap(), 3);
  }
}
