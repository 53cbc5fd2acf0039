use std::fmt::Write;

use anyhow::Result;

use crate::{
  stars::STAR,
  stats::{Benches, Stars},
};

const COLUMN_WIDTH: usize = 10;
const COLUMN_PADDING: &str = "  ";

fn format_row<'a, I: IntoIterator<Item = &'a str>>(cols: I) -> String {
  cols
    .into_iter()
    .enumerate()
    .map(|(i, col)| {
      if i == 0 {
        format!("{col:<COLUMN_WIDTH$}")
      } else {
        format!("{col:>COLUMN_WIDTH$}")
      }
    })
    .collect::<Vec<_>>()
    .join(COLUMN_PADDING)
}

fn format_header<'a, I: IntoIterator<Item = &'a str>>(cols: I) -> String {
  let header = format_row(cols);

  format!("{header}\n{}", "=".repeat(header.len()))
}

/// Mean time per run and run count for each day.
pub fn format_benches(benches: &Benches) -> Result<String> {
  let mut table = String::new();

  writeln!(table, "{}", format_header(["day", "mean (s)", "runs"]))?;

  for (day, timing) in benches {
    let mean = format!("{:.4}", timing.mean().as_secs_f64());
    let row = format_row([day.to_string().as_str(), mean.as_str(), timing.runs.to_string().as_str()]);

    writeln!(table, "{row}")?;
  }

  Ok(table)
}

/// Passed tests for each day.
pub fn format_stars(stars: &Stars) -> Result<String> {
  let mut table = String::new();

  for (day, count) in stars {
    writeln!(table, "day {day:>2}  {}", STAR.repeat(*count))?;
  }

  writeln!(table, "total   {}", stars.values().sum::<usize>())?;

  Ok(table)
}
