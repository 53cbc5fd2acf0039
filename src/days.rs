use std::{
  collections::BTreeMap,
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// A day number, as found in the suffix of a day directory name.
pub type Day = u32;

/// A directory holding one day's solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDir {
  pub day: Day,
  pub name: String,
  pub path: PathBuf,
}

/// Parses the day number out of `name`, which must be `prefix` followed by
/// decimal digits only.
pub fn parse_day(name: &str, prefix: &str) -> Option<Day> {
  let suffix = name.strip_prefix(prefix)?;

  if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }

  suffix.parse().ok()
}

/// Lists the day directories under `root`, sorted by name. When `only` is
/// non-empty, days not in it are skipped.
///
/// Two directories with the same day number (`day6` and `day06`) keep the first
/// by name; the other one is reported and ignored.
pub fn discover(root: &Path, prefix: &str, only: &[Day]) -> Result<Vec<DayDir>> {
  let mut names = Vec::new();

  for entry in fs::read_dir(root).with_context(|| format!("read dir {root:?}"))? {
    let entry = entry.context("dir entry")?;

    if !entry.path().is_dir() {
      continue;
    }

    // Non UTF-8 names can't carry the prefix anyway.
    if let Ok(name) = entry.file_name().into_string() {
      names.push(name);
    }
  }

  names.sort();

  let mut days: BTreeMap<Day, DayDir> = BTreeMap::new();

  for name in names {
    let Some(day) = parse_day(&name, prefix) else {
      continue;
    };

    if !only.is_empty() && !only.contains(&day) {
      continue;
    }

    if let Some(existing) = days.get(&day) {
      eprintln!("warning: skipping {name:?}, day {day} is already {:?}", existing.name);
      continue;
    }

    let path = root.join(&name);
    days.insert(day, DayDir { day, name, path });
  }

  Ok(days.into_values().collect())
}

/// Runs `op` on each day directory in order, collecting its results by day.
/// The first error stops the walk.
pub fn for_each_day<T, F>(days: &[DayDir], mut op: F) -> Result<BTreeMap<Day, T>>
where
  F: FnMut(&DayDir) -> Result<T>,
{
  let mut results = BTreeMap::new();

  for dir in days {
    let result = op(dir).with_context(|| format!("{:?}", dir.name))?;
    results.insert(dir.day, result);
  }

  Ok(results)
}
