use std::{collections::BTreeMap, time::Duration};

use crate::days::Day;

/// Wall-clock time spent over every run of one day's solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
  pub total: Duration,
  pub runs: u32,
}

impl Timing {
  /// Average duration of a single run.
  pub fn mean(&self) -> Duration {
    self.total / self.runs.max(1)
  }
}

/// Benchmark results, keyed by day.
pub type Benches = BTreeMap<Day, Timing>;

/// Number of passed tests, keyed by day.
pub type Stars = BTreeMap<Day, usize>;
