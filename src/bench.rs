use std::{
  io::Write,
  time::{Duration, Instant},
};

use anyhow::{Context, Result};

use crate::{days::DayDir, run::Toolchain, stats::Timing};

pub const DEFAULT_RUNS: u32 = 100;

pub struct Bench<'a> {
  toolchain: &'a Toolchain,
  /// How many times each solution is run.
  runs: u32,
  /// Limit for a single run.
  timeout: Option<Duration>,
}

impl<'a> Bench<'a> {
  pub fn new(toolchain: &'a Toolchain, runs: u32, timeout: Option<Duration>) -> Self {
    Self { toolchain, runs, timeout }
  }

  /// Builds the day in release mode, then runs it `runs` times and returns the
  /// time spent.
  pub fn bench(&self, dir: &DayDir) -> Result<Timing> {
    eprintln!("benchmarking {:?}", dir.name);

    eprintln!("  building");
    self.toolchain.build(&dir.path).context("build")?;

    let mut total = Duration::ZERO;

    for k in 0..self.runs {
      eprint!("Run {k} / {}...\r", self.runs);
      std::io::stderr().flush().context("flush")?;

      let start = Instant::now();
      self
        .toolchain
        .run(&dir.path, self.timeout)
        .with_context(|| format!("run {k}"))?;
      total += start.elapsed();
    }

    let timing = Timing { total, runs: self.runs };
    eprintln!("  {:<40}", format!("done, {:.2} s per run", timing.mean().as_secs_f64()));

    Ok(timing)
  }
}
