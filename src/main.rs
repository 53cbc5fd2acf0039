mod bench;
mod days;
mod ext;
mod format;
mod report;
mod run;
mod stars;
mod stats;

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};

use self::{
  bench::Bench,
  days::{Day, DayDir},
  run::Toolchain,
  stats::{Benches, Stars},
};

/// Benchmarks and tests per-day solutions, and renders a README summary.
#[derive(Parser)]
struct Args {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Benchmark and test every day, then render the README.
  Readme {
    #[command(flatten)]
    days: DaysArgs,
    #[command(flatten)]
    bench: BenchArgs,
    /// Template containing the placeholder, relative to `--dir`.
    #[arg(long, default_value = report::DEFAULT_TEMPLATE)]
    template: PathBuf,
    /// File to write, relative to `--dir`. Overwritten if it exists.
    #[arg(short, long, default_value = report::DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Token replaced by the per-day results.
    #[arg(long, default_value = report::DEFAULT_PLACEHOLDER)]
    placeholder: String,
  },
  /// Benchmark every day and print the timings.
  Bench {
    #[command(flatten)]
    days: DaysArgs,
    #[command(flatten)]
    bench: BenchArgs,
  },
  /// Test every day and print the stars.
  Test {
    #[command(flatten)]
    days: DaysArgs,
  },
}

#[derive(ClapArgs, Debug)]
struct DaysArgs {
  /// Directory holding the day directories.
  #[arg(long, default_value = ".")]
  dir: PathBuf,
  /// Prefix of day directory names, followed by the day number.
  #[arg(long, default_value = "day")]
  prefix: String,
  /// Only these days. May be repeated.
  #[arg(short, long = "day")]
  days: Vec<Day>,
  /// Program used to build, run and test each day.
  #[arg(long, default_value = "cargo")]
  cargo: String,
}

impl DaysArgs {
  fn discover(&self) -> Result<Vec<DayDir>> {
    if !self.dir.exists() {
      anyhow::bail!("{:?} does not exist", self.dir);
    }

    let days = days::discover(&self.dir, &self.prefix, &self.days).context("discover")?;
    if days.is_empty() {
      anyhow::bail!("no {:?} directories found in {:?}", self.prefix, self.dir);
    }

    Ok(days)
  }

  fn toolchain(&self) -> Toolchain {
    Toolchain::cargo(&self.cargo)
  }
}

#[derive(ClapArgs, Debug)]
struct BenchArgs {
  /// Runs per day; the reported time is their mean.
  #[arg(short = 'n', long, default_value_t = bench::DEFAULT_RUNS, value_parser = clap::value_parser!(u32).range(1..))]
  runs: u32,
  /// Fail a run that takes longer than this many seconds.
  #[arg(long)]
  timeout: Option<f64>,
}

impl BenchArgs {
  fn bench_all(&self, toolchain: &Toolchain, days: &[DayDir]) -> Result<Benches> {
    let timeout = self
      .timeout
      .map(Duration::try_from_secs_f64)
      .transpose()
      .context("timeout")?;

    let bench = Bench::new(toolchain, self.runs, timeout);

    days::for_each_day(days, |dir| bench.bench(dir))
  }
}

fn test_all(toolchain: &Toolchain, days: &[DayDir]) -> Result<Stars> {
  days::for_each_day(days, |dir| stars::test_day(toolchain, dir))
}

fn main() -> Result<()> {
  match Args::parse().command {
    Command::Readme {
      days,
      bench,
      template,
      output,
      placeholder,
    } => {
      let dirs = days.discover()?;
      let toolchain = days.toolchain();

      let benches = bench.bench_all(&toolchain, &dirs).context("bench")?;
      let stars = test_all(&toolchain, &dirs).context("test")?;

      report::write(
        &days.dir.join(template),
        &days.dir.join(output),
        &placeholder,
        &benches,
        &stars,
      )
      .context("readme")?;
    }
    Command::Bench { days, bench } => {
      let dirs = days.discover()?;
      let benches = bench.bench_all(&days.toolchain(), &dirs).context("bench")?;

      println!("{}", format::format_benches(&benches).context("format")?);
    }
    Command::Test { days } => {
      let dirs = days.discover()?;
      let stars = test_all(&days.toolchain(), &dirs).context("test")?;

      println!("{}", format::format_stars(&stars).context("format")?);
    }
  }

  Ok(())
}
