use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::{
  stars::STAR,
  stats::{Benches, Stars},
};

pub const DEFAULT_TEMPLATE: &str = "README - template.md";
pub const DEFAULT_OUTPUT: &str = "README.md";
pub const DEFAULT_PLACEHOLDER: &str = "{{__days__}}";

/// One `- Day N - ⭐⭐ in 0.12 s...` line per benchmarked day, ascending.
pub fn day_lines(benches: &Benches, stars: &Stars) -> Result<String> {
  let lines = benches
    .iter()
    .map(|(day, timing)| -> Result<String> {
      let stars = stars.get(day).with_context(|| format!("no test result for day {day}"))?;

      Ok(format!(
        "- Day {day} - {} in {:.2} s...",
        STAR.repeat(*stars),
        timing.mean().as_secs_f64()
      ))
    })
    .collect::<Result<Vec<_>>>()?;

  Ok(lines.join("\n"))
}

/// Replaces every `placeholder` in `template` with the day lines.
pub fn render(template: &str, placeholder: &str, benches: &Benches, stars: &Stars) -> Result<String> {
  if !template.contains(placeholder) {
    anyhow::bail!("template does not contain {placeholder:?}");
  }

  Ok(template.replace(placeholder, &day_lines(benches, stars)?))
}

/// Renders `template` into `output`, overwriting it.
pub fn write(template: &Path, output: &Path, placeholder: &str, benches: &Benches, stars: &Stars) -> Result<()> {
  let text = fs::read_to_string(template).with_context(|| format!("read {template:?}"))?;
  let rendered = render(&text, placeholder, benches, stars).with_context(|| format!("render {template:?}"))?;

  fs::write(output, rendered).with_context(|| format!("write {output:?}"))?;
  eprintln!("wrote {output:?}");

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use tempfile::TempDir;

  use super::*;
  use crate::stats::Timing;

  const TEMPLATE: &str = "# Advent of Code\n\n{{__days__}}\n\nThe end.\n";

  fn timing(secs: f64) -> Timing {
    Timing {
      total: Duration::from_secs_f64(secs * 10.0),
      runs: 10,
    }
  }

  fn results() -> (Benches, Stars) {
    let benches = Benches::from([(2, timing(0.5)), (1, timing(1.23))]);
    let stars = Stars::from([(1, 3), (2, 2)]);

    (benches, stars)
  }

  #[test]
  fn days_are_rendered_in_order() {
    let (benches, stars) = results();

    let rendered = render(TEMPLATE, DEFAULT_PLACEHOLDER, &benches, &stars).unwrap();

    assert_eq!(
      rendered,
      "# Advent of Code\n\n- Day 1 - ⭐⭐⭐ in 1.23 s...\n- Day 2 - ⭐⭐ in 0.50 s...\n\nThe end.\n"
    );
    assert!(!rendered.contains(DEFAULT_PLACEHOLDER));
  }

  #[test]
  fn zero_stars() {
    let benches = Benches::from([(9, timing(0.004))]);
    let stars = Stars::from([(9, 0)]);

    assert_eq!(day_lines(&benches, &stars).unwrap(), "- Day 9 -  in 0.00 s...");
  }

  #[test]
  fn every_placeholder_is_replaced() {
    let (benches, stars) = results();

    let rendered = render("{{__days__}}|{{__days__}}", DEFAULT_PLACEHOLDER, &benches, &stars).unwrap();

    assert_eq!(rendered.matches("- Day 1 ").count(), 2);
  }

  #[test]
  fn missing_placeholder_is_an_error() {
    let (benches, stars) = results();

    assert!(render("no days here", DEFAULT_PLACEHOLDER, &benches, &stars).is_err());
  }

  #[test]
  fn missing_test_result_is_an_error() {
    let (benches, mut stars) = results();
    stars.remove(&2);

    let err = render(TEMPLATE, DEFAULT_PLACEHOLDER, &benches, &stars).unwrap_err();

    assert_eq!(err.to_string(), "no test result for day 2");
  }

  #[test]
  fn write_overwrites_and_is_idempotent() {
    let root = TempDir::new().unwrap();
    let template = root.path().join(DEFAULT_TEMPLATE);
    let output = root.path().join(DEFAULT_OUTPUT);
    fs::write(&template, TEMPLATE).unwrap();
    fs::write(&output, "stale contents that are much longer than the report").unwrap();

    let (benches, stars) = results();

    write(&template, &output, DEFAULT_PLACEHOLDER, &benches, &stars).unwrap();
    let first = fs::read(&output).unwrap();
    write(&template, &output, DEFAULT_PLACEHOLDER, &benches, &stars).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
    assert_eq!(
      String::from_utf8(first).unwrap(),
      render(TEMPLATE, DEFAULT_PLACEHOLDER, &benches, &stars).unwrap()
    );
  }
}
