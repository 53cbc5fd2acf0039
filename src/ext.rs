use std::{
  os::unix::process::CommandExt as UnixCommandExt,
  process::{Child, Command, ExitStatus, Stdio},
  time::Duration,
};

use anyhow::{Context, Result};
use nix::{
  errno::Errno,
  sys::signal::{killpg, Signal},
  unistd::Pid,
};
use wait_timeout::ChildExt as WaitExt;

#[extend::ext]
pub impl ExitStatus {
  fn check_success(&self) -> Result<()> {
    if !self.success() {
      anyhow::bail!("exited with non-zero status {self}");
    }

    Ok(())
  }
}

#[extend::ext]
pub impl Child {
  /// Returns an error if the exit status was non-zero, or if the child did not
  /// exit within `timeout`. A timed out child is killed along with its process
  /// group, so a child spawned as a group leader takes its descendants with it.
  fn check_success_timeout(&mut self, timeout: Option<Duration>) -> Result<()> {
    let Some(timeout) = timeout else {
      return self.wait().context("wait")?.check_success();
    };

    let Some(status) = self.wait_timeout(timeout).context("wait")? else {
      match killpg(Pid::from_raw(self.id() as i32), Signal::SIGKILL) {
        Ok(()) | Err(Errno::ESRCH) => {}
        Err(err) => return Err(err).context("kill group after timeout"),
      }
      self.kill().context("kill after timeout")?;
      self.wait().context("wait after kill")?;

      anyhow::bail!("timed out after {timeout:?}");
    };

    status.check_success()
  }
}

#[extend::ext]
pub impl Command {
  /// Runs the command in its own process group with its output discarded,
  /// returning an error on non-zero exit or timeout.
  fn check_success_quiet(&mut self, timeout: Option<Duration>) -> Result<()> {
    self
      .process_group(0)
      .stdin(Stdio::null())
      .stdout(Stdio::null())
      .stderr(Stdio::null())
      .spawn()
      .context("spawn")?
      .check_success_timeout(timeout)
  }

  /// Runs the command and returns stdout followed by stderr. The exit status is
  /// not checked.
  fn combined_output(&mut self) -> Result<String> {
    let output = self.stdin(Stdio::null()).output().context("output")?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(text)
  }
}
