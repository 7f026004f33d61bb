use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

use crate::config::AuthorFilter;
use crate::window::DateFilter;

/// `git log` pretty format: one pipe-delimited line per commit.
pub const LOG_FORMAT: &str = "%H|%an|%ae|%ai|%s";

/// Captured result of one git invocation.
#[derive(Debug, Clone, Default)]
pub struct GitOutput {
  pub success: bool,
  pub stdout: String,
  pub stderr: String,
}

/// Runs git with a working directory. `Err` means git could not be spawned at all;
/// a non-zero exit is reported through `GitOutput::success`.
pub trait GitRunner {
  fn run(&self, cwd: &Path, args: &[String]) -> Result<GitOutput>;
}

/// Spawns the `git` binary found on PATH.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemGit;

impl GitRunner for SystemGit {
  fn run(&self, cwd: &Path, args: &[String]) -> Result<GitOutput> {
    let out = Command::new("git")
      .args(args)
      .current_dir(cwd)
      .output()
      .with_context(|| format!("spawning git {:?}", args))?;

    Ok(GitOutput {
      success: out.status.success(),
      stdout: String::from_utf8_lossy(&out.stdout).to_string(),
      stderr: String::from_utf8_lossy(&out.stderr).to_string(),
    })
  }
}

pub fn is_repository(git: &dyn GitRunner, path: &Path) -> bool {
  let args: Vec<String> = vec!["rev-parse".into(), "--git-dir".into()];
  match git.run(path, &args) {
    Ok(out) => out.success,
    Err(_) => false,
  }
}

pub fn log_args(authors: &AuthorFilter, filter: &DateFilter) -> Vec<String> {
  let mut args: Vec<String> = vec!["log".into(), format!("--pretty=format:{}", LOG_FORMAT)];
  if let Some((since, until)) = filter.git_bounds() {
    args.extend(["--since".into(), since, "--until".into(), until]);
  }
  for name in authors.names() {
    args.extend(["--author".into(), name.clone()]);
  }
  args
}
