//! test-support: helpers for robust, nextest-friendly tests.
//!
//! Add as a dev-dependency in your top-level `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test_support = { path = "tests/support" }
//! ```
//!
//! Then in tests:
//! ```rust,no_run
//! use test_support::{init_tracing, FixtureRepo};
//!
//! init_tracing();
//! let mut repo = FixtureRepo::new();
//! repo.commit("Ann Lee", "ann@example.com", "2025-09-01T10:00:00", "feat: start");
//! ```

use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, EnvFilter};

use std::process::Command;
use std::{
  env,
  path::{Path, PathBuf},
};

/// Initialize `tracing` once, honoring `RUST_LOG` and writing via the test writer.
///
/// Safe to call from multiple tests; only the first call configures the global subscriber.
pub fn init_tracing() {
  static INIT: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_default_env()
      .or_else(|_| EnvFilter::try_new("warn,test=info"))
      .unwrap();
    // with_test_writer() causes logs to appear alongside failing tests only (cargo/nextest)
    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
  });
  Lazy::force(&INIT);
}

/// Create a temp directory that deletes on drop.
pub fn tempdir() -> tempfile::TempDir {
  tempfile::tempdir().expect("create tempdir")
}

/// Run the `git-log-csv` binary from `cwd` with a scrubbed author filter.
///
/// `author_name` is removed from the child environment so the developer's shell
/// never leaks into assertions; tests opt in with `.env("author_name", ..)`.
pub fn cmd_in(cwd: &Path) -> assert_cmd::Command {
  init_tracing();
  let mut cmd = assert_cmd::Command::cargo_bin("git-log-csv").expect("binary target not found");
  cmd.current_dir(cwd).env_remove("author_name").env_remove("RUST_LOG");
  cmd
}

pub fn run(repo: &Path, args: &[&str]) {
  let status = Command::new("git").args(args).current_dir(repo).status().unwrap();
  assert!(status.success(), "git {:?} failed", args);
}

/// A throwaway git repository whose commits carry scripted authors and dates.
pub struct FixtureRepo {
  dir: tempfile::TempDir,
  seq: usize,
}

impl FixtureRepo {
  pub fn new() -> Self {
    let dir = tempdir();
    run(dir.path(), &["init", "-q", "-b", "main"]);
    run(dir.path(), &["config", "user.name", "Fixture Bot"]);
    run(dir.path(), &["config", "user.email", "fixture@example.com"]);
    run(dir.path(), &["config", "commit.gpgsign", "false"]);
    Self { dir, seq: 0 }
  }

  pub fn path(&self) -> &Path {
    self.dir.path()
  }

  pub fn path_str(&self) -> String {
    self.dir.path().to_string_lossy().to_string()
  }

  /// Commit one file change as `name <email>` at local time `date` (`YYYY-MM-DDTHH:MM:SS`).
  pub fn commit(&mut self, name: &str, email: &str, date: &str, message: &str) -> &mut Self {
    self.seq += 1;
    std::fs::write(self.dir.path().join(format!("file-{}.txt", self.seq)), message).unwrap();
    run(self.dir.path(), &["add", "."]);

    let status = Command::new("git")
      .args(["commit", "-q", "-m", message])
      .current_dir(self.dir.path())
      .env("GIT_AUTHOR_NAME", name)
      .env("GIT_AUTHOR_EMAIL", email)
      .env("GIT_AUTHOR_DATE", date)
      .env("GIT_COMMITTER_NAME", name)
      .env("GIT_COMMITTER_EMAIL", email)
      .env("GIT_COMMITTER_DATE", date)
      .status()
      .unwrap();
    assert!(status.success(), "git commit {:?} failed", message);
    self
  }
}

impl Default for FixtureRepo {
  fn default() -> Self {
    Self::new()
  }
}

/// Write `list_project.json` (array shape) into `dir` from `(path, name)` pairs.
pub fn write_project_list(dir: &Path, entries: &[(&str, &str)]) -> PathBuf {
  let list: Vec<serde_json::Value> = entries
    .iter()
    .map(|(path, name)| serde_json::json!({"path": path, "name": name}))
    .collect();
  let p = dir.join("list_project.json");
  std::fs::write(&p, serde_json::to_vec_pretty(&list).unwrap()).unwrap();
  p
}

/// All `git_log_*.csv` files directly inside `dir`, sorted by name.
pub fn csv_reports(dir: &Path) -> Vec<PathBuf> {
  let mut out: Vec<PathBuf> = std::fs::read_dir(dir)
    .unwrap()
    .filter_map(|e| e.ok().map(|e| e.path()))
    .filter(|p| {
      p.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with("git_log_") && n.ends_with(".csv"))
    })
    .collect();
  out.sort();
  out
}

/// Set multiple environment variables for the duration of the returned guard.
pub fn with_env(vars: &[(&str, &str)]) -> EnvGuard {
  EnvGuard::set_many(vars)
}

/// Guard for temporarily setting environment variables.
pub struct EnvGuard {
  prev: Vec<(String, Option<String>)>,
}

impl EnvGuard {
  pub fn set_many(kv: &[(&str, &str)]) -> Self {
    let mut prev = Vec::with_capacity(kv.len());
    for (k, v) in kv {
      let k_owned = k.to_string();
      prev.push((k_owned.clone(), env::var(k).ok()));
      env::set_var(k, v);
    }
    Self { prev }
  }
}

impl Drop for EnvGuard {
  fn drop(&mut self) {
    for (k, old) in self.prev.drain(..) {
      match old {
        Some(v) => env::set_var(&k, v),
        None => env::remove_var(&k),
      }
    }
  }
}
