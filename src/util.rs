// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for "now" handling, report file naming, logging setup, and man page rendering
// role: utilities/helpers
// inputs: Optional now override; DateFilter; clap CommandFactory
// outputs: Effective now, output file name, troff man page text
// side_effects: init_logging installs the global tracing subscriber
// invariants:
// - report_file_name pattern is git_log_[<suffix>_]<YYYYMMDD_HHMMSS>.csv and locale-independent
// errors: man page rendering surfaces IO errors
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, Local};
use clap::CommandFactory;
use tracing_subscriber::{EnvFilter, fmt};

use crate::window::DateFilter;

/// Returns the effective "now" given an optional override.
///
/// When `override_now` is `Some`, that instant is returned; otherwise
/// the current local time is used. Centralizes our handling of test
/// determinism without sprinkling `Local::now()` throughout the code.
pub fn effective_now(override_now: Option<DateTime<Local>>) -> DateTime<Local> {
  override_now.unwrap_or_else(Local::now)
}

/// `git_log_<suffix>_<YYYYMMDD_HHMMSS>.csv`, or `git_log_<timestamp>.csv` when unfiltered.
pub fn report_file_name(filter: &DateFilter, generated_at: DateTime<Local>) -> String {
  let timestamp = generated_at.format("%Y%m%d_%H%M%S");
  match filter.file_suffix() {
    Some(suffix) => format!("git_log_{}_{}.csv", suffix, timestamp),
    None => format!("git_log_{}.csv", timestamp),
  }
}

/// Install a plain stdout subscriber honoring `RUST_LOG`; `verbose` lowers the default to debug.
pub fn init_logging(verbose: bool) {
  let default = if verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
  let _ = fmt()
    .with_env_filter(filter)
    .with_target(false)
    .without_time()
    .with_level(false)
    .with_ansi(false)
    .try_init();
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
