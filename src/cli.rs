use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_PROJECT_LIST;
use crate::util;
use crate::window::{DateFilter, parse_now_override, resolve_date_filter};

#[derive(Parser, Debug)]
#[command(
    name = "git-log-csv",
    version,
    about = "Export Git commit history from many repositories to one CSV",
    long_about = "Reads repository paths from a JSON project list, runs `git log` in each, \
                  and writes every matching commit to git_log_<suffix>_<timestamp>.csv.\n\n\
                  Authors are filtered by the comma-separated `author_name` environment variable \
                  (a .env file in the working directory is honored)."
)]
pub struct Cli {
  /// Only commits from today (local time); cannot be combined with DATES
  #[arg(long)]
  pub today: bool,

  /// One date (YYYY-MM-DD) for a single day, or two for an inclusive start/end range
  #[arg(value_name = "DATES")]
  pub dates: Vec<String>,

  /// JSON project list: an array of {"path", "name"} objects
  #[arg(long, default_value = DEFAULT_PROJECT_LIST)]
  pub projects: PathBuf,

  /// Directory the CSV report is written to
  #[arg(long, default_value = ".")]
  pub out_dir: PathBuf,

  /// Log the git commands being run
  #[arg(long, short)]
  pub verbose: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override the "now" instant used for --today and the file timestamp (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

#[derive(Debug)]
pub struct EffectiveConfig {
  pub filter: DateFilter,
  pub projects: PathBuf,
  pub out_dir: PathBuf,
  pub now: chrono::DateTime<chrono::Local>,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  let now = util::effective_now(parse_now_override(cli.now_override.as_deref()));
  let filter = resolve_date_filter(cli.today, &cli.dates, now)?;

  Ok(EffectiveConfig {
    filter,
    projects: cli.projects,
    out_dir: cli.out_dir,
    now,
  })
}
