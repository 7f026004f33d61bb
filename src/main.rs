use anyhow::Result;
use clap::Parser;

mod cli;
mod commit;
mod config;
mod gitio;
mod model;
mod processor;
mod render;
mod scanner;
mod util;
mod window;

use crate::cli::{Cli, normalize};
use crate::config::AuthorFilter;
use crate::gitio::SystemGit;
use crate::processor::RunOutcome;
use tracing::debug;


fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  util::init_logging(cli.verbose);

  // Phase 1: normalize CLI (usage errors stop here, before any scanning)
  let cfg = normalize(cli)?;

  // Phase 2: ambient configuration; a local .env never overrides the real environment
  config::load_dotenv();
  let authors = AuthorFilter::from_env();

  // Phase 3: scan and write
  match processor::process(&cfg, &authors, &SystemGit) {
    RunOutcome::Written { path, count } => debug!(count, path = %path.display(), "report written"),
    RunOutcome::WriteFailed { path } => debug!(path = %path.display(), "report not written"),
    RunOutcome::NoProjects | RunOutcome::NoCommits => {}
  }
  Ok(())
}
