// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Orchestrate a run: load projects, scan each repository in order, write the CSV report
// role: processing/orchestrator
// inputs: EffectiveConfig (date filter, project list path, out dir, now), AuthorFilter, GitRunner
// outputs: git_log_*.csv under out_dir; progress lines and a summary on stdout
// side_effects: Spawns git per project; writes one file; prints to stdout
// invariants:
// - projects are scanned sequentially, each exactly once, in list order
// - no file is written when the run finds zero commits or zero projects
// - per-repository and write failures never abort the run
// errors: Only configuration of the run itself propagates; everything else is logged
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::PathBuf;

use tracing::error;

use crate::cli::EffectiveConfig;
use crate::config::{AuthorFilter, load_project_list};
use crate::gitio::GitRunner;
use crate::model::CommitRecord;
use crate::render::write_csv;
use crate::scanner::scan;
use crate::util;

#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
  NoProjects,
  NoCommits,
  Written { path: PathBuf, count: usize },
  WriteFailed { path: PathBuf },
}

pub fn collect_commits(
  cfg: &EffectiveConfig,
  authors: &AuthorFilter,
  git: &dyn GitRunner,
) -> Option<Vec<CommitRecord>> {
  let projects = load_project_list(&cfg.projects);
  println!("Found {} projects to process", projects.len());
  if projects.is_empty() {
    return None;
  }

  let mut all: Vec<CommitRecord> = Vec::new();
  for path in projects.paths.iter() {
    println!("Processing: {}", path);
    let commits = scan(git, path, authors, &projects, &cfg.filter);
    println!("  Found {} commits", commits.len());
    all.extend(commits);
  }
  Some(all)
}

pub fn process(cfg: &EffectiveConfig, authors: &AuthorFilter, git: &dyn GitRunner) -> RunOutcome {
  println!("Starting Git Activity to CSV conversion...");
  match cfg.filter.bounds() {
    Some(_) => println!("Filtering commits for {}", cfg.filter.describe()),
    None => println!("No date filter; including all commits"),
  }
  if authors.is_empty() {
    println!("Author filters: none (all authors)");
  } else {
    println!("Author filters: {:?}", authors.names());
  }

  let Some(commits) = collect_commits(cfg, authors, git) else {
    println!("No valid projects found. Exiting.");
    return RunOutcome::NoProjects;
  };

  if commits.is_empty() {
    println!("No commits found matching the criteria.");
    return RunOutcome::NoCommits;
  }

  let path = cfg.out_dir.join(util::report_file_name(&cfg.filter, cfg.now));
  if let Err(e) = write_csv(&commits, &path) {
    error!("Error saving to CSV: {:#}", e);
    return RunOutcome::WriteFailed { path };
  }

  println!("Successfully saved {} commits to {}", commits.len(), path.display());
  println!("\nTotal commits processed: {}", commits.len());
  println!("Output file: {}", path.display());
  RunOutcome::Written { path, count: commits.len() }
}
