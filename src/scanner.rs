use std::path::Path;

use tracing::{debug, error, warn};

use crate::commit::{RecordContext, parse_log_output};
use crate::config::{AuthorFilter, ProjectSet};
use crate::gitio::{self, GitRunner};
use crate::model::CommitRecord;
use crate::window::DateFilter;

/// Scans one repository. Every failure is logged and yields an empty list.
pub fn scan(
  git: &dyn GitRunner,
  repo_path: &str,
  authors: &AuthorFilter,
  projects: &ProjectSet,
  filter: &DateFilter,
) -> Vec<CommitRecord> {
  let cwd = Path::new(repo_path);
  if !gitio::is_repository(git, cwd) {
    warn!("Warning: {} is not a git repository", repo_path);
    return Vec::new();
  }

  let args = gitio::log_args(authors, filter);
  debug!(repo = repo_path, ?args, "running git log");

  let out = match git.run(cwd, &args) {
    Ok(out) => out,
    Err(e) => {
      error!("Exception while processing {}: {:#}", repo_path, e);
      return Vec::new();
    }
  };

  if !out.success {
    error!("Error getting git log from {}: {}", repo_path, out.stderr.trim_end());
    return Vec::new();
  }

  let context = RecordContext {
    project_path: repo_path,
    application_type: projects.application_type(repo_path),
  };
  parse_log_output(&out.stdout, &context)
}
