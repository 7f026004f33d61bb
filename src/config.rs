// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Load author filters from the environment and the project list from JSON
// role: configuration/loading
// inputs: `author_name` env var (comma-separated); project list file path
// outputs: AuthorFilter; ProjectSet (ordered paths + path -> application type mapping)
// side_effects: Reads env and filesystem; logs warnings for skipped entries
// invariants:
// - accepted projects keep file order; no deduplication
// - missing/malformed project list yields an empty ProjectSet, never an error
// errors: Swallowed and logged (configuration errors are recoverable)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{error, warn};

use crate::model::ProjectEntry;

pub const AUTHOR_ENV_VAR: &str = "author_name";
pub const DEFAULT_PROJECT_LIST: &str = "list_project.json";

/// Author-name tokens passed to `git log --author`; empty means "everyone".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorFilter {
  names: Vec<String>,
}

impl AuthorFilter {
  pub fn from_env() -> Self {
    load_author_filters(std::env::var(AUTHOR_ENV_VAR).ok().as_deref())
  }

  pub fn names(&self) -> &[String] {
    &self.names
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }
}

pub fn load_author_filters(raw: Option<&str>) -> AuthorFilter {
  let names = raw
    .unwrap_or("")
    .split(',')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(String::from)
    .collect();
  AuthorFilter { names }
}

/// Load `.env` (searched from the working directory upward) into the process environment.
///
/// Unparsable lines are warned about and skipped; variables already set win over the file.
pub fn load_dotenv() {
  match dotenvy::dotenv_iter() {
    Ok(iter) => {
      apply_dotenv_entries(iter);
    }
    Err(e) if e.not_found() => {}
    Err(e) => warn!("Warning: could not read .env: {}", e),
  }
}

/// Returns the number of variables actually set.
fn apply_dotenv_entries<I>(entries: I) -> usize
where
  I: IntoIterator<Item = dotenvy::Result<(String, String)>>,
{
  let mut applied = 0;
  for entry in entries {
    match entry {
      Ok((key, value)) => {
        if std::env::var_os(&key).is_none() {
          std::env::set_var(&key, value);
          applied += 1;
        }
      }
      Err(e) => warn!("Warning: skipping unparsable .env line: {}", e),
    }
  }
  applied
}

/// Projects accepted from the list file.
#[derive(Debug, Clone, Default)]
pub struct ProjectSet {
  pub paths: Vec<String>,
  pub mapping: HashMap<String, String>,
}

impl ProjectSet {
  pub fn len(&self) -> usize {
    self.paths.len()
  }

  pub fn is_empty(&self) -> bool {
    self.paths.is_empty()
  }

  /// Application type for a project path, or "" when unmapped.
  pub fn application_type(&self, path: &str) -> &str {
    self.mapping.get(path).map(String::as_str).unwrap_or("")
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProjectListDoc {
  List(Vec<ProjectEntry>),
  Legacy {
    #[serde(default)]
    projects: Vec<ProjectEntry>,
  },
}

fn parse_project_entries(path: &Path) -> Result<Vec<ProjectEntry>> {
  let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
  let doc: ProjectListDoc =
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))?;
  Ok(match doc {
    ProjectListDoc::List(entries) => entries,
    ProjectListDoc::Legacy { projects } => {
      warn!(
        "Warning: {} uses the deprecated {{\"projects\": [...]}} shape; use a top-level array",
        path.display()
      );
      projects
    }
  })
}

pub fn load_project_list(path: &Path) -> ProjectSet {
  if !path.exists() {
    error!("Error: {} not found", path.display());
    return ProjectSet::default();
  }

  let entries = match parse_project_entries(path) {
    Ok(entries) => entries,
    Err(e) => {
      error!("Error: {:#}", e);
      return ProjectSet::default();
    }
  };

  let mut set = ProjectSet::default();
  for entry in entries {
    let project_path = entry.path.trim_end_matches('/').to_string();
    if project_path.is_empty() {
      warn!("Warning: skipping project entry with empty path (name: {:?})", entry.name);
      continue;
    }
    if !Path::new(&project_path).exists() {
      warn!("Warning: Project path does not exist: {}", project_path);
      continue;
    }
    set.mapping.insert(project_path.clone(), entry.name);
    set.paths.push(project_path);
  }
  set
}
