// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the project list entries and the flat commit record shared by scanning and CSV rendering
// role: model/types
// outputs: Serializable structs with stable field names; CommitRecord field order is the CSV column order
// invariants: CSV header is commit_hash,author_name,author_email,date,Application_type,Description_Technical,project_path
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::{Deserialize, Serialize};

/// One `{ "path", "name" }` object from the project list file.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
  #[serde(default)]
  pub path: String,
  #[serde(default)]
  pub name: String,
}

/// A single commit as emitted in one CSV row.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[cfg_attr(test, derive(Deserialize))]
pub struct CommitRecord {
  pub commit_hash: String,
  pub author_name: String,
  pub author_email: String,
  pub date: String,
  #[serde(rename = "Application_type")]
  pub application_type: String,
  #[serde(rename = "Description_Technical")]
  pub description: String,
  pub project_path: String,
}

/// Column order of the CSV report; mirrors the field order of [`CommitRecord`].
pub const CSV_COLUMNS: [&str; 7] = [
  "commit_hash",
  "author_name",
  "author_email",
  "date",
  "Application_type",
  "Description_Technical",
  "project_path",
];
