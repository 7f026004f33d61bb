// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Turn `git log --pretty=format:%H|%an|%ae|%ai|%s` output into CommitRecord rows
// role: commit construction
// inputs: raw git stdout, repository path, application type
// outputs: CommitRecord structs in git's native (reverse-chronological) order
// side_effects: none
// invariants:
// - each line splits into at most 5 fields; the subject absorbs any further '|'
// - lines with fewer than 5 fields are skipped
// - CR/LF in the subject become single spaces
// errors: none; malformed lines are dropped
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::model::CommitRecord;

pub struct RecordContext<'a> {
  pub project_path: &'a str,
  pub application_type: &'a str,
}

/// Parses one pipe-delimited log line.
pub fn parse_log_line(line: &str, context: &RecordContext) -> Option<CommitRecord> {
  let parts: Vec<&str> = line.splitn(5, '|').collect();
  if parts.len() != 5 {
    return None;
  }

  Some(CommitRecord {
    commit_hash: parts[0].to_string(),
    author_name: parts[1].to_string(),
    author_email: parts[2].to_string(),
    date: parts[3].to_string(),
    application_type: context.application_type.to_string(),
    description: sanitize_subject(parts[4]),
    project_path: context.project_path.to_string(),
  })
}

pub fn parse_log_output(stdout: &str, context: &RecordContext) -> Vec<CommitRecord> {
  stdout
    .trim()
    .split('\n')
    .filter(|l| !l.is_empty())
    .filter_map(|l| parse_log_line(l, context))
    .collect()
}

fn sanitize_subject(subject: &str) -> String {
  subject.replace(['\n', '\r'], " ")
}
