use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{CSV_COLUMNS, CommitRecord};

/// Writes the header row and one row per record, in input order.
///
/// On error the partially written file is left in place.
pub fn write_csv(records: &[CommitRecord], output_path: &Path) -> Result<()> {
  let mut wtr = csv::WriterBuilder::new()
    .has_headers(false)
    .from_path(output_path)
    .with_context(|| format!("creating {}", output_path.display()))?;

  wtr.write_record(CSV_COLUMNS)?;
  for rec in records {
    wtr
      .serialize(rec)
      .with_context(|| format!("writing commit {} to {}", rec.commit_hash, output_path.display()))?;
  }
  wtr.flush().with_context(|| format!("flushing {}", output_path.display()))?;
  Ok(())
}
