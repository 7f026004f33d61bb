use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local, NaiveDate};
use regex::Regex;

// Date filtering: CLI date tokens -> DateFilter -> git --since/--until bounds.

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum DateFilter {
  All,
  Today(NaiveDate),
  Specific(NaiveDate),
  Range { start: NaiveDate, end: NaiveDate },
}

impl DateFilter {
  /// Inclusive calendar-day bounds, or None when no filtering applies.
  pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
    match *self {
      DateFilter::All => None,
      DateFilter::Today(d) | DateFilter::Specific(d) => Some((d, d)),
      DateFilter::Range { start, end } => Some((start, end)),
    }
  }

  /// `--since`/`--until` values for `git log`: start of the first day through the end of the last.
  pub fn git_bounds(&self) -> Option<(String, String)> {
    self
      .bounds()
      .map(|(start, end)| (format!("{start} 00:00:00"), format!("{end} 23:59:59")))
  }

  /// Output filename fragment; None for the unfiltered mode.
  pub fn file_suffix(&self) -> Option<String> {
    match self {
      DateFilter::All => None,
      DateFilter::Today(_) => Some("today".into()),
      DateFilter::Specific(d) => Some(d.to_string()),
      DateFilter::Range { start, end } => Some(format!("{start}_to_{end}")),
    }
  }

  /// Human-readable description for progress output.
  pub fn describe(&self) -> String {
    match self {
      DateFilter::All => "all dates".into(),
      DateFilter::Today(d) => format!("today: {d}"),
      DateFilter::Specific(d) => format!("date: {d}"),
      DateFilter::Range { start, end } => format!("range: {start} to {end}"),
    }
  }
}

pub fn parse_date_arg(token: &str) -> Result<NaiveDate> {
  let re = Regex::new(r"^\d{4}-\d{2}-\d{2}$")?;
  if !re.is_match(token) {
    bail!("invalid date '{}': expected YYYY-MM-DD", token);
  }
  NaiveDate::parse_from_str(token, DATE_FORMAT).with_context(|| format!("invalid date '{}': expected YYYY-MM-DD", token))
}

/// Resolve `--today` and positional date tokens into a DateFilter.
///
/// `now` is only consulted for `--today`.
pub fn resolve_date_filter(today: bool, dates: &[String], now: DateTime<Local>) -> Result<DateFilter> {
  if today && !dates.is_empty() {
    bail!("--today cannot be combined with explicit dates");
  }
  if dates.len() > 2 {
    bail!("at most two dates may be given (start and end), got {}", dates.len());
  }

  let parsed: Vec<NaiveDate> = dates.iter().map(|d| parse_date_arg(d)).collect::<Result<_>>()?;

  if today {
    return Ok(DateFilter::Today(now.date_naive()));
  }

  match parsed.as_slice() {
    [] => Ok(DateFilter::All),
    [d] => Ok(DateFilter::Specific(*d)),
    [start, end] => {
      if start > end {
        bail!("start date {} is after end date {}", start, end);
      }
      Ok(DateFilter::Range { start: *start, end: *end })
    }
    _ => unreachable!("length checked above"),
  }
}

/// Parse the hidden `--now-override` value (RFC3339 or local `YYYY-MM-DDTHH:MM:SS`).
pub fn parse_now_override(s: Option<&str>) -> Option<DateTime<Local>> {
  s.and_then(|raw| {
    chrono::DateTime::parse_from_rfc3339(raw)
      .ok()
      .map(|dt| dt.with_timezone(&Local))
      .or_else(|| {
        chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
          .ok()
          .and_then(|ndt| ndt.and_local_timezone(Local).single())
      })
  })
}
