use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::report::SkippedRecord;
use crate::sources::RawBuildRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    Passed,
    Failed,
    Other,
}

impl BuildStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "passed" => Self::Passed,
            "failed" => Self::Failed,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildRecord {
    pub created_at: NaiveDateTime,
    pub duration: f64,
    pub summary_status: BuildStatus,
}

/// Validates raw CSV rows into `BuildRecord`s. Rows without a usable
/// timestamp are dropped and reported with their 1-based data-row number
/// instead of failing the whole load.
pub fn transform_records(
    raw_records: Vec<RawBuildRecord>,
) -> (Vec<BuildRecord>, Vec<SkippedRecord>) {
    let mut records = Vec::with_capacity(raw_records.len());
    let mut skipped = Vec::new();

    for (index, raw) in raw_records.into_iter().enumerate() {
        match transform_record(raw) {
            Ok(record) => records.push(record),
            Err(reason) => skipped.push(SkippedRecord {
                row: index + 1,
                reason,
            }),
        }
    }

    (records, skipped)
}

fn transform_record(raw: RawBuildRecord) -> std::result::Result<BuildRecord, String> {
    let raw_created_at = raw
        .created_at
        .ok_or_else(|| "missing created_at".to_string())?;

    let created_at = parse_timestamp(&raw_created_at)
        .ok_or_else(|| format!("unparseable created_at: '{raw_created_at}'"))?;

    // Duration completeness is best-effort: anything that does not parse
    // to a finite number contributes 0 to the day's sum.
    let duration = raw
        .duration
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0);

    let summary_status = raw
        .summary_status
        .map_or(BuildStatus::Other, |status| BuildStatus::parse(&status));

    Ok(BuildRecord {
        created_at,
        duration,
        summary_status,
    })
}

/// Keeps the clock time as written. Offsets are not normalized to UTC, so
/// the record stays on the calendar day its source reported.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }

    if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z") {
        return Some(parsed.naive_local());
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}
