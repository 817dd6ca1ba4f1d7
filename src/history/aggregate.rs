use chrono::NaiveDate;
use indexmap::IndexMap;

use super::record::{BuildRecord, BuildStatus};

/// Per-day series in ascending day order. All vectors have the same
/// length and index `i` of each describes `days[i]`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DayAggregation {
    pub days: Vec<NaiveDate>,
    pub passed: Vec<usize>,
    pub failed: Vec<usize>,
    pub duration: Vec<f64>,
}

#[derive(Default)]
struct DayTally {
    passed: usize,
    failed: usize,
    duration: f64,
}

pub fn aggregate_by_day(records: &[BuildRecord]) -> DayAggregation {
    let grouped = group_by_day(records);

    grouped
        .iter()
        .fold(DayAggregation::default(), |mut aggregation, (day, indices)| {
            let tally = tally_day(records, indices);
            aggregation.days.push(*day);
            aggregation.passed.push(tally.passed);
            aggregation.failed.push(tally.failed);
            aggregation.duration.push(tally.duration);
            aggregation
        })
}

/// Groups record indices under their calendar day, ascending.
fn group_by_day(records: &[BuildRecord]) -> IndexMap<NaiveDate, Vec<usize>> {
    let mut grouped: IndexMap<NaiveDate, Vec<usize>> = IndexMap::new();

    for (index, record) in records.iter().enumerate() {
        grouped
            .entry(record.created_at.date())
            .or_default()
            .push(index);
    }

    grouped.sort_keys();
    grouped
}

fn tally_day(records: &[BuildRecord], indices: &[usize]) -> DayTally {
    indices.iter().fold(DayTally::default(), |mut tally, &index| {
        let record = &records[index];
        match record.summary_status {
            BuildStatus::Passed => tally.passed += 1,
            BuildStatus::Failed => tally.failed += 1,
            BuildStatus::Other => {}
        }
        // Duration counts every record that day, whatever its status.
        tally.duration += record.duration;
        tally
    })
}
