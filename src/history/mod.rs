mod aggregate;
mod anomaly;
mod record;

pub use record::{transform_records, BuildRecord, BuildStatus};

use crate::report::{DailyBreakdown, DaySeries};

/// Runs the whole pipeline over an immutable snapshot of records:
/// per-day aggregation, then anomaly detection over the aligned series.
pub fn analyze_records(records: &[BuildRecord]) -> DailyBreakdown {
    let aggregation = aggregate::aggregate_by_day(records);

    let abnormal = anomaly::find_abnormal(&aggregation.passed, &aggregation.failed);

    let labels = aggregation
        .days
        .iter()
        .map(|day| day.format("%Y-%m-%d").to_string())
        .collect();

    DailyBreakdown {
        labels,
        datasets: DaySeries {
            passed: aggregation.passed,
            failed: aggregation.failed,
            duration: aggregation.duration,
        },
        abnormal,
    }
}
