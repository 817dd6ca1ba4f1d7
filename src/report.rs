use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct BuildInsights {
    pub source: String,
    pub collected_at: DateTime<Utc>,
    pub total_records: usize,
    pub days_analyzed: usize,
    pub skipped: Vec<SkippedRecord>,
    pub daily: DailyBreakdown,
}

/// Per-day series handed to the rendering layer. Index `i` of every
/// field describes the same calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBreakdown {
    pub labels: Vec<String>,
    pub datasets: DaySeries,
    pub abnormal: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySeries {
    pub passed: Vec<usize>,
    pub failed: Vec<usize>,
    pub duration: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub row: usize,
    pub reason: String,
}
