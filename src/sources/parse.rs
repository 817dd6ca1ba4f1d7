use serde::Deserialize;

use crate::error::Result;

/// One CSV row as exported, before validation. Real exports carry many
/// more columns than the three consumed here; unknown headers are
/// ignored and empty fields surface as `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBuildRecord {
    pub created_at: Option<String>,
    pub duration: Option<String>,
    pub summary_status: Option<String>,
}

/// Parses a header-based build history export. Invalid tabular data
/// (e.g. ragged rows) fails the whole load.
pub fn parse_records(text: &str) -> Result<Vec<RawBuildRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<RawBuildRecord>, _>>()?;

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_header_csv() {
        let text = "created_at,duration,summary_status\n\
                    2016-01-04 08:00:00,42,passed\n\
                    2016-01-05 09:00:00,13,failed\n";

        let records = parse_records(text).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].created_at.as_deref(), Some("2016-01-04 08:00:00"));
        assert_eq!(records[0].duration.as_deref(), Some("42"));
        assert_eq!(records[1].summary_status.as_deref(), Some("failed"));
    }

    #[test]
    fn test_empty_field_becomes_none() {
        let text = "created_at,duration,summary_status\n2016-01-04,,passed\n";

        let records = parse_records(text).unwrap();

        assert_eq!(records[0].duration, None);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let text = "id,created_at,branch,duration,summary_status,commit\n\
                    7,2016-01-04,master,42,passed,abc123\n";

        let records = parse_records(text).unwrap();

        assert_eq!(records[0].created_at.as_deref(), Some("2016-01-04"));
        assert_eq!(records[0].duration.as_deref(), Some("42"));
        assert_eq!(records[0].summary_status.as_deref(), Some("passed"));
    }

    #[test]
    fn test_missing_consumed_column_yields_none() {
        let text = "created_at,summary_status\n2016-01-04,passed\n";

        let records = parse_records(text).unwrap();

        assert_eq!(records[0].duration, None);
        assert_eq!(records[0].summary_status.as_deref(), Some("passed"));
    }

    #[test]
    fn test_empty_input_parses_to_no_records() {
        assert!(parse_records("").unwrap().is_empty());
        assert!(parse_records("created_at,duration,summary_status\n")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_ragged_row_is_a_hard_error() {
        let text = "created_at,duration,summary_status\n2016-01-04,42,passed,extra,fields\n";

        assert!(parse_records(text).is_err());
    }
}
