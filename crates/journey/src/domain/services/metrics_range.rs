//! Date-Range Metrics Filter

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::MetricsRow;

/// Inclusive date range. A missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// Rows dated within `range`, in source order
pub fn filter_metrics(rows: &[MetricsRow], range: DateRange) -> Vec<&MetricsRow> {
    rows.iter().filter(|row| range.contains(row.date)).collect()
}

/// Earliest and latest date in the table
pub fn date_span(rows: &[MetricsRow]) -> Option<(NaiveDate, NaiveDate)> {
    let first = rows.iter().map(|row| row.date).min()?;
    let last = rows.iter().map(|row| row.date).max()?;
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn rows() -> Vec<MetricsRow> {
        (1..=10).map(|d| MetricsRow::empty(day(d))).collect()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let rows = rows();
        let hits = filter_metrics(&rows, DateRange::between(day(3), day(5)));
        let days: Vec<NaiveDate> = hits.iter().map(|r| r.date).collect();
        assert_eq!(days, vec![day(3), day(4), day(5)]);
    }

    #[test]
    fn test_single_day_range() {
        let rows = rows();
        assert_eq!(filter_metrics(&rows, DateRange::between(day(7), day(7))).len(), 1);
    }

    #[test]
    fn test_open_bounds() {
        let rows = rows();
        assert_eq!(filter_metrics(&rows, DateRange::new(Some(day(9)), None)).len(), 2);
        assert_eq!(filter_metrics(&rows, DateRange::new(None, Some(day(2)))).len(), 2);
        assert_eq!(filter_metrics(&rows, DateRange::default()).len(), 10);
    }

    #[test]
    fn test_inverted_or_disjoint_range_is_empty() {
        let rows = rows();
        assert!(filter_metrics(&rows, DateRange::between(day(5), day(3))).is_empty());
        assert!(filter_metrics(&rows, DateRange::between(day(20), day(25))).is_empty());
    }

    #[test]
    fn test_date_span() {
        assert_eq!(date_span(&rows()), Some((day(1), day(10))));
        assert_eq!(date_span(&[]), None);
    }
}
