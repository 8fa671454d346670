//! KPI Aggregator - Hours-per-category tiles
//!
//! Sums configurable metrics columns and reports first-to-last change.

use serde::{Deserialize, Serialize};

use crate::domain::entities::MetricsRow;

/// Columns summed when nothing else is configured
pub const DEFAULT_KPI_COLUMNS: [&str; 5] = [
    "doctor_hours",
    "pt_hours",
    "ruby_hours",
    "performance_hours",
    "nutrition_hours",
];

/// One KPI tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    /// CSV column the tile aggregates
    pub column: String,
    /// Display label (`doctor_hours` -> `Doctor hours`)
    pub label: String,
    /// Column sum, rounded to one decimal
    pub total: f64,
    /// Percent change from the first to the last row, when defined
    pub change_pct: Option<f64>,
}

/// Compute one tile per column, in the order given
pub fn aggregate_kpis<S: AsRef<str>>(rows: &[MetricsRow], columns: &[S]) -> Vec<Kpi> {
    columns
        .iter()
        .map(|column| {
            let column = column.as_ref();
            Kpi {
                column: column.to_string(),
                label: column_label(column),
                total: column_total(rows, column),
                change_pct: percent_change(rows, column),
            }
        })
        .collect()
}

/// Sum of `column` over all rows, rounded to one decimal.
/// Unknown columns and absent readings count as zero.
pub fn column_total(rows: &[MetricsRow], column: &str) -> f64 {
    round1(rows.iter().map(|row| cell(row, column)).sum())
}

/// `(last - first) / first * 100`, rounded to one decimal.
///
/// `None` with fewer than two rows or when the first value is zero.
pub fn percent_change(rows: &[MetricsRow], column: &str) -> Option<f64> {
    if rows.len() < 2 {
        return None;
    }
    let first = rows.first().map(|row| cell(row, column))?;
    let last = rows.last().map(|row| cell(row, column))?;
    if first == 0.0 {
        return None;
    }
    Some(round1((last - first) / first * 100.0))
}

/// `performance_hours` -> `Performance hours`
pub fn column_label(column: &str) -> String {
    let spaced = column.replace('_', " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn cell(row: &MetricsRow, column: &str) -> f64 {
    row.value(column).unwrap_or(0.0)
}

fn round1(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    // keeps -0.0 out of the output
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(day: u32, doctor: f64, pt: f64) -> MetricsRow {
        let mut row = MetricsRow::empty(NaiveDate::from_ymd_opt(2025, 1, day).unwrap());
        row.doctor_hours = doctor;
        row.pt_hours = pt;
        row
    }

    #[test]
    fn test_totals_match_column_sums() {
        let rows = vec![row(1, 0.25, 1.0), row(2, 0.5, 1.04), row(3, 1.0, 0.0)];
        let kpis = aggregate_kpis(&rows, &DEFAULT_KPI_COLUMNS);
        assert_eq!(kpis.len(), 5);
        assert_eq!(kpis[0].column, "doctor_hours");
        assert_eq!(kpis[0].total, 1.8);
        assert_eq!(kpis[1].total, 2.0);
        assert_eq!(kpis[2].total, 0.0);
    }

    #[test]
    fn test_empty_table_yields_zeroes() {
        let kpis = aggregate_kpis(&[], &DEFAULT_KPI_COLUMNS);
        assert!(kpis.iter().all(|k| k.total == 0.0 && k.change_pct.is_none()));
    }

    #[test]
    fn test_unknown_column_counts_as_zero() {
        let rows = vec![row(1, 1.0, 1.0)];
        assert_eq!(column_total(&rows, "sleep_hours"), 0.0);
    }

    #[test]
    fn test_percent_change_first_to_last() {
        let rows = vec![row(1, 2.0, 0.0), row(2, 9.0, 0.0), row(3, 3.0, 4.0)];
        assert_eq!(percent_change(&rows, "doctor_hours"), Some(50.0));
        // first value zero
        assert_eq!(percent_change(&rows, "pt_hours"), None);
    }

    #[test]
    fn test_percent_change_needs_two_rows() {
        assert_eq!(percent_change(&[row(1, 2.0, 0.0)], "doctor_hours"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(column_label("doctor_hours"), "Doctor hours");
        assert_eq!(column_label("hrv"), "Hrv");
        assert_eq!(column_label(""), "");
    }
}
