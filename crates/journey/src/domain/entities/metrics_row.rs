//! MetricsRow - One day of internal care-team metrics
//!
//! Hour columns never fail to load: a missing column, an empty cell or a
//! non-numeric cell counts as 0.0. The optional readings (hrv, fatigue)
//! read as `None` in the same situations.

use chrono::NaiveDate;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_objects::Timestamp;

/// A single row of `internal_metrics.csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRow {
    #[serde(deserialize_with = "metric_date")]
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "hours")]
    pub doctor_hours: f64,
    #[serde(default, deserialize_with = "hours")]
    pub pt_hours: f64,
    #[serde(default, deserialize_with = "hours")]
    pub ruby_hours: f64,
    #[serde(default, deserialize_with = "hours")]
    pub performance_hours: f64,
    #[serde(default, deserialize_with = "hours")]
    pub nutrition_hours: f64,
    #[serde(default, deserialize_with = "reading")]
    pub hrv: Option<f64>,
    #[serde(default, deserialize_with = "reading")]
    pub fatigue: Option<f64>,
}

impl MetricsRow {
    /// Row for `date` with every hour column at zero
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            doctor_hours: 0.0,
            pt_hours: 0.0,
            ruby_hours: 0.0,
            performance_hours: 0.0,
            nutrition_hours: 0.0,
            hrv: None,
            fatigue: None,
        }
    }

    /// Look up a numeric column by its CSV header name
    pub fn value(&self, column: &str) -> Option<f64> {
        match column {
            "doctor_hours" => Some(self.doctor_hours),
            "pt_hours" => Some(self.pt_hours),
            "ruby_hours" => Some(self.ruby_hours),
            "performance_hours" => Some(self.performance_hours),
            "nutrition_hours" => Some(self.nutrition_hours),
            "hrv" => self.hrv,
            "fatigue" => self.fatigue,
            _ => None,
        }
    }
}

fn metric_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    Timestamp::deserialize(deserializer).map(|ts| ts.date())
}

fn hours<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(reading(deserializer)?.unwrap_or(0.0))
}

fn reading<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(CellVisitor)
}

/// Accepts whatever a CSV or JSON cell holds and keeps only finite numbers
struct CellVisitor;

impl<'de> Visitor<'de> for CellVisitor {
    type Value = Option<f64>;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a number, a numeric string, or an empty cell")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v).filter(|v| v.is_finite()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(v.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(CellVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_cells_from_json() {
        let row: MetricsRow = serde_json::from_str(
            r#"{"date":"2025-01-21","doctor_hours":1.5,"pt_hours":"2","ruby_hours":"n/a",
                "performance_hours":null,"hrv":"","fatigue":3}"#,
        )
        .unwrap();
        assert_eq!(row.doctor_hours, 1.5);
        assert_eq!(row.pt_hours, 2.0);
        assert_eq!(row.ruby_hours, 0.0);
        assert_eq!(row.performance_hours, 0.0);
        assert_eq!(row.nutrition_hours, 0.0);
        assert_eq!(row.hrv, None);
        assert_eq!(row.fatigue, Some(3.0));
    }

    #[test]
    fn test_datetime_in_date_column_keeps_the_day() {
        let row: MetricsRow =
            serde_json::from_str(r#"{"date":"2025-01-21 00:00:00"}"#).unwrap();
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2025, 1, 21).unwrap());
    }

    #[test]
    fn test_value_by_column_name() {
        let mut row = MetricsRow::empty(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        row.ruby_hours = 4.0;
        assert_eq!(row.value("ruby_hours"), Some(4.0));
        assert_eq!(row.value("hrv"), None);
        assert_eq!(row.value("sleep_hours"), None);
    }

    #[test]
    fn test_serializes_date_as_iso_day() {
        let row = MetricsRow::empty(NaiveDate::from_ymd_opt(2025, 2, 3).unwrap());
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["date"], "2025-02-03");
        assert!(json["hrv"].is_null());
    }
}
