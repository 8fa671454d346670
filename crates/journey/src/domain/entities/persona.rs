//! Persona - The member profile card
//!
//! Every field is optional in the source file. Missing, null or blank text
//! fields read as [`PLACEHOLDER`], missing goals as an empty list.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Shown in place of a persona field the source did not provide
pub const PLACEHOLDER: &str = "N/A";

/// Persona - single member record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    #[serde(default = "placeholder", deserialize_with = "lenient_text")]
    pub member: String,
    /// Kept as text: sources carry either `46` or `"46"`
    #[serde(default = "placeholder", deserialize_with = "lenient_text")]
    pub age: String,
    #[serde(default = "placeholder", deserialize_with = "lenient_text")]
    pub occupation: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub goals: Vec<String>,
    #[serde(default = "placeholder", deserialize_with = "lenient_text")]
    pub snapshot_date: String,
    #[serde(default = "placeholder", deserialize_with = "lenient_text")]
    pub executive_summary: String,
    /// Keys outside the profile card, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            member: placeholder(),
            age: placeholder(),
            occupation: placeholder(),
            goals: Vec::new(),
            snapshot_date: placeholder(),
            executive_summary: placeholder(),
            extra: Map::new(),
        }
    }
}

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => placeholder(),
    })
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s],
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record() {
        let p: Persona = serde_json::from_str(
            r#"{
                "member": "Rohan Patel",
                "age": 46,
                "occupation": "Regional Head of Sales",
                "goals": ["Reduce heart disease risk", "Improve sleep"],
                "snapshot_date": "2025-08-01",
                "executive_summary": "Frequent traveller with elevated ApoB."
            }"#,
        )
        .unwrap();
        assert_eq!(p.member, "Rohan Patel");
        assert_eq!(p.age, "46");
        assert_eq!(p.goals.len(), 2);
        assert!(p.extra.is_empty());
    }

    #[test]
    fn test_missing_and_null_fields_use_placeholders() {
        let p: Persona =
            serde_json::from_str(r#"{"member": "Rohan", "occupation": null, "age": ""}"#).unwrap();
        assert_eq!(p.member, "Rohan");
        assert_eq!(p.occupation, PLACEHOLDER);
        assert_eq!(p.age, PLACEHOLDER);
        assert_eq!(p.snapshot_date, PLACEHOLDER);
        assert!(p.goals.is_empty());
    }

    #[test]
    fn test_extra_keys_round_trip() {
        let p: Persona =
            serde_json::from_str(r#"{"member": "Rohan", "residence": "Singapore"}"#).unwrap();
        let out = serde_json::to_value(&p).unwrap();
        assert_eq!(out["residence"], "Singapore");
        assert_eq!(out["executive_summary"], PLACEHOLDER);
    }
}
