//! DecisionType - Classification of a health-plan decision
//!
//! Labels outside the known set are kept as `Other(label)` rather than
//! rejected, and a decision with no type at all becomes `Other("Other")`.

use serde::{Deserialize, Serialize};

const OTHER_LABEL: &str = "Other";

/// Decision type classification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum DecisionType {
    Medication,
    Therapy,
    DiagnosticTest,
    PlanUpdate,
    LifestyleChange,
    Logistics,
    Other(String),
}

impl DecisionType {
    /// Human readable label, as shown on the timeline
    pub fn label(&self) -> &str {
        match self {
            DecisionType::Medication => "Medication",
            DecisionType::Therapy => "Therapy",
            DecisionType::DiagnosticTest => "Diagnostic Test",
            DecisionType::PlanUpdate => "Plan Update",
            DecisionType::LifestyleChange => "Lifestyle Change",
            DecisionType::Logistics => "Logistics",
            DecisionType::Other(label) => label,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DecisionType::Medication => "💊",
            DecisionType::Therapy => "🧘",
            DecisionType::DiagnosticTest => "🧪",
            DecisionType::PlanUpdate => "📋",
            DecisionType::LifestyleChange => "🥗",
            DecisionType::Logistics => "🚚",
            DecisionType::Other(_) => "📌",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, DecisionType::Other(_))
    }

    /// Case-insensitive comparison on the label
    pub fn matches(&self, other: &DecisionType) -> bool {
        self.label().eq_ignore_ascii_case(other.label())
    }
}

impl Default for DecisionType {
    fn default() -> Self {
        DecisionType::Other(OTHER_LABEL.to_string())
    }
}

impl std::fmt::Display for DecisionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for DecisionType {
    fn from(s: &str) -> Self {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "medication" => DecisionType::Medication,
            "therapy" => DecisionType::Therapy,
            "diagnostictest" => DecisionType::DiagnosticTest,
            "planupdate" => DecisionType::PlanUpdate,
            "lifestylechange" => DecisionType::LifestyleChange,
            "logistics" => DecisionType::Logistics,
            "" => DecisionType::default(),
            _ => DecisionType::Other(s.trim().to_string()),
        }
    }
}

impl From<String> for DecisionType {
    fn from(s: String) -> Self {
        DecisionType::from(s.as_str())
    }
}

impl From<Option<String>> for DecisionType {
    fn from(s: Option<String>) -> Self {
        s.map(DecisionType::from).unwrap_or_default()
    }
}

impl From<DecisionType> for String {
    fn from(t: DecisionType) -> Self {
        t.label().to_string()
    }
}
