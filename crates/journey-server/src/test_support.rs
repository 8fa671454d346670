//! Shared fixtures for unit tests

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use crate::adapters::files::{DECISIONS_FILE, MESSAGES_FILE, METRICS_FILE, PERSONA_FILE};
use crate::adapters::FileDatasetSource;
use crate::application::JourneyService;
use crate::config::ServerConfig;
use crate::AppState;

const MESSAGES: &str = r#"[
  {"id": 1, "speaker": "Rohan", "timestamp": "2025-01-21T10:00", "text": "Adjust workout routine."},
  {"id": 2, "speaker": "Advik", "timestamp": "2025-01-20T08:00", "text": "HRV trending down after travel."},
  {"id": 3, "speaker": "Dr. Warren", "timestamp": "2025-02-02T09:00", "text": "Start statin trial."},
  {"id": 4, "speaker": "Ruby", "timestamp": "2025-02-01T12:00", "text": "Lab slot booked for Saturday."}
]"#;

const DECISIONS: &str = r#"[
  {"title": "Swap intervals", "type": "Plan Update", "date": "2025-01-21",
   "rationale": "Recovery lagging", "source_message_ids": [1, 2], "pillar": "Autonomic"},
  {"title": "Start statin", "type": "Medication", "date": "2025-02-02",
   "rationale": "ApoB above target", "source_message_ids": [3, 99],
   "before": "No lipid therapy", "after": "Rosuvastatin 5mg"},
  {"title": "Book lipid panel", "date": "2025-02-01",
   "rationale": "Baseline before medication", "source_message_ids": [4]}
]"#;

const PERSONA: &str = r#"{
  "member": "Rohan Patel",
  "age": 46,
  "occupation": "Regional Head of Sales",
  "goals": ["Reduce heart disease risk", "Improve sleep quality"],
  "snapshot_date": "2025-08-01",
  "residence": "Singapore"
}"#;

const METRICS: &str = "date,doctor_hours,pt_hours,ruby_hours,performance_hours,nutrition_hours,hrv,fatigue
2025-01-20,0.5,1,0.25,0,0.5,42,3
2025-01-21,1,1.5,0.25,1,0,44,
2025-01-22,0,1,0.5,0,0.5,47,2
2025-01-23,1.5,0,0.25,1,0,x,1
";

/// Temp directory holding a small but complete dataset
pub fn write_fixture_dir() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join(MESSAGES_FILE), MESSAGES).expect("write messages");
    fs::write(dir.path().join(DECISIONS_FILE), DECISIONS).expect("write decisions");
    fs::write(dir.path().join(PERSONA_FILE), PERSONA).expect("write persona");
    fs::write(dir.path().join(METRICS_FILE), METRICS).expect("write metrics");
    dir
}

/// App state over the fixture dataset. Keep the `TempDir` alive for the test.
pub fn fixture_state() -> (TempDir, AppState) {
    let dir = write_fixture_dir();
    let config = ServerConfig::from_lookup(|_| None).expect("default config");
    let source = Arc::new(FileDatasetSource::new(dir.path()));
    let service = JourneyService::load(source, config.kpi_columns, config.conversation_limit)
        .expect("load fixture dataset");
    let state = AppState {
        journey: Arc::new(service),
    };
    (dir, state)
}
