//! File implementation of DatasetSource
//!
//! Reads the four datasets from one directory:
//! `messages.json`, `decisions.json`, `persona.json`, `internal_metrics.csv`.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use journey::{DatasetSource, Decision, DomainError, JourneyDataset, Message, MetricsRow, Persona};

pub const MESSAGES_FILE: &str = "messages.json";
pub const DECISIONS_FILE: &str = "decisions.json";
pub const PERSONA_FILE: &str = "persona.json";
pub const METRICS_FILE: &str = "internal_metrics.csv";

/// Loads the journey datasets from a data directory
pub struct FileDatasetSource {
    data_dir: PathBuf,
}

impl FileDatasetSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn open(&self, dataset: &str, file_name: &str) -> Result<File, DomainError> {
        let path = self.data_dir.join(file_name);
        File::open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DomainError::data_missing(dataset, &path),
            _ => DomainError::malformed(dataset, format!("{}: {}", path.display(), e)),
        })
    }

    fn read_json<T: DeserializeOwned>(&self, dataset: &str, file_name: &str) -> Result<T, DomainError> {
        let file = self.open(dataset, file_name)?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| DomainError::malformed(dataset, e))
    }

    fn read_metrics(&self) -> Result<Vec<MetricsRow>, DomainError> {
        let file = self.open("metrics", METRICS_FILE)?;
        // short rows are padded by the serde defaults on MetricsRow
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| DomainError::malformed("metrics", e))?;
        if !headers.iter().any(|h| h == "date") {
            return Err(DomainError::malformed("metrics", "missing `date` column"));
        }

        reader
            .deserialize::<MetricsRow>()
            .enumerate()
            .map(|(i, row)| {
                row.map_err(|e| DomainError::malformed("metrics", format!("row {}: {}", i + 1, e)))
            })
            .collect()
    }
}

impl DatasetSource for FileDatasetSource {
    fn describe(&self) -> String {
        self.data_dir.display().to_string()
    }

    fn load(&self) -> Result<JourneyDataset, DomainError> {
        let messages: Vec<Message> = self.read_json("messages", MESSAGES_FILE)?;
        let decisions: Vec<Decision> = self.read_json("decisions", DECISIONS_FILE)?;
        let persona: Persona = self.read_json("persona", PERSONA_FILE)?;
        let metrics = self.read_metrics()?;

        tracing::debug!(
            "Read {} messages, {} decisions, {} metrics rows from {}",
            messages.len(),
            decisions.len(),
            metrics.len(),
            self.describe()
        );

        Ok(JourneyDataset::new(messages, decisions, persona, metrics))
    }
}
