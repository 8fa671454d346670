//! Server configuration
//!
//! Read from the environment (a `.env` file is loaded first by `main`).

use std::net::SocketAddr;
use std::path::PathBuf;

use journey::{DEFAULT_CONVERSATION_LIMIT, DEFAULT_KPI_COLUMNS};
use thiserror::Error;

pub const DATA_DIR_VAR: &str = "JOURNEY_DATA_DIR";
pub const BIND_ADDR_VAR: &str = "JOURNEY_BIND_ADDR";
pub const KPI_COLUMNS_VAR: &str = "JOURNEY_KPI_COLUMNS";
pub const CONVERSATION_LIMIT_VAR: &str = "JOURNEY_CONVERSATION_LIMIT";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the Journey server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory holding messages.json, decisions.json, persona.json, internal_metrics.csv
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    /// Metrics columns summed into KPI tiles
    pub kpi_columns: Vec<String>,
    /// Default length of the chat log view
    pub conversation_limit: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any key/value lookup; unset or blank keys take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let data_dir = get(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let bind_raw = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        let kpi_columns = match get(KPI_COLUMNS_VAR) {
            Some(raw) => {
                let columns: Vec<String> = raw
                    .split(',')
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect();
                if columns.is_empty() {
                    return Err(ConfigError::Invalid {
                        var: KPI_COLUMNS_VAR,
                        value: raw,
                        reason: "no column names given".to_string(),
                    });
                }
                columns
            }
            None => default_kpi_columns(),
        };

        let conversation_limit = match get(CONVERSATION_LIMIT_VAR) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        var: CONVERSATION_LIMIT_VAR,
                        value: raw,
                        reason: "must be at least 1".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        var: CONVERSATION_LIMIT_VAR,
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_CONVERSATION_LIMIT,
        };

        Ok(Self {
            data_dir,
            bind_addr,
            kpi_columns,
            conversation_limit,
        })
    }
}

fn default_kpi_columns() -> Vec<String> {
    DEFAULT_KPI_COLUMNS.iter().map(|c| c.to_string()).collect()
}
