//! Environment-driven configuration.

use std::path::PathBuf;

pub struct AppConfig {
    /// Where entity datasets and their derived files live.
    pub data_dir: PathBuf,
    /// Where the append-only request log lives.
    pub log_dir: PathBuf,
    pub bind_addr: String,
}

impl AppConfig {
    /// Reads `LOCADORA_DATA_DIR` (default `data`), `LOCADORA_LOG_DIR`
    /// (default `logs`) and `LOCADORA_BIND` (default `0.0.0.0:5000`).
    pub fn from_env() -> Self {
        let data_dir = std::env::var("LOCADORA_DATA_DIR").unwrap_or_else(|_| "data".into());
        let log_dir = std::env::var("LOCADORA_LOG_DIR").unwrap_or_else(|_| "logs".into());
        let bind_addr = std::env::var("LOCADORA_BIND").unwrap_or_else(|_| "0.0.0.0:5000".into());
        Self {
            data_dir: data_dir.into(),
            log_dir: log_dir.into(),
            bind_addr,
        }
    }
}
