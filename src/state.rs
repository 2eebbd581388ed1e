//! Shared application state for all routes.

use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    /// Directory holding one CSV dataset per entity plus derived files.
    pub data_dir: PathBuf,
}

impl AppState {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}
