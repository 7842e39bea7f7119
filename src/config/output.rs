//! Output configuration

use std::path::PathBuf;

use serde::Deserialize;

/// Where rendered documents are written
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}
