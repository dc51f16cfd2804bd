use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::ConfigError;

pub const CONFIG_FILE_NAME: &str = "scanform.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScannerConfig {
    /// Directory `scan_data.xlsx` is written to.
    pub export_dir: PathBuf,
    pub sheet_title: String,
    /// Fallback when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            sheet_title: "Сканированные данные".to_string(),
            log_filter: "scanform=info".to_string(),
        }
    }
}

impl ScannerConfig {
    /// Reads the config at `path`, or returns defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }
}
