use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("unparseable scan text: {0:?}")]
    Unparseable(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("cannot launch opener: {0}")]
    Io(#[from] std::io::Error),
}
