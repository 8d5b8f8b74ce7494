use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report title is required")]
    MissingTitle,

    #[error("Config directory not found at {0}. Run 'salesreport init' to create it.")]
    ConfigNotFound(PathBuf),

    #[error("Preset file not found: {0}")]
    PresetFileNotFound(PathBuf),

    #[error("Failed to parse preset file {path}: {source}")]
    PresetParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Preset '{0}' not found in presets.toml")]
    PresetNotFound(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD (e.g., 2024-01-31)")]
    InvalidDate(String),

    #[error("--from and --to must be provided together")]
    IncompleteDateRange,

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
