use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PubyError {
    #[error("pubspec.yaml not found at {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Failed to parse pubspec.yaml: {0}")]
    ManifestParsing(String),

    #[error("Network request failed: {0}")]
    Network(String),

    #[error("There's a conflict between included and excluded packages: {}", .0.join(", "))]
    ConfigConflict(Vec<String>),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PubyError>;
