use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not split into the expected number of `|` fields.
    #[error(
        "Parse error in {} at line {line}: expected {expected} fields, found {actual}",
        .path.display()
    )]
    FieldCount {
        path: PathBuf,
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RosterError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures caused by the data file contents rather than access to it.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::FieldCount { .. })
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
