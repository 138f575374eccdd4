// src/error.rs

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can stop a spiral run.
#[derive(Debug)]
pub enum SpiralError {
    /// Parameters rejected before any generation happens.
    InvalidConfiguration(String),
    /// Reading or writing a file failed.
    Io { path: PathBuf, source: io::Error },
    /// A settings file exists but is not valid JSON for `SpiralConfig`.
    ConfigFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl SpiralError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        SpiralError::InvalidConfiguration(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SpiralError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for SpiralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpiralError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            SpiralError::Io { path, source } => write!(f, "I/O error at {:?}: {}", path, source),
            SpiralError::ConfigFormat { path, source } => {
                write!(f, "Error parsing config {:?}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for SpiralError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpiralError::InvalidConfiguration(_) => None,
            SpiralError::Io { source, .. } => Some(source),
            SpiralError::ConfigFormat { source, .. } => Some(source),
        }
    }
}
