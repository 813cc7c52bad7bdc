use crate::checklist::DecodeError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io { path: PathBuf, source: std::io::Error },
    Decode { path: PathBuf, source: DecodeError },
    Output(serde_json::Error),
    /// Documents were read and checked but at least one was rejected.
    Rejected { documents: usize },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io { path, source } => {
                write!(f, "io error reading {}: {}", path.display(), source)
            }
            AppError::Decode { path, source } => {
                write!(f, "could not decode {}: {}", path.display(), source)
            }
            AppError::Output(err) => write!(f, "output error: {}", err),
            AppError::Rejected { documents } => {
                write!(f, "{} document(s) failed validation", documents)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io { source, .. } => Some(source),
            AppError::Decode { source, .. } => Some(source),
            AppError::Output(err) => Some(err),
            AppError::Rejected { .. } => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}
