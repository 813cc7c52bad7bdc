use std::env;
use std::fmt;
use std::str::FromStr;

use crate::checklist::cache::DEFAULT_CACHE_CAPACITY;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// How validation reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidOutputFormat {
                value: value.to_string(),
            }),
        }
    }
}

/// Top-level configuration for the checklist tooling.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub validation: ValidationConfig,
    pub output: OutputFormat,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let cache_capacity = match env::var("CHECKLIST_CACHE_CAPACITY") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or(ConfigError::InvalidCacheCapacity)?,
            Err(_) => DEFAULT_CACHE_CAPACITY,
        };

        let output = match env::var("CHECKLIST_OUTPUT") {
            Ok(raw) => raw.parse()?,
            Err(_) => OutputFormat::default(),
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            validation: ValidationConfig { cache_capacity },
            output,
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Settings for template/answer validation runs.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    pub cache_capacity: usize,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidCacheCapacity,
    InvalidOutputFormat { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCacheCapacity => {
                write!(f, "CHECKLIST_CACHE_CAPACITY must be a positive integer")
            }
            ConfigError::InvalidOutputFormat { value } => {
                write!(f, "output format '{value}' must be 'text' or 'json'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
