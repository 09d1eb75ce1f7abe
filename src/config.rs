// src/config.rs
use crate::application::usecase::{DashboardSettings, NumericPolicy, DEFAULT_PREVIEW_LIMIT};
use crate::domain::errors::{AppError, AppResult};
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// View-model configuration
    pub dashboard: DashboardConfig,

    /// Where snapshots come from
    pub snapshot: SnapshotConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Rows shown in each preview panel
    pub preview_limit: usize,

    /// Treatment of missing transaction amounts/quantities
    pub numeric_policy: NumericPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Path of the JSON snapshot file
    pub path: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (e.g., "info", "debug", "warn", "error")
    pub level: String,

    /// Log to file
    pub to_file: bool,

    /// Log file path
    pub file_path: Option<String>,
}

impl LoggingConfig {
    pub fn level_filter(&self) -> AppResult<log::LevelFilter> {
        match self.level.to_lowercase().as_str() {
            "trace" => Ok(log::LevelFilter::Trace),
            "debug" => Ok(log::LevelFilter::Debug),
            "info" => Ok(log::LevelFilter::Info),
            "warn" => Ok(log::LevelFilter::Warn),
            "error" => Ok(log::LevelFilter::Error),
            other => Err(AppError::Config(format!("Unknown log level: {}", other))),
        }
    }
}

impl DashboardConfig {
    pub fn settings(&self) -> DashboardSettings {
        DashboardSettings {
            preview_limit: self.preview_limit,
            numeric_policy: self.numeric_policy,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let preview_limit = match lookup("DASHBOARD_PREVIEW_LIMIT") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| {
                AppError::Config(format!("Invalid DASHBOARD_PREVIEW_LIMIT {:?}: {}", raw, e))
            })?,
            None => DEFAULT_PREVIEW_LIMIT,
        };

        let numeric_policy = match lookup("DASHBOARD_NUMERIC_POLICY") {
            Some(raw) => raw.trim().parse::<NumericPolicy>().map_err(AppError::Config)?,
            None => NumericPolicy::Strict,
        };

        let config = Config {
            dashboard: DashboardConfig {
                preview_limit,
                numeric_policy,
            },
            snapshot: SnapshotConfig {
                path: lookup("SNAPSHOT_PATH").unwrap_or_else(|| "snapshot.json".to_string()),
            },
            logging: LoggingConfig {
                level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                to_file: lookup("LOG_TO_FILE")
                    .unwrap_or_else(|| "false".to_string())
                    .parse()
                    .unwrap_or(false),
                file_path: lookup("LOG_FILE_PATH"),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let mut file = File::open(path).map_err(|e| {
            AppError::Config(format!("Failed to open config file: {}", e))
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|e| {
            AppError::Config(format!("Failed to read config file: {}", e))
        })?;

        let config: Config = serde_json::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AppError::Config(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, contents).map_err(|e| {
            AppError::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.dashboard.preview_limit == 0 {
            return Err(AppError::Config(
                "Preview limit must be greater than zero".to_string(),
            ));
        }
        if self.logging.to_file && self.logging.file_path.is_none() {
            return Err(AppError::Config(
                "LOG_TO_FILE is set but LOG_FILE_PATH is missing".to_string(),
            ));
        }
        self.logging.level_filter()?;
        Ok(())
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self) -> AppResult<()> {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(self.logging.level_filter()?);

        if self.logging.to_file {
            if let Some(file_path) = &self.logging.file_path {
                let file = File::create(file_path).map_err(|e| {
                    AppError::Config(format!("Failed to create log file: {}", e))
                })?;

                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
        }

        builder.try_init().map_err(|e| {
            AppError::Config(format!("Failed to initialize logger: {}", e))
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dashboard: DashboardConfig {
                preview_limit: DEFAULT_PREVIEW_LIMIT,
                numeric_policy: NumericPolicy::Strict,
            },
            snapshot: SnapshotConfig {
                path: "snapshot.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                to_file: false,
                file_path: None,
            },
        }
    }
}
