use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::UtcTime;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level {level:?}: {reason}")]
    InvalidLevel { level: String, reason: String },
    #[error("failed to create log file appender: {0}")]
    Appender(String),
    #[error("failed to install tracing subscriber: {0}")]
    Init(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogOutput {
    #[default]
    Stdout,
    File,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

impl LogRotation {
    fn to_rotation(self) -> Rotation {
        match self {
            LogRotation::Minutely => Rotation::MINUTELY,
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    pub directory: PathBuf,
    pub file_name_prefix: String,
    pub rotation: LogRotation,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            file_name_prefix: "select-flow.log".to_string(),
            rotation: LogRotation::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`
    pub level: String,
    pub output: LogOutput,
    pub file: FileLoggingConfig,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            output: LogOutput::default(),
            file: FileLoggingConfig::default(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, LoggingError> {
        LevelFilter::from_str(self.level.trim()).map_err(|err| LoggingError::InvalidLevel {
            level: self.level.clone(),
            reason: err.to_string(),
        })
    }
}

/// Install the global tracing subscriber.
///
/// File output goes through a non-blocking writer; keep the returned guard
/// alive until exit or buffered lines are lost.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let level = config.level_filter()?;
    let timer = UtcTime::new(Rfc3339);

    match config.output {
        LogOutput::Stdout => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_timer(timer)
                .try_init()
                .map_err(|err| LoggingError::Init(err.to_string()))?;
            Ok(None)
        }
        LogOutput::File => {
            let appender = RollingFileAppender::builder()
                .rotation(config.file.rotation.to_rotation())
                .filename_prefix(config.file.file_name_prefix.as_str())
                .build(&config.file.directory)
                .map_err(|err| LoggingError::Appender(err.to_string()))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_timer(timer)
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .map_err(|err| LoggingError::Init(err.to_string()))?;
            Ok(Some(guard))
        }
    }
}
