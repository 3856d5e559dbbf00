pub mod config;
pub mod explain;
pub mod logging;

pub use config::{AppConfig, ConfigError, SelectConfig, SelectPartConfig};
pub use explain::{ExplainError, ExplainSource, ExplainedPlan};
pub use logging::{init_logging, LoggingConfig, LoggingError};
