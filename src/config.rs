use std::fs;
use std::path::{Path, PathBuf};

use datatypes::Schema;
use select::{SelectBuilder, SelectCollectionHandling, SelectError, SelectKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::LoggingConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid select specification: {0}")]
    Select(#[from] SelectError),
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub select: SelectConfig,
}

impl AppConfig {
    pub fn load_required(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&raw)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(raw)?)
    }
}

/// Declarative select specification.
///
/// ```yaml
/// select:
///   source: orders
///   null_checking: true
///   parts:
///     - kind: key
///       path: region.code
///     - kind: sum
///       path: amount
///       name: total
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Name of the data source the specification runs against
    pub source: String,
    pub null_checking: bool,
    /// Destination columns, in output order
    pub destination: Option<Schema>,
    pub parts: Vec<SelectPartConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectPartConfig {
    pub kind: SelectKind,
    #[serde(default)]
    pub path: Option<String>,
    /// Output property name; derived from `path` when omitted
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub collection_handling: SelectCollectionHandling,
}

impl SelectConfig {
    /// Replay the configured parts onto `builder`, in file order.
    pub fn apply<S>(&self, builder: SelectBuilder<S>) -> Result<SelectBuilder<S>, SelectError> {
        let mut builder = builder.null_checking(self.null_checking);
        if let Some(schema) = &self.destination {
            builder = builder.destination(schema.clone());
        }
        for part in &self.parts {
            builder = builder.part(
                part.kind,
                part.name.as_deref(),
                part.path.as_deref(),
                part.collection_handling,
            )?;
        }
        Ok(builder)
    }

    pub fn builder<S>(&self, source: S) -> Result<SelectBuilder<S>, ConfigError> {
        Ok(self.apply(SelectBuilder::new(source))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogOutput;
    use datatypes::ConcreteDatatype;
    use select::SelectPart;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ORDERS_BY_REGION: &str = r#"
logging:
  level: debug
select:
  source: orders
  null_checking: true
  destination:
    - name: code
      data_type: string
    - name: total
      data_type: float64
    - name: lines
      data_type: !list
        item_type: int64
  parts:
    - kind: key
      path: region.code
    - kind: sum
      path: amount
      name: total
    - kind: path_to_list
      path: order.lines
      collection_handling: flatten
"#;

    #[test]
    fn loads_select_specification_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(ORDERS_BY_REGION.as_bytes()).unwrap();

        let config = AppConfig::load_required(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.output, LogOutput::Stdout);
        assert_eq!(config.select.source, "orders");
        assert_eq!(config.select.parts.len(), 3);

        let destination = config.select.destination.as_ref().unwrap();
        assert_eq!(
            destination
                .column_schema_by_name("lines")
                .map(|column| &column.data_type),
            Some(&ConcreteDatatype::list(ConcreteDatatype::Int64))
        );

        let builder = config.select.builder(()).unwrap();
        assert!(builder.is_null_checking_enabled());
        assert_eq!(builder.destination_schema(), Some(destination));
        assert_eq!(
            builder.parts()[0],
            SelectPart::Key {
                property_name: "code".to_string(),
                path: "Key.region.code".to_string(),
            }
        );
        assert_eq!(
            builder.parts()[2].collection_handling(),
            Some(SelectCollectionHandling::Flatten)
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        match AppConfig::load_required(&path) {
            Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_kind_is_parse_error() {
        let raw = "select:\n  parts:\n    - kind: median\n      path: amount\n";
        assert!(matches!(
            AppConfig::from_yaml_str(raw),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn configured_parts_get_builder_validation() {
        let raw = r#"
select:
  parts:
    - kind: path
      path: customer.total
    - kind: count
      name: total
"#;
        let config = AppConfig::from_yaml_str(raw).unwrap();
        match config.select.builder(()) {
            Err(ConfigError::Select(SelectError::DuplicateName(name))) => {
                assert_eq!(name, "total")
            }
            other => panic!("expected DuplicateName, got {other:?}"),
        }
    }

    #[test]
    fn path_on_a_pathless_kind_is_rejected() {
        let raw = r#"
select:
  parts:
    - kind: to_list
      name: lines
      path: order.lines
"#;
        let config = AppConfig::from_yaml_str(raw).unwrap();
        match config.select.builder(()) {
            Err(ConfigError::Select(SelectError::UnexpectedPath { kind, path })) => {
                assert_eq!(kind, SelectKind::ToList);
                assert_eq!(path, "order.lines");
            }
            other => panic!("expected UnexpectedPath, got {other:?}"),
        }
    }

    #[test]
    fn repeated_destination_column_is_parse_error() {
        let raw = r#"
select:
  destination:
    - name: total
      data_type: float64
    - name: total
      data_type: int64
"#;
        match AppConfig::from_yaml_str(raw) {
            Err(ConfigError::Parse(err)) => {
                assert!(err.to_string().contains("duplicate column name: total"))
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = AppConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.select.builder(()).unwrap().is_empty());
    }
}
