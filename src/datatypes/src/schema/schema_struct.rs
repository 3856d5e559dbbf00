use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ColumnSchema;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
}

/// Schema describing the shape a projection is materialized into.
///
/// Serializes as its ordered column list; the name index is rebuilt on load
/// and a list that repeats a column name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColumnSchema>", into = "Vec<ColumnSchema>")]
pub struct Schema {
    /// Column schemas
    column_schemas: Vec<ColumnSchema>,
    /// Mapping from column name to index
    name_to_index: HashMap<String, usize>,
}

impl Schema {
    /// Create a new schema from a vector of column schemas
    ///
    /// # Panics
    ///
    /// Panics if two columns share a name; use [`Schema::try_new`] for
    /// column lists that come from outside the program.
    pub fn new(column_schemas: Vec<ColumnSchema>) -> Self {
        match Self::try_new(column_schemas) {
            Ok(schema) => schema,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a new schema, failing if a column name repeats
    pub fn try_new(column_schemas: Vec<ColumnSchema>) -> Result<Self, SchemaError> {
        let mut name_to_index = HashMap::with_capacity(column_schemas.len());
        for (index, column_schema) in column_schemas.iter().enumerate() {
            if name_to_index
                .insert(column_schema.name.clone(), index)
                .is_some()
            {
                return Err(SchemaError::DuplicateColumn(column_schema.name.clone()));
            }
        }

        Ok(Schema {
            column_schemas,
            name_to_index,
        })
    }

    /// Get column schema by name
    pub fn column_schema_by_name(&self, name: &str) -> Option<&ColumnSchema> {
        self.name_to_index
            .get(name)
            .map(|index| &self.column_schemas[*index])
    }

    /// Get all column schemas
    pub fn column_schemas(&self) -> &[ColumnSchema] {
        &self.column_schemas
    }

    /// Check if schema contains a column with the given name
    pub fn contains_column(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.column_schemas.iter().map(|column| column.name.as_str())
    }
}

impl TryFrom<Vec<ColumnSchema>> for Schema {
    type Error = SchemaError;

    fn try_from(column_schemas: Vec<ColumnSchema>) -> Result<Self, SchemaError> {
        Schema::try_new(column_schemas)
    }
}

impl From<Schema> for Vec<ColumnSchema> {
    fn from(schema: Schema) -> Self {
        schema.column_schemas
    }
}
