use serde::{Deserialize, Serialize};

use crate::datatypes::ConcreteDatatype;

/// Schema of a destination column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name, matched against select property names
    pub name: String,
    /// Column data type
    pub data_type: ConcreteDatatype,
}

impl ColumnSchema {
    /// Create a new column schema
    pub fn new(name: String, data_type: ConcreteDatatype) -> Self {
        ColumnSchema { name, data_type }
    }
}
