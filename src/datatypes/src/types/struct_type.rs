use serde::{Deserialize, Serialize};

use crate::datatypes::{ConcreteDatatype, DataType};

/// A named field of a struct type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructField {
    name: String,
    data_type: ConcreteDatatype,
    #[serde(default)]
    nullable: bool,
}

impl StructField {
    pub fn new(name: String, data_type: ConcreteDatatype, nullable: bool) -> Self {
        Self {
            name,
            data_type,
            nullable,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &ConcreteDatatype {
        &self.data_type
    }
}

/// Struct type, an ordered list of fields
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructType {
    fields: Vec<StructField>,
}

impl StructType {
    pub fn new(fields: Vec<StructField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[StructField] {
        &self.fields
    }
}

impl DataType for StructType {
    fn name(&self) -> String {
        let fields = self
            .fields
            .iter()
            .map(|field| format!("{}: {}", field.name(), field.data_type().name()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Struct<{fields}>")
    }

    fn is_nested(&self) -> bool {
        true
    }
}
