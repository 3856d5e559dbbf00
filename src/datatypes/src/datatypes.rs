use serde::{Deserialize, Serialize};

use crate::types::{ListType, StructType};

/// Data type abstraction trait
pub trait DataType: std::fmt::Debug + Send + Sync {
    /// Name of this data type
    fn name(&self) -> String;

    /// Whether values of this type contain other values
    fn is_nested(&self) -> bool {
        false
    }
}

/// Concrete data type of a destination field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcreteDatatype {
    /// Type of a field that only ever holds null
    Null,
    /// Boolean type
    Bool,
    /// 64-bit signed integer
    Int64,
    /// 64-bit floating point number
    Float64,
    /// String type
    String,
    /// List type, containing element type
    List(ListType),
    /// Struct type, containing field definitions
    Struct(StructType),
}

impl ConcreteDatatype {
    pub fn list(item_type: ConcreteDatatype) -> Self {
        ConcreteDatatype::List(ListType::new(item_type))
    }
}

impl DataType for ConcreteDatatype {
    fn name(&self) -> String {
        match self {
            ConcreteDatatype::Null => "Null".to_string(),
            ConcreteDatatype::Bool => "Boolean".to_string(),
            ConcreteDatatype::Int64 => "Int64".to_string(),
            ConcreteDatatype::Float64 => "Float64".to_string(),
            ConcreteDatatype::String => "String".to_string(),
            ConcreteDatatype::List(list) => list.name(),
            ConcreteDatatype::Struct(fields) => fields.name(),
        }
    }

    fn is_nested(&self) -> bool {
        matches!(
            self,
            ConcreteDatatype::List(_) | ConcreteDatatype::Struct(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StructField;

    #[test]
    fn nested_type_names() {
        let nested = ConcreteDatatype::list(ConcreteDatatype::Struct(StructType::new(vec![
            StructField::new("sku".to_string(), ConcreteDatatype::String, false),
            StructField::new("qty".to_string(), ConcreteDatatype::Int64, true),
        ])));
        assert_eq!(nested.name(), "List<Struct<sku: String, qty: Int64>>");
        assert!(nested.is_nested());
        assert!(!ConcreteDatatype::Float64.is_nested());
    }

    #[test]
    fn scalar_types_serialize_as_snake_case() {
        let json = serde_json::to_string(&ConcreteDatatype::Int64).unwrap();
        assert_eq!(json, "\"int64\"");
        let parsed: ConcreteDatatype = serde_json::from_str("\"bool\"").unwrap();
        assert_eq!(parsed, ConcreteDatatype::Bool);
    }
}
