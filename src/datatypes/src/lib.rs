pub mod datatypes;
pub mod schema;
pub mod types;

pub use datatypes::{ConcreteDatatype, DataType};
pub use schema::{ColumnSchema, Schema, SchemaError};
pub use types::{ListType, StructField, StructType};
