mod column_schema;
mod schema_struct;

pub use column_schema::ColumnSchema;
pub use schema_struct::{Schema, SchemaError};
