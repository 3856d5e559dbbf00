mod list_type;
mod struct_type;

pub use list_type::ListType;
pub use struct_type::{StructField, StructType};
