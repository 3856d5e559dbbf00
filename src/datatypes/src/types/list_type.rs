use serde::{Deserialize, Serialize};

use crate::datatypes::{ConcreteDatatype, DataType};

/// List type, the destination of `ToList` and `PathToList` parts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListType {
    /// Element datatype, to distinguish empty lists of different datatypes
    item_type: Box<ConcreteDatatype>,
}

impl ListType {
    pub fn new(item_type: ConcreteDatatype) -> Self {
        Self {
            item_type: Box::new(item_type),
        }
    }
}

impl DataType for ListType {
    fn name(&self) -> String {
        format!("List<{}>", self.item_type.name())
    }

    fn is_nested(&self) -> bool {
        true
    }
}
