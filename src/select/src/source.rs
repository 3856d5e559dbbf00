use datatypes::Schema;
use serde::{Deserialize, Serialize};

use crate::error::SelectError;
use crate::part::SelectPart;
use crate::validation::validate_parts;

/// Everything the projection engine receives from a built specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// Parts in insertion order; output fields follow this order
    pub parts: Vec<SelectPart>,
    /// Shape to materialize into; the engine picks one when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Schema>,
    /// Short-circuit absent intermediate path segments instead of faulting
    #[serde(default)]
    pub null_checking: bool,
}

impl ProjectionRequest {
    pub fn new(parts: Vec<SelectPart>, destination: Option<Schema>, null_checking: bool) -> Self {
        Self {
            parts,
            destination,
            null_checking,
        }
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(SelectPart::property_name)
    }

    pub fn validate(&self) -> Result<(), SelectError> {
        validate_parts(&self.parts)
    }
}

/// A queryable data source together with the engine that projects it.
///
/// `select` owns path resolution, expression construction and execution;
/// its errors reach the caller of `SelectBuilder::build` unchanged.
pub trait SelectSource {
    type Output;
    type Error: From<SelectError>;

    fn select(self, request: ProjectionRequest) -> Result<Self::Output, Self::Error>;
}
