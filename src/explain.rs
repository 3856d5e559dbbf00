//! A select source that renders the projection plan instead of running it.

use select::{ProjectionRequest, SelectError, SelectSource};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ExplainError {
    #[error(transparent)]
    Select(#[from] SelectError),
    #[error("failed to render plan: {0}")]
    Render(String),
}

/// What the explain source prints for a built specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainedPlan {
    pub source: String,
    /// Property names with no matching destination column
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unmapped_properties: Vec<String>,
    #[serde(flatten)]
    pub request: ProjectionRequest,
}

impl ExplainedPlan {
    pub fn new(source: impl Into<String>, request: ProjectionRequest) -> Self {
        let unmapped_properties = match &request.destination {
            Some(schema) => request
                .property_names()
                .filter(|name| !schema.contains_column(name))
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };
        Self {
            source: source.into(),
            unmapped_properties,
            request,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExplainSource {
    source_name: String,
    pretty: bool,
}

impl ExplainSource {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl SelectSource for ExplainSource {
    type Output = String;
    type Error = ExplainError;

    fn select(self, request: ProjectionRequest) -> Result<String, ExplainError> {
        let plan = ExplainedPlan::new(self.source_name, request);
        if !plan.unmapped_properties.is_empty() {
            warn!(
                source = %plan.source,
                unmapped = ?plan.unmapped_properties,
                "select properties missing from destination"
            );
        }
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&plan)
        } else {
            serde_json::to_string(&plan)
        };
        rendered.map_err(|err| ExplainError::Render(err.to_string()))
    }
}
