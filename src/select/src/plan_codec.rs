//! JSON form of a [`ProjectionRequest`], for engines that live out of process.

use thiserror::Error;

use crate::error::SelectError;
use crate::source::ProjectionRequest;

#[derive(Debug, Error)]
pub enum PlanCodecError {
    #[error("serialize error: {0}")]
    Serialize(String),
    #[error("deserialize error: {0}")]
    Deserialize(String),
    #[error("invalid plan: {0}")]
    Invalid(#[from] SelectError),
}

pub fn encode_request(request: &ProjectionRequest) -> Result<String, PlanCodecError> {
    serde_json::to_string(request).map_err(|err| PlanCodecError::Serialize(err.to_string()))
}

pub fn encode_request_pretty(request: &ProjectionRequest) -> Result<String, PlanCodecError> {
    serde_json::to_string_pretty(request).map_err(|err| PlanCodecError::Serialize(err.to_string()))
}

/// Parse a plan and check it holds the same invariants the builder enforces.
pub fn decode_request(raw: &str) -> Result<ProjectionRequest, PlanCodecError> {
    let request: ProjectionRequest =
        serde_json::from_str(raw).map_err(|err| PlanCodecError::Deserialize(err.to_string()))?;
    request.validate()?;
    Ok(request)
}
