use thiserror::Error;

use crate::part::SelectKind;

/// Contract violations raised while assembling a select specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("{kind} select property name cannot end up empty")]
    EmptyName { kind: SelectKind },
    #[error("{0} is already used")]
    DuplicateName(String),
    #[error("select part {0} requires a non-empty path")]
    MissingPath(String),
    #[error("key path must be Key or Key.<member path> without empty segments, got {0}")]
    InvalidKeyPath(String),
    #[error("{kind} select part does not take a path, got {path}")]
    UnexpectedPath { kind: SelectKind, path: String },
    #[error("{kind} select part does not take a collection handling policy")]
    UnexpectedCollectionHandling { kind: SelectKind },
    #[error("no select specified, please specify at least one select path")]
    EmptySpecification,
}
