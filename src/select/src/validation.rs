//! Name resolution and the checks shared by the builder and the plan codec.

use std::collections::HashSet;

use crate::error::SelectError;
use crate::part::{KEY_PATH, SelectKind, SelectPart};

/// Derive an output name from the last dot-segment of `path`.
///
/// An empty path, or one ending in `.`, derives the empty string.
pub fn derive_property_name(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or_default()
}

/// Resolve the output name of a new part: the explicit name when given,
/// otherwise the name derived from `path`.
pub(crate) fn resolve_property_name(property_name: Option<&str>, path: Option<&str>) -> String {
    match property_name {
        Some(name) => name.to_string(),
        None => derive_property_name(path.unwrap_or_default()).to_string(),
    }
}

/// Fail if `property_name` is empty or already used by one of `parts`.
pub fn ensure_unused(
    parts: &[SelectPart],
    kind: SelectKind,
    property_name: &str,
) -> Result<(), SelectError> {
    if property_name.is_empty() {
        return Err(SelectError::EmptyName { kind });
    }
    if parts
        .iter()
        .any(|part| part.property_name() == property_name)
    {
        return Err(SelectError::DuplicateName(property_name.to_string()));
    }
    Ok(())
}

/// Fail if a path-taking part was given an empty path.
pub(crate) fn ensure_path(property_name: &str, path: &str) -> Result<(), SelectError> {
    if path.is_empty() {
        return Err(SelectError::MissingPath(property_name.to_string()));
    }
    Ok(())
}

/// Full path recorded for a Key part: `Key`, or `Key.<path>` for a non-empty
/// member path.
pub(crate) fn key_path(path: Option<&str>) -> String {
    match path {
        Some(path) if !path.is_empty() => format!("{KEY_PATH}.{path}"),
        _ => KEY_PATH.to_string(),
    }
}

/// Fail unless `path` is `Key` or `Key.` followed by non-empty segments.
pub fn ensure_key_path(path: &str) -> Result<(), SelectError> {
    let rooted = path == KEY_PATH
        || path
            .strip_prefix(KEY_PATH)
            .and_then(|rest| rest.strip_prefix('.'))
            .is_some_and(|members| members.split('.').all(|segment| !segment.is_empty()));
    if !rooted {
        return Err(SelectError::InvalidKeyPath(path.to_string()));
    }
    Ok(())
}

/// Check a complete part list, as received from outside the builder.
pub fn validate_parts(parts: &[SelectPart]) -> Result<(), SelectError> {
    if parts.is_empty() {
        return Err(SelectError::EmptySpecification);
    }

    let mut seen = HashSet::with_capacity(parts.len());
    for part in parts {
        let name = part.property_name();
        if name.is_empty() {
            return Err(SelectError::EmptyName { kind: part.kind() });
        }
        if !seen.insert(name) {
            return Err(SelectError::DuplicateName(name.to_string()));
        }
        match part {
            SelectPart::Key { path, .. } => ensure_key_path(path)?,
            _ => {
                if let Some(path) = part.path() {
                    ensure_path(name, path)?;
                }
            }
        }
    }
    Ok(())
}
