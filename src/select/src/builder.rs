use datatypes::Schema;
use tracing::{debug, info, warn};

use crate::error::SelectError;
use crate::part::{SelectCollectionHandling, SelectKind, SelectPart};
use crate::source::{ProjectionRequest, SelectSource};
use crate::validation::{
    ensure_key_path, ensure_path, ensure_unused, key_path, resolve_property_name,
};

/// Fluent builder for a select specification over a [`SelectSource`].
///
/// Every `add` style method validates the resolved output name before the
/// part is recorded: it must be non-empty and not used by an earlier part.
/// When no name is given it is derived from the last segment of the path.
///
/// ```ignore
/// let grouped = SelectBuilder::new(source)
///     .key(None, Some("region.code"))?
///     .sum("amount", Some("total"))?
///     .count("orders")?
///     .null_checking(true)
///     .build()?;
/// ```
#[derive(Debug)]
pub struct SelectBuilder<S> {
    source: S,
    parts: Vec<SelectPart>,
    destination: Option<Schema>,
    null_checking: bool,
}

impl<S> SelectBuilder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            parts: Vec::new(),
            destination: None,
            null_checking: false,
        }
    }

    /// Select a member of the grouping key.
    ///
    /// The recorded path is `Key` when `path` is absent or empty, otherwise
    /// `Key.<path>`; a member path with an empty segment is rejected.
    pub fn key(mut self, property_name: Option<&str>, path: Option<&str>) -> Result<Self, SelectError> {
        let property_name = self.claim_name(SelectKind::Key, property_name, path)?;
        let path = key_path(path);
        ensure_key_path(&path)?;
        self.push(SelectPart::Key {
            property_name,
            path,
        });
        Ok(self)
    }

    /// Select a member of the current element.
    pub fn path(mut self, path: &str, property_name: Option<&str>) -> Result<Self, SelectError> {
        let property_name = self.claim_name(SelectKind::Path, property_name, Some(path))?;
        ensure_path(&property_name, path)?;
        self.push(SelectPart::Path {
            property_name,
            path: path.to_string(),
        });
        Ok(self)
    }

    pub fn count(mut self, property_name: &str) -> Result<Self, SelectError> {
        let property_name = self.claim_name(SelectKind::Count, Some(property_name), None)?;
        self.push(SelectPart::Count { property_name });
        Ok(self)
    }

    pub fn long_count(mut self, property_name: &str) -> Result<Self, SelectError> {
        let property_name = self.claim_name(SelectKind::LongCount, Some(property_name), None)?;
        self.push(SelectPart::LongCount { property_name });
        Ok(self)
    }

    pub fn sum(mut self, path: &str, property_name: Option<&str>) -> Result<Self, SelectError> {
        let property_name = self.claim_name(SelectKind::Sum, property_name, Some(path))?;
        ensure_path(&property_name, path)?;
        self.push(SelectPart::Sum {
            property_name,
            path: path.to_string(),
        });
        Ok(self)
    }

    pub fn average(mut self, path: &str, property_name: Option<&str>) -> Result<Self, SelectError> {
        let property_name = self.claim_name(SelectKind::Average, property_name, Some(path))?;
        ensure_path(&property_name, path)?;
        self.push(SelectPart::Average {
            property_name,
            path: path.to_string(),
        });
        Ok(self)
    }

    /// Materialize the whole current scope as a nested list.
    pub fn to_list(mut self, property_name: &str) -> Result<Self, SelectError> {
        let property_name = self.claim_name(SelectKind::ToList, Some(property_name), None)?;
        self.push(SelectPart::ToList { property_name });
        Ok(self)
    }

    /// Materialize the collection reachable through `path` as a nested list.
    pub fn path_to_list(
        mut self,
        path: &str,
        property_name: Option<&str>,
        collection_handling: SelectCollectionHandling,
    ) -> Result<Self, SelectError> {
        let property_name = self.claim_name(SelectKind::PathToList, property_name, Some(path))?;
        ensure_path(&property_name, path)?;
        self.push(SelectPart::PathToList {
            property_name,
            path: path.to_string(),
            collection_handling,
        });
        Ok(self)
    }

    /// Add a part of any kind.
    ///
    /// Fails when `kind` has no use for a given argument: a path on `Count`,
    /// `LongCount` or `ToList`, or a non-default collection handling on any
    /// kind but `PathToList`.
    pub fn part(
        self,
        kind: SelectKind,
        property_name: Option<&str>,
        path: Option<&str>,
        collection_handling: SelectCollectionHandling,
    ) -> Result<Self, SelectError> {
        if let Some(path) = path.filter(|_| !kind.takes_path()) {
            return Err(SelectError::UnexpectedPath {
                kind,
                path: path.to_string(),
            });
        }
        if kind != SelectKind::PathToList
            && collection_handling != SelectCollectionHandling::default()
        {
            return Err(SelectError::UnexpectedCollectionHandling { kind });
        }
        let path_or_empty = path.unwrap_or_default();
        let name_or_empty = property_name.unwrap_or_default();
        match kind {
            SelectKind::Key => self.key(property_name, path),
            SelectKind::Path => self.path(path_or_empty, property_name),
            SelectKind::Count => self.count(name_or_empty),
            SelectKind::LongCount => self.long_count(name_or_empty),
            SelectKind::Sum => self.sum(path_or_empty, property_name),
            SelectKind::Average => self.average(path_or_empty, property_name),
            SelectKind::ToList => self.to_list(name_or_empty),
            SelectKind::PathToList => {
                self.path_to_list(path_or_empty, property_name, collection_handling)
            }
        }
    }

    pub fn null_checking(mut self, enabled: bool) -> Self {
        self.null_checking = enabled;
        self
    }

    /// Shape the projection is materialized into.
    pub fn destination(mut self, schema: Schema) -> Self {
        self.destination = Some(schema);
        self
    }

    pub fn parts(&self) -> &[SelectPart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn destination_schema(&self) -> Option<&Schema> {
        self.destination.as_ref()
    }

    pub fn is_null_checking_enabled(&self) -> bool {
        self.null_checking
    }

    fn claim_name(
        &self,
        kind: SelectKind,
        property_name: Option<&str>,
        path: Option<&str>,
    ) -> Result<String, SelectError> {
        let property_name = resolve_property_name(property_name, path);
        ensure_unused(&self.parts, kind, &property_name).inspect_err(|err| {
            warn!(%kind, path = path.unwrap_or_default(), error = %err, "rejected select part");
        })?;
        Ok(property_name)
    }

    fn push(&mut self, part: SelectPart) {
        debug!(
            kind = %part.kind(),
            property_name = part.property_name(),
            path = part.path().unwrap_or_default(),
            "registered select part"
        );
        self.parts.push(part);
    }
}

impl<S: SelectSource> SelectBuilder<S> {
    /// Hand the specification to the source's projection engine.
    ///
    /// Consumes the builder, so no part can be added afterwards.
    pub fn build(self) -> Result<S::Output, S::Error> {
        if self.parts.is_empty() {
            return Err(SelectError::EmptySpecification.into());
        }
        info!(
            parts = self.parts.len(),
            null_checking = self.null_checking,
            has_destination = self.destination.is_some(),
            "building projection"
        );
        let request = ProjectionRequest::new(self.parts, self.destination, self.null_checking);
        self.source.select(request)
    }
}
