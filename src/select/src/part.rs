use std::fmt;

use serde::{Deserialize, Serialize};

/// Root segment of every path recorded for a [`SelectKind::Key`] part.
pub const KEY_PATH: &str = "Key";

/// How an output field is computed from the source sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectKind {
    /// Member of the grouping key
    Key,
    /// Direct member projection
    Path,
    /// Number of elements in the current group
    Count,
    /// 64-bit number of elements in the current group
    LongCount,
    /// Numeric sum over a path
    Sum,
    /// Numeric average over a path
    Average,
    /// The current group materialized as a nested list
    ToList,
    /// A nested collection reachable through a path, as a list
    PathToList,
}

impl SelectKind {
    /// Whether parts of this kind carry a member path
    pub fn takes_path(self) -> bool {
        matches!(
            self,
            SelectKind::Key
                | SelectKind::Path
                | SelectKind::Sum
                | SelectKind::Average
                | SelectKind::PathToList
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SelectKind::Key => "Key",
            SelectKind::Path => "Path",
            SelectKind::Count => "Count",
            SelectKind::LongCount => "LongCount",
            SelectKind::Sum => "Sum",
            SelectKind::Average => "Average",
            SelectKind::ToList => "ToList",
            SelectKind::PathToList => "PathToList",
        }
    }
}

impl fmt::Display for SelectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policy for nested collections projected by a `PathToList` part.
///
/// Interpreted by the projection engine only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectCollectionHandling {
    #[default]
    LeaveAsIs,
    Flatten,
}

/// One projection instruction: how a single output field is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectPart {
    Key {
        property_name: String,
        /// Full path including the `Key` root, e.g. `Key.region.code`
        path: String,
    },
    Path {
        property_name: String,
        path: String,
    },
    Count {
        property_name: String,
    },
    LongCount {
        property_name: String,
    },
    Sum {
        property_name: String,
        path: String,
    },
    Average {
        property_name: String,
        path: String,
    },
    ToList {
        property_name: String,
    },
    PathToList {
        property_name: String,
        path: String,
        #[serde(default)]
        collection_handling: SelectCollectionHandling,
    },
}

impl SelectPart {
    pub fn kind(&self) -> SelectKind {
        match self {
            SelectPart::Key { .. } => SelectKind::Key,
            SelectPart::Path { .. } => SelectKind::Path,
            SelectPart::Count { .. } => SelectKind::Count,
            SelectPart::LongCount { .. } => SelectKind::LongCount,
            SelectPart::Sum { .. } => SelectKind::Sum,
            SelectPart::Average { .. } => SelectKind::Average,
            SelectPart::ToList { .. } => SelectKind::ToList,
            SelectPart::PathToList { .. } => SelectKind::PathToList,
        }
    }

    /// Name of the output field this part produces
    pub fn property_name(&self) -> &str {
        match self {
            SelectPart::Key { property_name, .. }
            | SelectPart::Path { property_name, .. }
            | SelectPart::Count { property_name }
            | SelectPart::LongCount { property_name }
            | SelectPart::Sum { property_name, .. }
            | SelectPart::Average { property_name, .. }
            | SelectPart::ToList { property_name }
            | SelectPart::PathToList { property_name, .. } => property_name,
        }
    }

    /// Member path of this part; `None` for kinds that work on the whole scope
    pub fn path(&self) -> Option<&str> {
        match self {
            SelectPart::Key { path, .. }
            | SelectPart::Path { path, .. }
            | SelectPart::Sum { path, .. }
            | SelectPart::Average { path, .. }
            | SelectPart::PathToList { path, .. } => Some(path),
            SelectPart::Count { .. } | SelectPart::LongCount { .. } | SelectPart::ToList { .. } => {
                None
            }
        }
    }

    pub fn collection_handling(&self) -> Option<SelectCollectionHandling> {
        match self {
            SelectPart::PathToList {
                collection_handling,
                ..
            } => Some(*collection_handling),
            _ => None,
        }
    }
}
