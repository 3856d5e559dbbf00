//! Fluent builder for dynamic select/projection specifications.
//!
//! A [`SelectBuilder`] collects validated [`SelectPart`]s against a
//! [`SelectSource`] and hands them over as a [`ProjectionRequest`] when built.
//! The source is the projection engine: it resolves paths, builds the
//! projection and runs it.

pub mod builder;
pub mod error;
pub mod part;
pub mod plan_codec;
pub mod source;
pub mod validation;

pub use builder::SelectBuilder;
pub use error::SelectError;
pub use part::{KEY_PATH, SelectCollectionHandling, SelectKind, SelectPart};
pub use plan_codec::{PlanCodecError, decode_request, encode_request, encode_request_pretty};
pub use source::{ProjectionRequest, SelectSource};
pub use validation::derive_property_name;
