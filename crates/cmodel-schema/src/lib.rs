//! Conceptual model metadata graph: node kinds, capability tiers, the
//! annotation store, and the builder that freezes a validated [`Model`].
//!
//! [`Model`]: node::Model

pub mod annotation;
pub mod build;
pub mod error;
pub mod node;
pub mod types;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        annotation::{Annotation, AnnotationValue, Annotations},
        build::ModelBuilder,
        error::SchemaError,
        node::*,
        types::{
            EndRole, OperationAction, ParameterMode, PrimitiveTypeKind, RelationshipMultiplicity,
        },
    };
}
