use crate::{node::NodeKind, types::PrimitiveTypeKind};
use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Raised by the model builder. Every variant is an invalid-argument
/// condition: the graph handed to the builder cannot become a `Model`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum SchemaError {
    #[error("{owner} '{name}': {field} '{target}' does not resolve")]
    DanglingReference {
        owner: NodeKind,
        name: String,
        field: &'static str,
        target: String,
    },

    #[error("duplicate {kind} name '{name}' in '{scope}'")]
    DuplicateName {
        kind: NodeKind,
        scope: String,
        name: String,
    },

    #[error("{kind} in '{scope}' has an empty name")]
    EmptyName { kind: NodeKind, scope: String },

    #[error("{owner} '{name}': facet {facet} does not apply to {target}")]
    InvalidFacet {
        owner: NodeKind,
        name: String,
        facet: &'static str,
        target: String,
    },

    #[error("enum type '{name}' cannot use non-integral underlying type {underlying}")]
    NonIntegralEnum {
        name: String,
        underlying: PrimitiveTypeKind,
    },
}

impl SchemaError {
    pub(crate) fn dangling(
        owner: NodeKind,
        name: &str,
        field: &'static str,
        target: &str,
    ) -> Self {
        Self::DanglingReference {
            owner,
            name: name.to_string(),
            field,
            target: target.to_string(),
        }
    }
}
