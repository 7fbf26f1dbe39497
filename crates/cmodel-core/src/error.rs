use cmodel_schema::node::NodeKind;
use thiserror::Error as ThisError;

///
/// VisitError
///
/// Failures the engine itself can raise; all are invalid-argument
/// conditions. Visitors with their own failure type convert these through
/// `From<VisitError>`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum VisitError {
    #[error("{owner} '{name}': {field} '{target}' does not resolve")]
    UnresolvedReference {
        owner: NodeKind,
        name: String,
        field: &'static str,
        target: String,
    },
}

impl VisitError {
    pub(crate) fn unresolved(
        owner: NodeKind,
        name: &str,
        field: &'static str,
        target: &str,
    ) -> Self {
        Self::UnresolvedReference {
            owner,
            name: name.to_string(),
            field,
            target: target.to_string(),
        }
    }
}
