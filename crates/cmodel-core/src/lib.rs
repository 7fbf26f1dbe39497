//! Traversal engine for the conceptual model graph.
//!
//! The [`Visitor`] trait gives one override point per capability tier, per
//! node kind and per child collection. Its defaults perform a deterministic,
//! declaration-ordered descent over an immutable [`Model`].
//!
//! [`Visitor`]: visit::Visitor
//! [`Model`]: cmodel_schema::node::Model

pub mod config;
pub mod error;
pub mod visit;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::{ConfigError, FunctionsConfig, TraversalConfig},
        error::VisitError,
        visit::{
            Dispatch, DispatchLog, DispatchPoint, FunctionVisitor, Visitor, traverse,
            visit_collection,
        },
    };
}
