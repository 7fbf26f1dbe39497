//! ## Crate layout
//! - `schema`: node kinds, capability tiers, annotations, and the model builder.
//! - `core`: the visitor, its default walks, traversal config, and the
//!   dispatch recorder.
//!
//! The `prelude` module brings in everything needed to build a model and
//! write a visitor over it.

pub use cmodel_core as core;
pub use cmodel_schema as schema;

mod error;

pub use error::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        core::{
            prelude::*,
            visit::{function, walk},
        },
        schema::prelude::*,
    };
}
