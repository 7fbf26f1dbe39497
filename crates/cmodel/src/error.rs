use crate::{
    core::{config::ConfigError, error::VisitError},
    schema::error::SchemaError,
};
use thiserror::Error as ThisError;

///
/// Error
///
/// Umbrella over every failure the workspace can raise. Usable directly as
/// a visitor's `Error` type.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Visit(#[from] VisitError),
}
