//! Model assembly.
//!
//! Nodes are put together with their consuming `with_*` setters; the
//! builder collects the top-level pieces and is the only way to obtain a
//! [`Model`]. Nothing can be changed once `build` succeeds.

mod validate;

use crate::{
    annotation::{AnnotationValue, Annotations},
    error::SchemaError,
    node::{DEFAULT_SCHEMA_VERSION, EntityContainer, Model, Namespace},
};
use tracing::debug;

///
/// ModelBuilder
///

#[derive(Debug)]
pub struct ModelBuilder {
    name: String,
    annotations: Annotations,
    version: f64,
    namespaces: Vec<Namespace>,
    containers: Vec<EntityContainer>,
}

impl ModelBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Annotations::new(),
            version: DEFAULT_SCHEMA_VERSION,
            namespaces: Vec::new(),
            containers: Vec::new(),
        }
    }

    #[must_use]
    pub const fn version(mut self, version: f64) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn annotation(mut self, key: impl Into<String>, value: AnnotationValue) -> Self {
        self.annotations.insert(key, value);
        self
    }

    #[must_use]
    pub fn namespace(mut self, namespace: Namespace) -> Self {
        self.namespaces.push(namespace);
        self
    }

    #[must_use]
    pub fn container(mut self, container: EntityContainer) -> Self {
        self.containers.push(container);
        self
    }

    /// Freeze the graph, failing at the first invalid name or reference.
    pub fn build(self) -> Result<Model, SchemaError> {
        let model = Model::from_parts(
            self.name,
            self.annotations,
            self.version,
            self.namespaces,
            self.containers,
        );

        validate::validate_model(&model)?;

        debug!(
            namespaces = model.namespaces().len(),
            containers = model.containers().len(),
            "model built"
        );

        Ok(model)
    }
}
