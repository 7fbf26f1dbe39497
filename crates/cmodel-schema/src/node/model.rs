use crate::{
    annotation::Annotations,
    build::ModelBuilder,
    node::{AssociationType, EntityContainer, EntityType, NamedMetadataItem, Namespace},
};

/// Schema version assumed when the builder is not given one.
pub const DEFAULT_SCHEMA_VERSION: f64 = 3.0;

///
/// Model
///
/// Root of the metadata graph. Only obtainable through [`ModelBuilder`],
/// which guarantees every name-based reference inside resolves.
///

#[derive(Clone, Debug)]
pub struct Model {
    name: String,
    annotations: Annotations,
    version: f64,
    namespaces: Vec<Namespace>,
    containers: Vec<EntityContainer>,
}

crate::node::impl_named_item!(Model, Model);

impl Model {
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder::new(name)
    }

    pub(crate) const fn from_parts(
        name: String,
        annotations: Annotations,
        version: f64,
        namespaces: Vec<Namespace>,
        containers: Vec<EntityContainer>,
    ) -> Self {
        Self {
            name,
            annotations,
            version,
            namespaces,
            containers,
        }
    }

    #[must_use]
    pub const fn version(&self) -> f64 {
        self.version
    }

    #[must_use]
    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }

    #[must_use]
    pub const fn has_namespaces(&self) -> bool {
        !self.namespaces.is_empty()
    }

    #[must_use]
    pub fn containers(&self) -> &[EntityContainer] {
        &self.containers
    }

    #[must_use]
    pub const fn has_containers(&self) -> bool {
        !self.containers.is_empty()
    }

    #[must_use]
    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.iter().find(|n| n.name() == name)
    }

    #[must_use]
    pub fn container(&self, name: &str) -> Option<&EntityContainer> {
        self.containers.iter().find(|c| c.name() == name)
    }

    /// Resolve a qualified entity type name (`Namespace.Type`).
    #[must_use]
    pub fn entity_type(&self, qualified: &str) -> Option<&EntityType> {
        let (namespace, name) = split_qualified(qualified)?;

        self.namespace(namespace)?.entity_type(name)
    }

    /// Resolve a qualified association type name (`Namespace.Association`).
    #[must_use]
    pub fn association_type(&self, qualified: &str) -> Option<&AssociationType> {
        let (namespace, name) = split_qualified(qualified)?;

        self.namespace(namespace)?.association_type(name)
    }
}

// split_qualified
// namespaces may themselves be dotted, so the type name is the last segment
pub(crate) fn split_qualified(qualified: &str) -> Option<(&str, &str)> {
    let (namespace, name) = qualified.rsplit_once('.')?;
    if namespace.is_empty() || name.is_empty() {
        return None;
    }

    Some((namespace, name))
}
