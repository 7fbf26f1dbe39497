use crate::{
    annotation::Annotations,
    node::{FunctionImport, NamedMetadataItem},
};

///
/// EntityContainer
///

#[derive(Clone, Debug)]
pub struct EntityContainer {
    name: String,
    annotations: Annotations,
    entity_sets: Vec<EntitySet>,
    association_sets: Vec<AssociationSet>,
    function_imports: Vec<FunctionImport>,
}

crate::node::impl_named_item!(EntityContainer, EntityContainer);

impl EntityContainer {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Annotations::new(),
            entity_sets: Vec::new(),
            association_sets: Vec::new(),
            function_imports: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_entity_set(mut self, set: EntitySet) -> Self {
        self.entity_sets.push(set);
        self
    }

    #[must_use]
    pub fn with_association_set(mut self, set: AssociationSet) -> Self {
        self.association_sets.push(set);
        self
    }

    #[must_use]
    pub fn with_function_import(mut self, import: FunctionImport) -> Self {
        self.function_imports.push(import);
        self
    }

    #[must_use]
    pub fn entity_sets(&self) -> &[EntitySet] {
        &self.entity_sets
    }

    #[must_use]
    pub const fn has_entity_sets(&self) -> bool {
        !self.entity_sets.is_empty()
    }

    #[must_use]
    pub fn association_sets(&self) -> &[AssociationSet] {
        &self.association_sets
    }

    #[must_use]
    pub const fn has_association_sets(&self) -> bool {
        !self.association_sets.is_empty()
    }

    #[must_use]
    pub fn function_imports(&self) -> &[FunctionImport] {
        &self.function_imports
    }

    #[must_use]
    pub const fn has_function_imports(&self) -> bool {
        !self.function_imports.is_empty()
    }

    /// Resolve an entity set declared in this container by name.
    #[must_use]
    pub fn entity_set(&self, name: &str) -> Option<&EntitySet> {
        self.entity_sets.iter().find(|s| s.name() == name)
    }
}

///
/// EntitySet
///

#[derive(Clone, Debug)]
pub struct EntitySet {
    name: String,
    annotations: Annotations,
    element_type: String,
}

crate::node::impl_named_item!(EntitySet, EntitySet);

impl EntitySet {
    /// `element_type` is the qualified entity type name (`Namespace.Type`).
    #[must_use]
    pub fn new(name: impl Into<String>, element_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Annotations::new(),
            element_type: element_type.into(),
        }
    }

    #[must_use]
    pub fn element_type(&self) -> &str {
        &self.element_type
    }
}

///
/// AssociationSet
///
/// Source and target are names of entity sets in the same container. They
/// never own the sets they point at.
///

#[derive(Clone, Debug)]
pub struct AssociationSet {
    name: String,
    annotations: Annotations,
    association_type: Option<String>,
    source_set: String,
    target_set: String,
}

crate::node::impl_named_item!(AssociationSet, AssociationSet);

impl AssociationSet {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        source_set: impl Into<String>,
        target_set: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            annotations: Annotations::new(),
            association_type: None,
            source_set: source_set.into(),
            target_set: target_set.into(),
        }
    }

    /// Qualified association type name (`Namespace.Association`).
    #[must_use]
    pub fn with_association_type(mut self, association_type: impl Into<String>) -> Self {
        self.association_type = Some(association_type.into());
        self
    }

    #[must_use]
    pub fn association_type(&self) -> Option<&str> {
        self.association_type.as_deref()
    }

    #[must_use]
    pub fn source_set(&self) -> &str {
        &self.source_set
    }

    #[must_use]
    pub fn target_set(&self) -> &str {
        &self.target_set
    }
}
