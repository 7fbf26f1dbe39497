use crate::{
    annotation::Annotations,
    types::{EndRole, OperationAction, RelationshipMultiplicity},
};

///
/// AssociationType
///
/// Both ends are required and owned. The constraint is the only optional
/// relationship.
///

#[derive(Clone, Debug)]
pub struct AssociationType {
    name: String,
    annotations: Annotations,
    source_end: AssociationEnd,
    target_end: AssociationEnd,
    constraint: Option<AssociationConstraint>,
}

crate::node::impl_namespace_item!(AssociationType, AssociationType);

impl AssociationType {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        source_end: AssociationEnd,
        target_end: AssociationEnd,
    ) -> Self {
        Self {
            name: name.into(),
            annotations: Annotations::new(),
            source_end,
            target_end,
            constraint: None,
        }
    }

    #[must_use]
    pub fn with_constraint(mut self, constraint: AssociationConstraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    #[must_use]
    pub const fn source_end(&self) -> &AssociationEnd {
        &self.source_end
    }

    #[must_use]
    pub const fn target_end(&self) -> &AssociationEnd {
        &self.target_end
    }

    #[must_use]
    pub const fn end(&self, role: EndRole) -> &AssociationEnd {
        match role {
            EndRole::Source => &self.source_end,
            EndRole::Target => &self.target_end,
        }
    }

    #[must_use]
    pub const fn constraint(&self) -> Option<&AssociationConstraint> {
        self.constraint.as_ref()
    }

    #[must_use]
    pub const fn has_constraint(&self) -> bool {
        self.constraint.is_some()
    }
}

///
/// AssociationEnd
///

#[derive(Clone, Debug)]
pub struct AssociationEnd {
    name: String,
    annotations: Annotations,
    entity_type: String,
    multiplicity: RelationshipMultiplicity,
    delete_action: Option<OperationAction>,
}

crate::node::impl_named_item!(AssociationEnd, AssociationEnd);

impl AssociationEnd {
    /// `entity_type` names an entity type in the association's namespace.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        entity_type: impl Into<String>,
        multiplicity: RelationshipMultiplicity,
    ) -> Self {
        Self {
            name: name.into(),
            annotations: Annotations::new(),
            entity_type: entity_type.into(),
            multiplicity,
            delete_action: None,
        }
    }

    #[must_use]
    pub const fn with_delete_action(mut self, action: OperationAction) -> Self {
        self.delete_action = Some(action);
        self
    }

    #[must_use]
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    #[must_use]
    pub const fn multiplicity(&self) -> RelationshipMultiplicity {
        self.multiplicity
    }

    #[must_use]
    pub const fn delete_action(&self) -> Option<OperationAction> {
        self.delete_action
    }
}

///
/// AssociationConstraint
///
/// Referential constraint of an association. Both the dependent end and the
/// dependent properties are references: the end is a role of the owning
/// association, the properties are names declared on that end's entity type.
///

#[derive(Clone, Debug)]
pub struct AssociationConstraint {
    annotations: Annotations,
    dependent_end: EndRole,
    dependent_properties: Vec<String>,
}

crate::node::impl_metadata_item!(AssociationConstraint, AssociationConstraint);

impl AssociationConstraint {
    #[must_use]
    pub const fn new(dependent_end: EndRole) -> Self {
        Self {
            annotations: Annotations::new(),
            dependent_end,
            dependent_properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dependent_property(mut self, property: impl Into<String>) -> Self {
        self.dependent_properties.push(property.into());
        self
    }

    #[must_use]
    pub const fn dependent_end(&self) -> EndRole {
        self.dependent_end
    }

    #[must_use]
    pub fn dependent_properties(&self) -> &[String] {
        &self.dependent_properties
    }

    #[must_use]
    pub const fn has_dependent_properties(&self) -> bool {
        !self.dependent_properties.is_empty()
    }
}
