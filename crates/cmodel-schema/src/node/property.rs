use crate::{annotation::Annotations, node::TypeReference, types::EndRole};

///
/// Property
///

#[derive(Clone, Debug)]
pub struct Property {
    name: String,
    annotations: Annotations,
    property_type: TypeReference,
}

crate::node::impl_named_item!(Property, Property);

impl Property {
    #[must_use]
    pub fn new(name: impl Into<String>, property_type: TypeReference) -> Self {
        Self {
            name: name.into(),
            annotations: Annotations::new(),
            property_type,
        }
    }

    #[must_use]
    pub const fn property_type(&self) -> &TypeReference {
        &self.property_type
    }
}

///
/// NavigationProperty
///
/// Relationship property of an entity type. Points at an association
/// type declared in the same namespace and at the roles it travels
/// between; it owns no type reference of its own.
///

#[derive(Clone, Debug)]
pub struct NavigationProperty {
    name: String,
    annotations: Annotations,
    association: String,
    from_end: EndRole,
}

crate::node::impl_named_item!(NavigationProperty, NavigationProperty);

impl NavigationProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, association: impl Into<String>, from_end: EndRole) -> Self {
        Self {
            name: name.into(),
            annotations: Annotations::new(),
            association: association.into(),
            from_end,
        }
    }

    #[must_use]
    pub fn association(&self) -> &str {
        &self.association
    }

    #[must_use]
    pub const fn from_end(&self) -> EndRole {
        self.from_end
    }

    #[must_use]
    pub const fn to_end(&self) -> EndRole {
        self.from_end.opposite()
    }
}
