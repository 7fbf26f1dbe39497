use crate::{
    annotation::Annotations,
    node::{NamedMetadataItem, NavigationProperty, Property},
};

///
/// EntityType
///
/// Key properties are stored as names of declared properties, so the key
/// and declared collections overlap; traversal reaches a key property once
/// through each.
///

#[derive(Clone, Debug)]
pub struct EntityType {
    name: String,
    annotations: Annotations,
    base_type: Option<String>,
    is_abstract: bool,
    key: Vec<String>,
    declared_properties: Vec<Property>,
    declared_navigation_properties: Vec<NavigationProperty>,
}

crate::node::impl_namespace_item!(EntityType, EntityType);

impl EntityType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Annotations::new(),
            base_type: None,
            is_abstract: false,
            key: Vec::new(),
            declared_properties: Vec::new(),
            declared_navigation_properties: Vec::new(),
        }
    }

    /// `base_type` is a qualified entity type name (`Namespace.Type`).
    #[must_use]
    pub fn with_base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = Some(base_type.into());
        self
    }

    #[must_use]
    pub const fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    #[must_use]
    pub fn with_key(mut self, property: impl Into<String>) -> Self {
        self.key.push(property.into());
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.declared_properties.push(property);
        self
    }

    #[must_use]
    pub fn with_navigation_property(mut self, property: NavigationProperty) -> Self {
        self.declared_navigation_properties.push(property);
        self
    }

    #[must_use]
    pub fn base_type(&self) -> Option<&str> {
        self.base_type.as_deref()
    }

    #[must_use]
    pub const fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Names of the declared properties forming the key, in key order.
    #[must_use]
    pub fn key(&self) -> &[String] {
        &self.key
    }

    #[must_use]
    pub const fn has_declared_key_properties(&self) -> bool {
        !self.key.is_empty()
    }

    #[must_use]
    pub fn declared_properties(&self) -> &[Property] {
        &self.declared_properties
    }

    #[must_use]
    pub const fn has_declared_properties(&self) -> bool {
        !self.declared_properties.is_empty()
    }

    #[must_use]
    pub fn declared_navigation_properties(&self) -> &[NavigationProperty] {
        &self.declared_navigation_properties
    }

    #[must_use]
    pub const fn has_declared_navigation_properties(&self) -> bool {
        !self.declared_navigation_properties.is_empty()
    }

    #[must_use]
    pub fn declared_property(&self, name: &str) -> Option<&Property> {
        self.declared_properties.iter().find(|p| p.name() == name)
    }

    #[must_use]
    pub fn declared_navigation_property(&self, name: &str) -> Option<&NavigationProperty> {
        self.declared_navigation_properties
            .iter()
            .find(|p| p.name() == name)
    }
}
