use crate::{annotation::Annotations, node::Property};

///
/// ComplexType
///

#[derive(Clone, Debug)]
pub struct ComplexType {
    name: String,
    annotations: Annotations,
    is_abstract: bool,
    declared_properties: Vec<Property>,
}

crate::node::impl_namespace_item!(ComplexType, ComplexType);

impl ComplexType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Annotations::new(),
            is_abstract: false,
            declared_properties: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.declared_properties.push(property);
        self
    }

    #[must_use]
    pub const fn is_abstract(&self) -> bool {
        self.is_abstract
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
    pub fn declared_property(&self, name: &str) -> Option<&Property> {
        use crate::node::NamedMetadataItem;

        self.declared_properties.iter().find(|p| p.name() == name)
    }
}
