use crate::{
    annotation::Annotations,
    node::{
        AssociationType, ComplexType, EntityType, EnumType, FunctionGroup, NamedMetadataItem,
    },
};

///
/// Namespace
///

#[derive(Clone, Debug)]
pub struct Namespace {
    name: String,
    annotations: Annotations,
    complex_types: Vec<ComplexType>,
    entity_types: Vec<EntityType>,
    enum_types: Vec<EnumType>,
    association_types: Vec<AssociationType>,
    function_groups: Vec<FunctionGroup>,
}

crate::node::impl_named_item!(Namespace, Namespace);

impl Namespace {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Annotations::new(),
            complex_types: Vec::new(),
            entity_types: Vec::new(),
            enum_types: Vec::new(),
            association_types: Vec::new(),
            function_groups: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_complex_type(mut self, item: ComplexType) -> Self {
        self.complex_types.push(item);
        self
    }

    #[must_use]
    pub fn with_entity_type(mut self, item: EntityType) -> Self {
        self.entity_types.push(item);
        self
    }

    #[must_use]
    pub fn with_enum_type(mut self, item: EnumType) -> Self {
        self.enum_types.push(item);
        self
    }

    #[must_use]
    pub fn with_association_type(mut self, item: AssociationType) -> Self {
        self.association_types.push(item);
        self
    }

    #[must_use]
    pub fn with_function_group(mut self, item: FunctionGroup) -> Self {
        self.function_groups.push(item);
        self
    }

    //
    // collections
    //

    #[must_use]
    pub fn complex_types(&self) -> &[ComplexType] {
        &self.complex_types
    }

    #[must_use]
    pub const fn has_complex_types(&self) -> bool {
        !self.complex_types.is_empty()
    }

    #[must_use]
    pub fn entity_types(&self) -> &[EntityType] {
        &self.entity_types
    }

    #[must_use]
    pub const fn has_entity_types(&self) -> bool {
        !self.entity_types.is_empty()
    }

    #[must_use]
    pub fn enum_types(&self) -> &[EnumType] {
        &self.enum_types
    }

    #[must_use]
    pub const fn has_enum_types(&self) -> bool {
        !self.enum_types.is_empty()
    }

    #[must_use]
    pub fn association_types(&self) -> &[AssociationType] {
        &self.association_types
    }

    #[must_use]
    pub const fn has_association_types(&self) -> bool {
        !self.association_types.is_empty()
    }

    #[must_use]
    pub fn function_groups(&self) -> &[FunctionGroup] {
        &self.function_groups
    }

    #[must_use]
    pub const fn has_function_groups(&self) -> bool {
        !self.function_groups.is_empty()
    }

    //
    // lookups
    //

    #[must_use]
    pub fn entity_type(&self, name: &str) -> Option<&EntityType> {
        self.entity_types.iter().find(|t| t.name() == name)
    }

    #[must_use]
    pub fn complex_type(&self, name: &str) -> Option<&ComplexType> {
        self.complex_types.iter().find(|t| t.name() == name)
    }

    #[must_use]
    pub fn enum_type(&self, name: &str) -> Option<&EnumType> {
        self.enum_types.iter().find(|t| t.name() == name)
    }

    #[must_use]
    pub fn association_type(&self, name: &str) -> Option<&AssociationType> {
        self.association_types.iter().find(|t| t.name() == name)
    }

    /// Names of every namespace item, in declaration order by collection.
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        let complex = self.complex_types.iter().map(NamedMetadataItem::name);
        let entity = self.entity_types.iter().map(NamedMetadataItem::name);
        let enums = self.enum_types.iter().map(NamedMetadataItem::name);
        let assoc = self.association_types.iter().map(NamedMetadataItem::name);
        let groups = self.function_groups.iter().map(NamedMetadataItem::name);

        complex.chain(entity).chain(enums).chain(assoc).chain(groups)
    }
}
