use crate::{
    annotation::Annotations,
    node::{DataModelItem, NodeKind},
    types::PrimitiveTypeKind,
};

///
/// ReferencedType
/// Non-primitive targets are qualified names (`Namespace.Type`).
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReferencedType {
    Primitive(PrimitiveTypeKind),
    Complex(String),
    Enum(String),
    Entity(String),
}

///
/// TypeReference
///

#[derive(Clone, Debug)]
pub struct TypeReference {
    annotations: Annotations,
    referenced: ReferencedType,
    nullable: Option<bool>,
    facets: Option<PrimitiveTypeFacets>,
}

crate::node::impl_metadata_item!(TypeReference, TypeReference);

impl TypeReference {
    #[must_use]
    pub fn new(referenced: ReferencedType) -> Self {
        Self {
            annotations: Annotations::new(),
            referenced,
            nullable: None,
            facets: None,
        }
    }

    #[must_use]
    pub fn primitive(kind: PrimitiveTypeKind) -> Self {
        Self::new(ReferencedType::Primitive(kind))
    }

    #[must_use]
    pub const fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    #[must_use]
    pub fn with_facets(mut self, facets: PrimitiveTypeFacets) -> Self {
        self.facets = Some(facets);
        self
    }

    #[must_use]
    pub const fn referenced(&self) -> &ReferencedType {
        &self.referenced
    }

    #[must_use]
    pub const fn nullable(&self) -> Option<bool> {
        self.nullable
    }

    #[must_use]
    pub const fn primitive_type_facets(&self) -> Option<&PrimitiveTypeFacets> {
        self.facets.as_ref()
    }

    #[must_use]
    pub const fn has_facets(&self) -> bool {
        self.facets.is_some()
    }
}

///
/// PrimitiveTypeFacets
///
/// Constraint bag refining a primitive type reference. Carries no
/// annotations, so it only participates in the base tier.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PrimitiveTypeFacets {
    pub max_length: Option<u32>,
    pub is_max_length: Option<bool>,
    pub is_unicode: Option<bool>,
    pub is_fixed_length: Option<bool>,
    pub precision: Option<u8>,
    pub scale: Option<u8>,
    pub srid: Option<i32>,
    pub is_variable_srid: Option<bool>,
}

impl PrimitiveTypeFacets {
    #[must_use]
    pub fn max_length(len: u32) -> Self {
        Self {
            max_length: Some(len),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn decimal(precision: u8, scale: u8) -> Self {
        Self {
            precision: Some(precision),
            scale: Some(scale),
            ..Self::default()
        }
    }
}

impl DataModelItem for PrimitiveTypeFacets {
    fn kind(&self) -> NodeKind {
        NodeKind::PrimitiveTypeFacets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_presence_tracks_option() {
        let plain = TypeReference::primitive(PrimitiveTypeKind::Int32);
        assert!(!plain.has_facets());
        assert!(plain.primitive_type_facets().is_none());

        let sized = TypeReference::primitive(PrimitiveTypeKind::String)
            .with_facets(PrimitiveTypeFacets::max_length(128));
        assert!(sized.has_facets());
        assert_eq!(
            sized.primitive_type_facets().and_then(|f| f.max_length),
            Some(128)
        );
    }
}
