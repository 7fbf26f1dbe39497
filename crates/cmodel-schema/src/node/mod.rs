mod association;
mod complex_type;
mod container;
mod entity_type;
mod enum_type;
mod function;
mod model;
mod namespace;
mod property;
mod type_reference;

pub use association::*;
pub use complex_type::*;
pub use container::*;
pub use entity_type::*;
pub use enum_type::*;
pub use function::*;
pub use model::*;
pub use namespace::*;
pub use property::*;
pub use type_reference::*;

pub(crate) use model::split_qualified;

use crate::annotation::Annotations;
use derive_more::Display;

///
/// NodeKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NodeKind {
    Model,
    Namespace,
    ComplexType,
    EntityType,
    EnumType,
    EnumTypeMember,
    AssociationType,
    AssociationEnd,
    AssociationConstraint,
    EntityContainer,
    EntitySet,
    AssociationSet,
    Property,
    NavigationProperty,
    TypeReference,
    PrimitiveTypeFacets,
    FunctionGroup,
    FunctionOverload,
    FunctionImport,
    FunctionParameter,
}

// ============================================================================
// Capability tiers
// ============================================================================

///
/// DataModelItem
/// Base tier; every node kind carries it.
///

pub trait DataModelItem {
    fn kind(&self) -> NodeKind;
}

///
/// MetadataItem
///

pub trait MetadataItem: DataModelItem {
    fn annotations(&self) -> &Annotations;

    fn has_annotations(&self) -> bool {
        !self.annotations().is_empty()
    }
}

///
/// NamedMetadataItem
/// Name is unique within the declaring scope.
///

pub trait NamedMetadataItem: MetadataItem {
    fn name(&self) -> &str;
}

///
/// NamespaceItem
/// Marker for named items declared directly under a namespace.
///

pub trait NamespaceItem: NamedMetadataItem {}

// ============================================================================
// Impl helpers
// ============================================================================

// Implements the metadata tier and a consuming `with_annotation` setter.
macro_rules! impl_metadata_item {
    ($ty:ty, $kind:ident) => {
        impl $crate::node::DataModelItem for $ty {
            fn kind(&self) -> $crate::node::NodeKind {
                $crate::node::NodeKind::$kind
            }
        }

        impl $crate::node::MetadataItem for $ty {
            fn annotations(&self) -> &$crate::annotation::Annotations {
                &self.annotations
            }
        }

        impl $ty {
            #[must_use]
            pub fn with_annotation(
                mut self,
                key: impl Into<String>,
                value: $crate::annotation::AnnotationValue,
            ) -> Self {
                self.annotations.insert(key, value);
                self
            }
        }
    };
}

macro_rules! impl_named_item {
    ($ty:ty, $kind:ident) => {
        $crate::node::impl_metadata_item!($ty, $kind);

        impl $crate::node::NamedMetadataItem for $ty {
            fn name(&self) -> &str {
                &self.name
            }
        }
    };
}

macro_rules! impl_namespace_item {
    ($ty:ty, $kind:ident) => {
        $crate::node::impl_named_item!($ty, $kind);

        impl $crate::node::NamespaceItem for $ty {}
    };
}

pub(crate) use {impl_metadata_item, impl_named_item, impl_namespace_item};

