//! Default descent for every [`Visitor`] method.
//!
//! Each `walk_*` function first runs the enclosing tier for its node, then
//! dispatches the owned child collections whose presence flag is set, in
//! declaration order. Reference edges are looked up by name on the owning
//! node and dispatched again; they never count as ownership.

use crate::{
    error::VisitError,
    visit::{Visitor, visit_collection},
};
use cmodel_schema::{
    annotation::Annotations,
    node::{
        AssociationConstraint, AssociationEnd, AssociationSet, AssociationType, ComplexType,
        DataModelItem, EntityContainer, EntitySet, EntityType, EnumType, EnumTypeMember,
        MetadataItem, Model, NamedMetadataItem, Namespace, NamespaceItem, NavigationProperty,
        NodeKind, PrimitiveTypeFacets, Property, TypeReference,
    },
};
use tracing::trace;

// trace_named
fn trace_named(item: &dyn NamedMetadataItem) {
    trace!(kind = %item.kind(), name = item.name(), "visit");
}

// trace_item
fn trace_item(item: &dyn DataModelItem) {
    trace!(kind = %item.kind(), "visit");
}

// ============================================================================
// Tiers
// ============================================================================

/// Data model item tier first, then the annotations when present.
pub fn walk_metadata_item<V: Visitor + ?Sized>(
    v: &mut V,
    item: &dyn MetadataItem,
) -> Result<(), V::Error> {
    v.visit_data_model_item(item)?;

    if item.has_annotations() {
        v.visit_annotations(item, item.annotations())?;
    }

    Ok(())
}

pub fn walk_named_item<V: Visitor + ?Sized>(
    v: &mut V,
    item: &dyn NamedMetadataItem,
) -> Result<(), V::Error> {
    v.visit_metadata_item(item)
}

pub fn walk_namespace_item<V: Visitor + ?Sized>(
    v: &mut V,
    item: &dyn NamespaceItem,
) -> Result<(), V::Error> {
    v.visit_named_item(item)
}

pub fn walk_annotations<V: Visitor + ?Sized>(
    v: &mut V,
    item: &dyn MetadataItem,
    annotations: &Annotations,
) -> Result<(), V::Error> {
    visit_collection(annotations.as_slice(), |annotation| {
        v.visit_annotation(item, annotation)
    })
}

// ============================================================================
// Model
// ============================================================================

pub fn walk_model<V: Visitor + ?Sized>(v: &mut V, item: &Model) -> Result<(), V::Error> {
    trace_named(item);
    v.visit_named_item(item)?;

    if item.has_namespaces() {
        v.visit_namespaces(item, item.namespaces())?;
    }
    if item.has_containers() {
        v.visit_entity_containers(item, item.containers())?;
    }

    Ok(())
}

pub fn walk_namespaces<V: Visitor + ?Sized>(
    v: &mut V,
    _model: &Model,
    namespaces: &[Namespace],
) -> Result<(), V::Error> {
    visit_collection(namespaces, |ns| v.visit_namespace(ns))
}

pub fn walk_entity_containers<V: Visitor + ?Sized>(
    v: &mut V,
    _model: &Model,
    containers: &[EntityContainer],
) -> Result<(), V::Error> {
    visit_collection(containers, |container| v.visit_entity_container(container))
}

// ============================================================================
// Namespace
// ============================================================================

/// Complex types, entity types, enum types, association types, then function
/// groups when the visitor exposes a function surface.
pub fn walk_namespace<V: Visitor + ?Sized>(v: &mut V, item: &Namespace) -> Result<(), V::Error> {
    trace_named(item);
    v.visit_named_item(item)?;

    if item.has_complex_types() {
        v.visit_complex_types(item, item.complex_types())?;
    }
    if item.has_entity_types() {
        v.visit_entity_types(item, item.entity_types())?;
    }
    if item.has_enum_types() {
        v.visit_enum_types(item, item.enum_types())?;
    }
    if item.has_association_types() {
        v.visit_association_types(item, item.association_types())?;
    }
    if item.has_function_groups()
        && let Some(functions) = v.functions()
    {
        functions.visit_function_groups(item, item.function_groups())?;
    }

    Ok(())
}

pub fn walk_complex_types<V: Visitor + ?Sized>(
    v: &mut V,
    _namespace: &Namespace,
    items: &[ComplexType],
) -> Result<(), V::Error> {
    visit_collection(items, |item| v.visit_complex_type(item))
}

pub fn walk_complex_type<V: Visitor + ?Sized>(
    v: &mut V,
    item: &ComplexType,
) -> Result<(), V::Error> {
    trace_named(item);
    v.visit_namespace_item(item)?;

    if item.has_declared_properties() {
        v.visit_complex_type_properties(item, item.declared_properties())?;
    }

    Ok(())
}

pub fn walk_complex_type_properties<V: Visitor + ?Sized>(
    v: &mut V,
    _complex_type: &ComplexType,
    properties: &[Property],
) -> Result<(), V::Error> {
    visit_collection(properties, |property| v.visit_property(property))
}

pub fn walk_entity_types<V: Visitor + ?Sized>(
    v: &mut V,
    _namespace: &Namespace,
    items: &[EntityType],
) -> Result<(), V::Error> {
    visit_collection(items, |item| v.visit_entity_type(item))
}

/// Key properties, declared properties, then navigation properties. A key
/// property is reached once through each of the first two.
pub fn walk_entity_type<V: Visitor + ?Sized>(v: &mut V, item: &EntityType) -> Result<(), V::Error> {
    trace_named(item);
    v.visit_namespace_item(item)?;

    if item.has_declared_key_properties() {
        v.visit_declared_key_properties(item, item.key())?;
    }
    if item.has_declared_properties() {
        v.visit_declared_properties(item, item.declared_properties())?;
    }
    if item.has_declared_navigation_properties() {
        v.visit_declared_navigation_properties(item, item.declared_navigation_properties())?;
    }

    Ok(())
}

pub fn walk_declared_key_properties<V: Visitor + ?Sized>(
    v: &mut V,
    entity_type: &EntityType,
    key: &[String],
) -> Result<(), V::Error> {
    visit_collection(key, |name| {
        let property = entity_type.declared_property(name).ok_or_else(|| {
            VisitError::unresolved(NodeKind::EntityType, entity_type.name(), "key property", name)
        })?;

        v.visit_property(property)
    })
}

pub fn walk_declared_properties<V: Visitor + ?Sized>(
    v: &mut V,
    _entity_type: &EntityType,
    properties: &[Property],
) -> Result<(), V::Error> {
    visit_collection(properties, |property| v.visit_property(property))
}

pub fn walk_declared_navigation_properties<V: Visitor + ?Sized>(
    v: &mut V,
    _entity_type: &EntityType,
    properties: &[NavigationProperty],
) -> Result<(), V::Error> {
    visit_collection(properties, |property| v.visit_navigation_property(property))
}

pub fn walk_enum_types<V: Visitor + ?Sized>(
    v: &mut V,
    _namespace: &Namespace,
    items: &[EnumType],
) -> Result<(), V::Error> {
    visit_collection(items, |item| v.visit_enum_type(item))
}

pub fn walk_enum_type<V: Visitor + ?Sized>(v: &mut V, item: &EnumType) -> Result<(), V::Error> {
    trace_named(item);
    v.visit_namespace_item(item)?;

    if item.has_members() {
        v.visit_enum_members(item, item.members())?;
    }

    Ok(())
}

pub fn walk_enum_members<V: Visitor + ?Sized>(
    v: &mut V,
    _enum_type: &EnumType,
    members: &[EnumTypeMember],
) -> Result<(), V::Error> {
    visit_collection(members, |member| v.visit_enum_member(member))
}

pub fn walk_enum_member<V: Visitor + ?Sized>(
    v: &mut V,
    item: &EnumTypeMember,
) -> Result<(), V::Error> {
    trace_named(item);
    v.visit_named_item(item)
}

// ============================================================================
// Associations
// ============================================================================

pub fn walk_association_types<V: Visitor + ?Sized>(
    v: &mut V,
    namespace: &Namespace,
    items: &[AssociationType],
) -> Result<(), V::Error> {
    visit_collection(items, |item| v.visit_association_type(namespace, item))
}

/// Source end, target end, then the constraint when one is declared.
pub fn walk_association_type<V: Visitor + ?Sized>(
    v: &mut V,
    namespace: &Namespace,
    item: &AssociationType,
) -> Result<(), V::Error> {
    trace_named(item);
    v.visit_namespace_item(item)?;

    v.visit_association_end(item.source_end())?;
    v.visit_association_end(item.target_end())?;

    if let Some(constraint) = item.constraint() {
        v.visit_association_constraint(namespace, item, constraint)?;
    }

    Ok(())
}

pub fn walk_association_end<V: Visitor + ?Sized>(
    v: &mut V,
    item: &AssociationEnd,
) -> Result<(), V::Error> {
    trace_named(item);
    v.visit_named_item(item)
}

/// The dependent end is dispatched again as an association end, then each
/// dependent property as declared on that end's entity type.
pub fn walk_association_constraint<V: Visitor + ?Sized>(
    v: &mut V,
    namespace: &Namespace,
    association: &AssociationType,
    item: &AssociationConstraint,
) -> Result<(), V::Error> {
    trace_item(item);
    v.visit_metadata_item(item)?;

    let dependent = association.end(item.dependent_end());
    v.visit_association_end(dependent)?;

    if !item.has_dependent_properties() {
        return Ok(());
    }

    let entity_type = namespace.entity_type(dependent.entity_type()).ok_or_else(|| {
        VisitError::unresolved(
            NodeKind::AssociationEnd,
            dependent.name(),
            "entity type",
            dependent.entity_type(),
        )
    })?;

    visit_collection(item.dependent_properties(), |name| {
        let property = entity_type.declared_property(name).ok_or_else(|| {
            VisitError::unresolved(
                NodeKind::AssociationConstraint,
                association.name(),
                "dependent property",
                name,
            )
        })?;

        v.visit_property(property)
    })
}

// ============================================================================
// Container
// ============================================================================

/// Entity sets, association sets, then function imports when the visitor
/// exposes a function surface.
pub fn walk_entity_container<V: Visitor + ?Sized>(
    v: &mut V,
    item: &EntityContainer,
) -> Result<(), V::Error> {
    trace_named(item);
    v.visit_named_item(item)?;

    if item.has_entity_sets() {
        v.visit_entity_sets(item, item.entity_sets())?;
    }
    if item.has_association_sets() {
        v.visit_association_sets(item, item.association_sets())?;
    }
    if item.has_function_imports()
        && let Some(functions) = v.functions()
    {
        functions.visit_function_imports(item, item.function_imports())?;
    }

    Ok(())
}

pub fn walk_entity_sets<V: Visitor + ?Sized>(
    v: &mut V,
    _container: &EntityContainer,
    sets: &[EntitySet],
) -> Result<(), V::Error> {
    visit_collection(sets, |set| v.visit_entity_set(set))
}

pub fn walk_entity_set<V: Visitor + ?Sized>(v: &mut V, item: &EntitySet) -> Result<(), V::Error> {
    trace_named(item);
    v.visit_named_item(item)
}

pub fn walk_association_sets<V: Visitor + ?Sized>(
    v: &mut V,
    container: &EntityContainer,
    sets: &[AssociationSet],
) -> Result<(), V::Error> {
    visit_collection(sets, |set| v.visit_association_set(container, set))
}

pub fn walk_association_set<V: Visitor + ?Sized>(
    v: &mut V,
    container: &EntityContainer,
    item: &AssociationSet,
) -> Result<(), V::Error> {
    trace_named(item);
    v.visit_named_item(item)?;

    for (field, target) in [("source set", item.source_set()), ("target set", item.target_set())] {
        let set = container.entity_set(target).ok_or_else(|| {
            VisitError::unresolved(NodeKind::AssociationSet, item.name(), field, target)
        })?;

        v.visit_association_set_end(set)?;
    }

    Ok(())
}

pub fn walk_association_set_end<V: Visitor + ?Sized>(
    v: &mut V,
    item: &EntitySet,
) -> Result<(), V::Error> {
    trace_named(item);
    v.visit_named_item(item)
}

// ============================================================================
// Members
// ============================================================================

pub fn walk_property<V: Visitor + ?Sized>(v: &mut V, item: &Property) -> Result<(), V::Error> {
    trace_named(item);
    v.visit_named_item(item)?;
    v.visit_type_reference(item.property_type())
}

// Named tier only; the association is a reference and is not followed.
pub fn walk_navigation_property<V: Visitor + ?Sized>(
    v: &mut V,
    item: &NavigationProperty,
) -> Result<(), V::Error> {
    trace_named(item);
    v.visit_named_item(item)
}

pub fn walk_type_reference<V: Visitor + ?Sized>(
    v: &mut V,
    item: &TypeReference,
) -> Result<(), V::Error> {
    trace_item(item);
    v.visit_metadata_item(item)?;

    if let Some(facets) = item.primitive_type_facets() {
        v.visit_primitive_type_facets(facets)?;
    }

    Ok(())
}

pub fn walk_primitive_type_facets<V: Visitor + ?Sized>(
    v: &mut V,
    item: &PrimitiveTypeFacets,
) -> Result<(), V::Error> {
    trace_item(item);
    v.visit_data_model_item(item)
}
