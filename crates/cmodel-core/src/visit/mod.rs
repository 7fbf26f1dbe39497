//! Extensible traversal over the metadata graph.
//!
//! [`Visitor`] has one method per capability tier, per node kind, and per
//! child collection. Every method defaults to the matching `walk_*` function
//! in [`walk`] (or [`function`] for function nodes), which performs the
//! default descent.
//!
//! # Extending versus replacing
//!
//! An override that wants to *extend* default behavior **must call the
//! `walk_*` function explicitly**, before or after its own logic. An override
//! that does not call it replaces the default: the node's whole subtree is
//! skipped and nothing reports it.
//!
//! ```ignore
//! fn visit_entity_type(&mut self, item: &EntityType) -> Result<(), Self::Error> {
//!     self.names.push(item.name().to_string());
//!     walk::walk_entity_type(self, item)
//! }
//! ```
//!
//! Overriding a tier method (`visit_metadata_item`, `visit_named_item`, ...)
//! changes behavior for every node kind sharing that tier.
//!
//! A visitor accumulating state in its fields is meant for one traversal at
//! a time. The graph itself is immutable and can be walked concurrently by
//! independent visitors.

mod collection;
pub mod function;
pub mod record;
pub mod walk;

#[cfg(test)]
mod tests;

pub use collection::visit_collection;
pub use function::FunctionVisitor;
pub use record::{Dispatch, DispatchLog, DispatchPoint};

use crate::error::VisitError;
use cmodel_schema::{
    annotation::{Annotation, Annotations},
    node::{
        AssociationConstraint, AssociationEnd, AssociationSet, AssociationType, ComplexType,
        DataModelItem, EntityContainer, EntitySet, EntityType, EnumType, EnumTypeMember,
        MetadataItem, Model, NamedMetadataItem, Namespace, NamespaceItem, NavigationProperty,
        PrimitiveTypeFacets, Property, TypeReference,
    },
};
use tracing::debug_span;

///
/// traverse
///
/// Run `visitor` over the whole model, starting at `visit_model`.
///
pub fn traverse<V: Visitor + ?Sized>(visitor: &mut V, model: &Model) -> Result<(), V::Error> {
    let span = debug_span!("traverse", model = model.name());
    let _enter = span.enter();

    visitor.visit_model(model)
}

// ============================================================================
// Visitor
// ============================================================================

pub trait Visitor {
    type Error: From<VisitError>;

    /// Function node surface. `None` keeps function groups and imports out
    /// of the traversal; a visitor opts in by returning itself.
    fn functions(&mut self) -> Option<&mut dyn FunctionVisitor<Error = Self::Error>> {
        None
    }

    //
    // tiers
    //

    fn visit_data_model_item(&mut self, _item: &dyn DataModelItem) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_metadata_item(&mut self, item: &dyn MetadataItem) -> Result<(), Self::Error> {
        walk::walk_metadata_item(self, item)
    }

    fn visit_named_item(&mut self, item: &dyn NamedMetadataItem) -> Result<(), Self::Error> {
        walk::walk_named_item(self, item)
    }

    fn visit_namespace_item(&mut self, item: &dyn NamespaceItem) -> Result<(), Self::Error> {
        walk::walk_namespace_item(self, item)
    }

    fn visit_annotations(
        &mut self,
        item: &dyn MetadataItem,
        annotations: &Annotations,
    ) -> Result<(), Self::Error> {
        walk::walk_annotations(self, item, annotations)
    }

    fn visit_annotation(
        &mut self,
        _item: &dyn MetadataItem,
        _annotation: &Annotation,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    //
    // model
    //

    fn visit_model(&mut self, item: &Model) -> Result<(), Self::Error> {
        walk::walk_model(self, item)
    }

    fn visit_namespaces(
        &mut self,
        model: &Model,
        namespaces: &[Namespace],
    ) -> Result<(), Self::Error> {
        walk::walk_namespaces(self, model, namespaces)
    }

    fn visit_entity_containers(
        &mut self,
        model: &Model,
        containers: &[EntityContainer],
    ) -> Result<(), Self::Error> {
        walk::walk_entity_containers(self, model, containers)
    }

    //
    // namespace
    //

    fn visit_namespace(&mut self, item: &Namespace) -> Result<(), Self::Error> {
        walk::walk_namespace(self, item)
    }

    fn visit_complex_types(
        &mut self,
        namespace: &Namespace,
        items: &[ComplexType],
    ) -> Result<(), Self::Error> {
        walk::walk_complex_types(self, namespace, items)
    }

    fn visit_complex_type(&mut self, item: &ComplexType) -> Result<(), Self::Error> {
        walk::walk_complex_type(self, item)
    }

    fn visit_complex_type_properties(
        &mut self,
        complex_type: &ComplexType,
        properties: &[Property],
    ) -> Result<(), Self::Error> {
        walk::walk_complex_type_properties(self, complex_type, properties)
    }

    fn visit_entity_types(
        &mut self,
        namespace: &Namespace,
        items: &[EntityType],
    ) -> Result<(), Self::Error> {
        walk::walk_entity_types(self, namespace, items)
    }

    fn visit_entity_type(&mut self, item: &EntityType) -> Result<(), Self::Error> {
        walk::walk_entity_type(self, item)
    }

    /// `key` holds property names; each is resolved on `entity_type`.
    fn visit_declared_key_properties(
        &mut self,
        entity_type: &EntityType,
        key: &[String],
    ) -> Result<(), Self::Error> {
        walk::walk_declared_key_properties(self, entity_type, key)
    }

    fn visit_declared_properties(
        &mut self,
        entity_type: &EntityType,
        properties: &[Property],
    ) -> Result<(), Self::Error> {
        walk::walk_declared_properties(self, entity_type, properties)
    }

    fn visit_declared_navigation_properties(
        &mut self,
        entity_type: &EntityType,
        properties: &[NavigationProperty],
    ) -> Result<(), Self::Error> {
        walk::walk_declared_navigation_properties(self, entity_type, properties)
    }

    fn visit_enum_types(
        &mut self,
        namespace: &Namespace,
        items: &[EnumType],
    ) -> Result<(), Self::Error> {
        walk::walk_enum_types(self, namespace, items)
    }

    fn visit_enum_type(&mut self, item: &EnumType) -> Result<(), Self::Error> {
        walk::walk_enum_type(self, item)
    }

    fn visit_enum_members(
        &mut self,
        enum_type: &EnumType,
        members: &[EnumTypeMember],
    ) -> Result<(), Self::Error> {
        walk::walk_enum_members(self, enum_type, members)
    }

    fn visit_enum_member(&mut self, item: &EnumTypeMember) -> Result<(), Self::Error> {
        walk::walk_enum_member(self, item)
    }

    fn visit_association_types(
        &mut self,
        namespace: &Namespace,
        items: &[AssociationType],
    ) -> Result<(), Self::Error> {
        walk::walk_association_types(self, namespace, items)
    }

    fn visit_association_type(
        &mut self,
        namespace: &Namespace,
        item: &AssociationType,
    ) -> Result<(), Self::Error> {
        walk::walk_association_type(self, namespace, item)
    }

    fn visit_association_end(&mut self, item: &AssociationEnd) -> Result<(), Self::Error> {
        walk::walk_association_end(self, item)
    }

    /// Revisits the dependent end and dependent properties through their
    /// references; neither is owned by the constraint.
    fn visit_association_constraint(
        &mut self,
        namespace: &Namespace,
        association: &AssociationType,
        item: &AssociationConstraint,
    ) -> Result<(), Self::Error> {
        walk::walk_association_constraint(self, namespace, association, item)
    }

    //
    // container
    //

    fn visit_entity_container(&mut self, item: &EntityContainer) -> Result<(), Self::Error> {
        walk::walk_entity_container(self, item)
    }

    fn visit_entity_sets(
        &mut self,
        container: &EntityContainer,
        sets: &[EntitySet],
    ) -> Result<(), Self::Error> {
        walk::walk_entity_sets(self, container, sets)
    }

    fn visit_entity_set(&mut self, item: &EntitySet) -> Result<(), Self::Error> {
        walk::walk_entity_set(self, item)
    }

    fn visit_association_sets(
        &mut self,
        container: &EntityContainer,
        sets: &[AssociationSet],
    ) -> Result<(), Self::Error> {
        walk::walk_association_sets(self, container, sets)
    }

    /// Source and target sets are dispatched again through
    /// `visit_association_set_end`, independent of `visit_entity_sets`.
    fn visit_association_set(
        &mut self,
        container: &EntityContainer,
        item: &AssociationSet,
    ) -> Result<(), Self::Error> {
        walk::walk_association_set(self, container, item)
    }

    fn visit_association_set_end(&mut self, item: &EntitySet) -> Result<(), Self::Error> {
        walk::walk_association_set_end(self, item)
    }

    //
    // members
    //

    fn visit_property(&mut self, item: &Property) -> Result<(), Self::Error> {
        walk::walk_property(self, item)
    }

    fn visit_navigation_property(&mut self, item: &NavigationProperty) -> Result<(), Self::Error> {
        walk::walk_navigation_property(self, item)
    }

    fn visit_type_reference(&mut self, item: &TypeReference) -> Result<(), Self::Error> {
        walk::walk_type_reference(self, item)
    }

    fn visit_primitive_type_facets(
        &mut self,
        item: &PrimitiveTypeFacets,
    ) -> Result<(), Self::Error> {
        walk::walk_primitive_type_facets(self, item)
    }
}
