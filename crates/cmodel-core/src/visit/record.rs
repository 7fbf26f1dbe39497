use crate::{
    config::TraversalConfig,
    error::VisitError,
    visit::{FunctionVisitor, Visitor, function, walk},
};
use cmodel_schema::{
    annotation::{Annotation, Annotations},
    node::{
        AssociationConstraint, AssociationEnd, AssociationSet, AssociationType, ComplexType,
        DataModelItem, EntityContainer, EntitySet, EntityType, EnumType, EnumTypeMember,
        FunctionGroup, FunctionImport, FunctionOverload, FunctionParameter, MetadataItem, Model,
        NamedMetadataItem, Namespace, NamespaceItem, NavigationProperty, PrimitiveTypeFacets,
        Property, TypeReference,
    },
};
use derive_more::Display;

///
/// DispatchPoint
/// One variant per overridable visitor method.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DispatchPoint {
    // tiers
    DataModelItem,
    MetadataItem,
    NamedItem,
    NamespaceItem,
    Annotations,
    Annotation,

    // model
    Model,
    Namespaces,
    EntityContainers,

    // namespace
    Namespace,
    ComplexTypes,
    ComplexType,
    ComplexTypeProperties,
    EntityTypes,
    EntityType,
    DeclaredKeyProperties,
    DeclaredProperties,
    DeclaredNavigationProperties,
    EnumTypes,
    EnumType,
    EnumMembers,
    EnumMember,
    AssociationTypes,
    AssociationType,
    AssociationEnd,
    AssociationConstraint,

    // container
    EntityContainer,
    EntitySets,
    EntitySet,
    AssociationSets,
    AssociationSet,
    AssociationSetEnd,

    // members
    Property,
    NavigationProperty,
    TypeReference,
    PrimitiveTypeFacets,

    // functions
    FunctionGroups,
    FunctionGroup,
    FunctionOverloads,
    FunctionOverload,
    FunctionOverloadParameters,
    FunctionImports,
    FunctionImport,
    FunctionImportParameters,
    FunctionParameter,
}

///
/// Dispatch
///
/// `name` is the visited node's name when it has one. Collection points
/// carry the owner's name, annotation points the annotation key.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dispatch {
    pub point: DispatchPoint,
    pub name: Option<String>,
}

///
/// DispatchLog
///
/// Records every method invoked, in call order, then runs the default
/// descent. Function nodes are reached only when the config enables them.
///

#[derive(Debug, Default)]
pub struct DispatchLog {
    config: TraversalConfig,
    entries: Vec<Dispatch>,
}

impl DispatchLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_config(config: TraversalConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[Dispatch] {
        &self.entries
    }

    #[must_use]
    pub fn count(&self, point: DispatchPoint) -> usize {
        self.entries.iter().filter(|e| e.point == point).count()
    }

    /// Names recorded at `point`, in call order.
    #[must_use]
    pub fn names(&self, point: DispatchPoint) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.point == point)
            .filter_map(|e| e.name.as_deref())
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn record(&mut self, point: DispatchPoint, name: Option<&str>) {
        self.entries.push(Dispatch {
            point,
            name: name.map(ToString::to_string),
        });
    }
}

impl Visitor for DispatchLog {
    type Error = VisitError;

    fn functions(&mut self) -> Option<&mut dyn FunctionVisitor<Error = Self::Error>> {
        if self.config.functions.enabled {
            Some(self)
        } else {
            None
        }
    }

    fn visit_data_model_item(&mut self, _item: &dyn DataModelItem) -> Result<(), Self::Error> {
        self.record(DispatchPoint::DataModelItem, None);
        Ok(())
    }

    fn visit_metadata_item(&mut self, item: &dyn MetadataItem) -> Result<(), Self::Error> {
        self.record(DispatchPoint::MetadataItem, None);
        walk::walk_metadata_item(self, item)
    }

    fn visit_named_item(&mut self, item: &dyn NamedMetadataItem) -> Result<(), Self::Error> {
        self.record(DispatchPoint::NamedItem, Some(item.name()));
        walk::walk_named_item(self, item)
    }

    fn visit_namespace_item(&mut self, item: &dyn NamespaceItem) -> Result<(), Self::Error> {
        self.record(DispatchPoint::NamespaceItem, Some(item.name()));
        walk::walk_namespace_item(self, item)
    }

    fn visit_annotations(
        &mut self,
        item: &dyn MetadataItem,
        annotations: &Annotations,
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::Annotations, None);
        walk::walk_annotations(self, item, annotations)
    }

    fn visit_annotation(
        &mut self,
        _item: &dyn MetadataItem,
        annotation: &Annotation,
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::Annotation, Some(annotation.key()));
        Ok(())
    }

    fn visit_model(&mut self, item: &Model) -> Result<(), Self::Error> {
        self.record(DispatchPoint::Model, Some(item.name()));
        walk::walk_model(self, item)
    }

    fn visit_namespaces(
        &mut self,
        model: &Model,
        namespaces: &[Namespace],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::Namespaces, Some(model.name()));
        walk::walk_namespaces(self, model, namespaces)
    }

    fn visit_entity_containers(
        &mut self,
        model: &Model,
        containers: &[EntityContainer],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::EntityContainers, Some(model.name()));
        walk::walk_entity_containers(self, model, containers)
    }

    fn visit_namespace(&mut self, item: &Namespace) -> Result<(), Self::Error> {
        self.record(DispatchPoint::Namespace, Some(item.name()));
        walk::walk_namespace(self, item)
    }

    fn visit_complex_types(
        &mut self,
        namespace: &Namespace,
        items: &[ComplexType],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::ComplexTypes, Some(namespace.name()));
        walk::walk_complex_types(self, namespace, items)
    }

    fn visit_complex_type(&mut self, item: &ComplexType) -> Result<(), Self::Error> {
        self.record(DispatchPoint::ComplexType, Some(item.name()));
        walk::walk_complex_type(self, item)
    }

    fn visit_complex_type_properties(
        &mut self,
        complex_type: &ComplexType,
        properties: &[Property],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::ComplexTypeProperties, Some(complex_type.name()));
        walk::walk_complex_type_properties(self, complex_type, properties)
    }

    fn visit_entity_types(
        &mut self,
        namespace: &Namespace,
        items: &[EntityType],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::EntityTypes, Some(namespace.name()));
        walk::walk_entity_types(self, namespace, items)
    }

    fn visit_entity_type(&mut self, item: &EntityType) -> Result<(), Self::Error> {
        self.record(DispatchPoint::EntityType, Some(item.name()));
        walk::walk_entity_type(self, item)
    }

    fn visit_declared_key_properties(
        &mut self,
        entity_type: &EntityType,
        key: &[String],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::DeclaredKeyProperties, Some(entity_type.name()));
        walk::walk_declared_key_properties(self, entity_type, key)
    }

    fn visit_declared_properties(
        &mut self,
        entity_type: &EntityType,
        properties: &[Property],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::DeclaredProperties, Some(entity_type.name()));
        walk::walk_declared_properties(self, entity_type, properties)
    }

    fn visit_declared_navigation_properties(
        &mut self,
        entity_type: &EntityType,
        properties: &[NavigationProperty],
    ) -> Result<(), Self::Error> {
        self.record(
            DispatchPoint::DeclaredNavigationProperties,
            Some(entity_type.name()),
        );
        walk::walk_declared_navigation_properties(self, entity_type, properties)
    }

    fn visit_enum_types(
        &mut self,
        namespace: &Namespace,
        items: &[EnumType],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::EnumTypes, Some(namespace.name()));
        walk::walk_enum_types(self, namespace, items)
    }

    fn visit_enum_type(&mut self, item: &EnumType) -> Result<(), Self::Error> {
        self.record(DispatchPoint::EnumType, Some(item.name()));
        walk::walk_enum_type(self, item)
    }

    fn visit_enum_members(
        &mut self,
        enum_type: &EnumType,
        members: &[EnumTypeMember],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::EnumMembers, Some(enum_type.name()));
        walk::walk_enum_members(self, enum_type, members)
    }

    fn visit_enum_member(&mut self, item: &EnumTypeMember) -> Result<(), Self::Error> {
        self.record(DispatchPoint::EnumMember, Some(item.name()));
        walk::walk_enum_member(self, item)
    }

    fn visit_association_types(
        &mut self,
        namespace: &Namespace,
        items: &[AssociationType],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::AssociationTypes, Some(namespace.name()));
        walk::walk_association_types(self, namespace, items)
    }

    fn visit_association_type(
        &mut self,
        namespace: &Namespace,
        item: &AssociationType,
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::AssociationType, Some(item.name()));
        walk::walk_association_type(self, namespace, item)
    }

    fn visit_association_end(&mut self, item: &AssociationEnd) -> Result<(), Self::Error> {
        self.record(DispatchPoint::AssociationEnd, Some(item.name()));
        walk::walk_association_end(self, item)
    }

    fn visit_association_constraint(
        &mut self,
        namespace: &Namespace,
        association: &AssociationType,
        item: &AssociationConstraint,
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::AssociationConstraint, Some(association.name()));
        walk::walk_association_constraint(self, namespace, association, item)
    }

    fn visit_entity_container(&mut self, item: &EntityContainer) -> Result<(), Self::Error> {
        self.record(DispatchPoint::EntityContainer, Some(item.name()));
        walk::walk_entity_container(self, item)
    }

    fn visit_entity_sets(
        &mut self,
        container: &EntityContainer,
        sets: &[EntitySet],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::EntitySets, Some(container.name()));
        walk::walk_entity_sets(self, container, sets)
    }

    fn visit_entity_set(&mut self, item: &EntitySet) -> Result<(), Self::Error> {
        self.record(DispatchPoint::EntitySet, Some(item.name()));
        walk::walk_entity_set(self, item)
    }

    fn visit_association_sets(
        &mut self,
        container: &EntityContainer,
        sets: &[AssociationSet],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::AssociationSets, Some(container.name()));
        walk::walk_association_sets(self, container, sets)
    }

    fn visit_association_set(
        &mut self,
        container: &EntityContainer,
        item: &AssociationSet,
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::AssociationSet, Some(item.name()));
        walk::walk_association_set(self, container, item)
    }

    fn visit_association_set_end(&mut self, item: &EntitySet) -> Result<(), Self::Error> {
        self.record(DispatchPoint::AssociationSetEnd, Some(item.name()));
        walk::walk_association_set_end(self, item)
    }

    fn visit_property(&mut self, item: &Property) -> Result<(), Self::Error> {
        self.record(DispatchPoint::Property, Some(item.name()));
        walk::walk_property(self, item)
    }

    fn visit_navigation_property(&mut self, item: &NavigationProperty) -> Result<(), Self::Error> {
        self.record(DispatchPoint::NavigationProperty, Some(item.name()));
        walk::walk_navigation_property(self, item)
    }

    fn visit_type_reference(&mut self, item: &TypeReference) -> Result<(), Self::Error> {
        self.record(DispatchPoint::TypeReference, None);
        walk::walk_type_reference(self, item)
    }

    fn visit_primitive_type_facets(
        &mut self,
        item: &PrimitiveTypeFacets,
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::PrimitiveTypeFacets, None);
        walk::walk_primitive_type_facets(self, item)
    }
}

impl FunctionVisitor for DispatchLog {
    fn visit_function_groups(
        &mut self,
        namespace: &Namespace,
        groups: &[FunctionGroup],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::FunctionGroups, Some(namespace.name()));
        function::walk_function_groups(self, namespace, groups)
    }

    fn visit_function_group(&mut self, item: &FunctionGroup) -> Result<(), Self::Error> {
        self.record(DispatchPoint::FunctionGroup, Some(item.name()));
        function::walk_function_group(self, item)
    }

    fn visit_function_overloads(
        &mut self,
        group: &FunctionGroup,
        overloads: &[FunctionOverload],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::FunctionOverloads, Some(group.name()));
        function::walk_function_overloads(self, group, overloads)
    }

    fn visit_function_overload(&mut self, item: &FunctionOverload) -> Result<(), Self::Error> {
        self.record(DispatchPoint::FunctionOverload, None);
        function::walk_function_overload(self, item)
    }

    fn visit_function_overload_parameters(
        &mut self,
        overload: &FunctionOverload,
        parameters: &[FunctionParameter],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::FunctionOverloadParameters, None);
        function::walk_function_overload_parameters(self, overload, parameters)
    }

    fn visit_function_imports(
        &mut self,
        container: &EntityContainer,
        imports: &[FunctionImport],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::FunctionImports, Some(container.name()));
        function::walk_function_imports(self, container, imports)
    }

    fn visit_function_import(&mut self, item: &FunctionImport) -> Result<(), Self::Error> {
        self.record(DispatchPoint::FunctionImport, Some(item.name()));
        function::walk_function_import(self, item)
    }

    fn visit_function_import_parameters(
        &mut self,
        import: &FunctionImport,
        parameters: &[FunctionParameter],
    ) -> Result<(), Self::Error> {
        self.record(DispatchPoint::FunctionImportParameters, Some(import.name()));
        function::walk_function_import_parameters(self, import, parameters)
    }

    fn visit_function_parameter(&mut self, item: &FunctionParameter) -> Result<(), Self::Error> {
        self.record(DispatchPoint::FunctionParameter, Some(item.name()));
        function::walk_function_parameter(self, item)
    }
}
