use super::{fixtures, log_of};
use crate::{
    error::VisitError,
    visit::{DispatchPoint, Visitor, traverse, walk},
};
use cmodel_schema::prelude::*;

///
/// PropertyNames
/// Replaces the entity type step without walking it.
///

#[derive(Default)]
struct PropertyNames {
    entity_types: Vec<String>,
    properties: Vec<String>,
}

impl Visitor for PropertyNames {
    type Error = VisitError;

    fn visit_entity_type(&mut self, item: &EntityType) -> Result<(), Self::Error> {
        self.entity_types.push(item.name().to_string());
        Ok(())
    }

    fn visit_property(&mut self, item: &Property) -> Result<(), Self::Error> {
        self.properties.push(item.name().to_string());
        walk::walk_property(self, item)
    }
}

#[test]
fn replacing_a_node_step_drops_its_subtree_only() {
    let mut visitor = PropertyNames::default();
    traverse(&mut visitor, &fixtures::orders()).unwrap();

    assert_eq!(visitor.entity_types, ["Customer", "Order"]);
    // complex type and constraint properties are unaffected
    assert_eq!(visitor.properties, ["Street", "City", "CustomerId"]);
}

///
/// Outline
/// Extends the entity type step on both sides of the default walk.
///

#[derive(Default)]
struct Outline {
    lines: Vec<String>,
}

impl Visitor for Outline {
    type Error = VisitError;

    fn visit_entity_type(&mut self, item: &EntityType) -> Result<(), Self::Error> {
        self.lines.push(format!("begin {}", item.name()));
        walk::walk_entity_type(self, item)?;
        self.lines.push(format!("end {}", item.name()));

        Ok(())
    }

    fn visit_declared_properties(
        &mut self,
        entity_type: &EntityType,
        properties: &[Property],
    ) -> Result<(), Self::Error> {
        self.lines.extend(properties.iter().map(|p| format!("  {}", p.name())));
        walk::walk_declared_properties(self, entity_type, properties)
    }
}

#[test]
fn extending_a_node_step_keeps_the_default_descent() {
    let mut visitor = Outline::default();
    traverse(&mut visitor, &fixtures::orders()).unwrap();

    assert_eq!(
        visitor.lines,
        [
            "begin Customer",
            "  Id",
            "  Address",
            "end Customer",
            "begin Order",
            "  Id",
            "  CustomerId",
            "  Status",
            "end Order",
        ]
    );
}

///
/// AnnotationKinds
/// Tier override: sees annotations of every kind that carries them.
///

#[derive(Default)]
struct AnnotationKinds {
    seen: Vec<(NodeKind, String)>,
}

impl Visitor for AnnotationKinds {
    type Error = VisitError;

    fn visit_annotations(
        &mut self,
        item: &dyn MetadataItem,
        annotations: &Annotations,
    ) -> Result<(), Self::Error> {
        self.seen.extend(
            annotations
                .iter()
                .map(|a| (item.kind(), a.key().to_string())),
        );

        Ok(())
    }
}

#[test]
fn overriding_a_tier_reaches_every_kind_on_that_tier() {
    let model = Model::builder("Shop")
        .namespace(
            Namespace::new("Sales")
                .with_annotation("schema", AnnotationValue::new("dbo"))
                .with_entity_type(
                    EntityType::new("Customer")
                        .with_annotation("table", AnnotationValue::new("customers"))
                        .with_property(
                            Property::new(
                                "Email",
                                fixtures::string(256).with_annotation(
                                    "format",
                                    AnnotationValue::new("email"),
                                ),
                            )
                            .with_annotation("column", AnnotationValue::new("email_address")),
                        ),
                ),
        )
        .build()
        .unwrap();

    let mut visitor = AnnotationKinds::default();
    traverse(&mut visitor, &model).unwrap();

    assert_eq!(
        visitor.seen,
        [
            (NodeKind::Namespace, "schema".to_string()),
            (NodeKind::EntityType, "table".to_string()),
            (NodeKind::Property, "column".to_string()),
            (NodeKind::TypeReference, "format".to_string()),
        ]
    );
}

///
/// MetadataCount
/// Tier override that does not walk: annotations and the base tier vanish
/// for every metadata item, while the node-level descent continues.
///

#[derive(Default)]
struct MetadataCount {
    metadata: usize,
    base: usize,
    annotations: usize,
}

impl Visitor for MetadataCount {
    type Error = VisitError;

    fn visit_metadata_item(&mut self, _item: &dyn MetadataItem) -> Result<(), Self::Error> {
        self.metadata += 1;
        Ok(())
    }

    fn visit_data_model_item(&mut self, _item: &dyn DataModelItem) -> Result<(), Self::Error> {
        self.base += 1;
        Ok(())
    }

    fn visit_annotation(
        &mut self,
        _item: &dyn MetadataItem,
        _annotation: &Annotation,
    ) -> Result<(), Self::Error> {
        self.annotations += 1;
        Ok(())
    }
}

#[test]
fn replacing_a_tier_leaves_node_descent_intact() {
    let model = Model::builder("Shop")
        .annotation("origin", AnnotationValue::new("codefirst"))
        .namespace(fixtures::orders_namespace())
        .container(fixtures::orders_container())
        .build()
        .unwrap();

    let mut visitor = MetadataCount::default();
    traverse(&mut visitor, &model).unwrap();
    let log = log_of(&model);

    assert_eq!(visitor.metadata, log.count(DispatchPoint::MetadataItem));
    assert_eq!(visitor.annotations, 0);
    // only facets reach the base tier without passing through metadata
    assert_eq!(visitor.base, log.count(DispatchPoint::PrimitiveTypeFacets));
}

///
/// StopError
///

#[derive(Debug, Eq, PartialEq)]
enum StopError {
    Stopped(String),
    Visit(VisitError),
}

impl From<VisitError> for StopError {
    fn from(err: VisitError) -> Self {
        Self::Visit(err)
    }
}

///
/// StopAt
///

struct StopAt {
    target: &'static str,
    entity_types: Vec<String>,
    containers: usize,
}

impl Visitor for StopAt {
    type Error = StopError;

    fn visit_entity_type(&mut self, item: &EntityType) -> Result<(), Self::Error> {
        self.entity_types.push(item.name().to_string());
        if item.name() == self.target {
            return Err(StopError::Stopped(item.name().to_string()));
        }

        walk::walk_entity_type(self, item)
    }

    fn visit_entity_container(&mut self, item: &EntityContainer) -> Result<(), Self::Error> {
        self.containers += 1;
        walk::walk_entity_container(self, item)
    }
}

#[test]
fn first_error_aborts_the_traversal() {
    let mut visitor = StopAt {
        target: "Customer",
        entity_types: Vec::new(),
        containers: 0,
    };
    let err = traverse(&mut visitor, &fixtures::orders()).unwrap_err();

    assert_eq!(err, StopError::Stopped("Customer".to_string()));
    assert_eq!(visitor.entity_types, ["Customer"]);
    assert_eq!(visitor.containers, 0);
}

#[test]
fn engine_errors_convert_into_visitor_errors() {
    let container = EntityContainer::new("Loose")
        .with_association_set(AssociationSet::new("Dangling", "Nowhere", "Nowhere"));

    let mut visitor = StopAt {
        target: "",
        entity_types: Vec::new(),
        containers: 0,
    };
    let err = visitor.visit_entity_container(&container).unwrap_err();

    assert!(matches!(
        err,
        StopError::Visit(VisitError::UnresolvedReference { field: "source set", .. })
    ));
}
