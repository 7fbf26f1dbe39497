use super::{fixtures, log_of, points_among};
use crate::{
    error::VisitError,
    visit::{DispatchLog, DispatchPoint, Visitor},
};
use cmodel_schema::prelude::*;

#[test]
fn empty_model_dispatches_only_the_root_tiers() {
    let model = Model::builder("Empty").build().unwrap();
    let log = log_of(&model);

    let points = log.entries().iter().map(|e| e.point).collect::<Vec<_>>();
    assert_eq!(
        points,
        [
            DispatchPoint::Model,
            DispatchPoint::NamedItem,
            DispatchPoint::MetadataItem,
            DispatchPoint::DataModelItem,
        ]
    );
    assert_eq!(log.count(DispatchPoint::Namespaces), 0);
    assert_eq!(log.count(DispatchPoint::EntityContainers), 0);
}

#[test]
fn populated_model_dispatch_counts() {
    let log = log_of(&fixtures::populated());

    for (point, expected) in [
        (DispatchPoint::Model, 1),
        (DispatchPoint::Namespace, 1),
        (DispatchPoint::EntityType, 1),
        (DispatchPoint::Property, 2),
        (DispatchPoint::TypeReference, 2),
        (DispatchPoint::PrimitiveTypeFacets, 0),
        (DispatchPoint::NavigationProperty, 1),
        (DispatchPoint::EntityContainer, 1),
        (DispatchPoint::EntitySet, 1),
        (DispatchPoint::AssociationType, 1),
        (DispatchPoint::AssociationEnd, 2),
        (DispatchPoint::AssociationConstraint, 0),
    ] {
        assert_eq!(log.count(point), expected, "{point}");
    }

    // node-level dispatches of the scenario's own kinds: model, namespace,
    // entity type, two properties, navigation property, container, entity set
    let node_level = [
        DispatchPoint::Model,
        DispatchPoint::Namespace,
        DispatchPoint::EntityType,
        DispatchPoint::Property,
        DispatchPoint::NavigationProperty,
        DispatchPoint::EntityContainer,
        DispatchPoint::EntitySet,
    ]
    .into_iter()
    .map(|point| log.count(point))
    .sum::<usize>();
    assert_eq!(node_level, 8);

    // the self-association backing the navigation property adds only its own
    // type and two ends
    let total = [
        DispatchPoint::Model,
        DispatchPoint::Namespace,
        DispatchPoint::EntityType,
        DispatchPoint::Property,
        DispatchPoint::NavigationProperty,
        DispatchPoint::EntityContainer,
        DispatchPoint::EntitySet,
        DispatchPoint::AssociationType,
        DispatchPoint::AssociationEnd,
        DispatchPoint::EnumType,
        DispatchPoint::ComplexType,
        DispatchPoint::AssociationSet,
        DispatchPoint::AssociationSetEnd,
    ]
    .into_iter()
    .map(|point| log.count(point))
    .sum::<usize>();
    assert_eq!(total, node_level + 3);
}

#[test]
fn facets_are_visited_only_when_present() {
    let log = log_of(&fixtures::orders());

    // Street and City carry a max length; nothing else does
    assert_eq!(log.count(DispatchPoint::PrimitiveTypeFacets), 2);
    assert_eq!(log.count(DispatchPoint::TypeReference), 10);
}

#[test]
fn empty_collections_are_never_dispatched() {
    let model = Model::builder("Shop")
        .namespace(
            Namespace::new("Sales")
                .with_entity_type(EntityType::new("Marker"))
                .with_enum_type(EnumType::new("Empty")),
        )
        .build()
        .unwrap();
    let log = log_of(&model);

    assert_eq!(log.count(DispatchPoint::EntityTypes), 1);
    assert_eq!(log.count(DispatchPoint::EnumTypes), 1);
    for point in [
        DispatchPoint::EntityContainers,
        DispatchPoint::ComplexTypes,
        DispatchPoint::AssociationTypes,
        DispatchPoint::DeclaredKeyProperties,
        DispatchPoint::DeclaredProperties,
        DispatchPoint::DeclaredNavigationProperties,
        DispatchPoint::EnumMembers,
        DispatchPoint::Annotations,
    ] {
        assert_eq!(log.count(point), 0, "{point}");
    }
}

#[test]
fn namespace_children_follow_kind_order() {
    // declared back to front; dispatch order is fixed by kind
    let model = Model::builder("Shop")
        .namespace(
            Namespace::new("Sales")
                .with_association_type(AssociationType::new(
                    "Links",
                    AssociationEnd::new("From", "Node", RelationshipMultiplicity::Many),
                    AssociationEnd::new("To", "Node", RelationshipMultiplicity::Many),
                ))
                .with_enum_type(EnumType::new("Color"))
                .with_entity_type(EntityType::new("Node"))
                .with_complex_type(ComplexType::new("Point")),
        )
        .build()
        .unwrap();
    let log = log_of(&model);

    assert_eq!(
        points_among(
            &log,
            &[
                DispatchPoint::ComplexType,
                DispatchPoint::EntityType,
                DispatchPoint::EnumType,
                DispatchPoint::AssociationType,
            ],
        ),
        [
            DispatchPoint::ComplexType,
            DispatchPoint::EntityType,
            DispatchPoint::EnumType,
            DispatchPoint::AssociationType,
        ]
    );
}

#[test]
fn properties_are_visited_in_declaration_order() {
    let log = log_of(&fixtures::orders());

    assert_eq!(
        log.names(DispatchPoint::Property),
        [
            // Address
            "Street",
            "City",
            // Customer: key, then declared
            "Id",
            "Id",
            "Address",
            // Order: key, then declared
            "Id",
            "Id",
            "CustomerId",
            "Status",
            // CustomerOrders constraint
            "CustomerId",
        ]
    );
}

#[test]
fn key_properties_overlap_declared_properties() {
    let model = Model::builder("Shop")
        .namespace(
            Namespace::new("Sales").with_entity_type(
                EntityType::new("Line")
                    .with_key("OrderId")
                    .with_key("Number")
                    .with_property(Property::new("OrderId", fixtures::int32()))
                    .with_property(Property::new("Number", fixtures::int32()))
                    .with_property(Property::new("Quantity", fixtures::int32())),
            ),
        )
        .build()
        .unwrap();
    let log = log_of(&model);

    assert_eq!(log.count(DispatchPoint::DeclaredKeyProperties), 1);
    assert_eq!(
        log.names(DispatchPoint::Property),
        ["OrderId", "Number", "OrderId", "Number", "Quantity"]
    );
}

#[test]
fn association_set_ends_revisit_entity_sets() {
    let model = Model::builder("Shop")
        .namespace(fixtures::orders_namespace())
        .container(
            EntityContainer::new("Store")
                .with_entity_set(EntitySet::new("Customers", "Sales.Customer"))
                .with_entity_set(EntitySet::new("Orders", "Sales.Order"))
                .with_entity_set(EntitySet::new("Returns", "Sales.Order"))
                .with_association_set(AssociationSet::new("CustomerOrders", "Customers", "Orders"))
                .with_association_set(AssociationSet::new(
                    "CustomerReturns",
                    "Customers",
                    "Returns",
                )),
        )
        .build()
        .unwrap();
    let log = log_of(&model);

    assert_eq!(log.count(DispatchPoint::EntitySet), 3);
    assert_eq!(
        log.names(DispatchPoint::AssociationSetEnd),
        ["Customers", "Orders", "Customers", "Returns"]
    );

    // once through the container, once per association set referencing it;
    // only entity set dispatches count, since ends and navigation properties
    // share some of these names
    let mut set_visits = log.names(DispatchPoint::EntitySet);
    set_visits.extend(log.names(DispatchPoint::AssociationSetEnd));
    let visits = |set: &str| set_visits.iter().filter(|n| **n == set).count();
    assert_eq!(visits("Customers"), 3);
    assert_eq!(visits("Orders"), 2);
    assert_eq!(visits("Returns"), 2);

    // each revisit re-enters the named tier; no other node is called Customers
    let named = log.names(DispatchPoint::NamedItem);
    assert_eq!(named.iter().filter(|n| **n == "Customers").count(), 3);
}

#[test]
fn constraint_revisits_dependent_end_and_properties() {
    let log = log_of(&fixtures::orders());

    assert_eq!(log.count(DispatchPoint::AssociationConstraint), 1);
    assert_eq!(
        log.names(DispatchPoint::AssociationEnd),
        ["Customer", "Orders", "Orders"]
    );
}

#[test]
fn annotations_are_dispatched_in_insertion_order() {
    let model = Model::builder("Shop")
        .annotation("origin", AnnotationValue::new("codefirst"))
        .annotation("owner", AnnotationValue::new(7_u32))
        .namespace(
            Namespace::new("Sales").with_entity_type(
                EntityType::new("Customer")
                    .with_annotation("table", AnnotationValue::new("customers")),
            ),
        )
        .build()
        .unwrap();
    let log = log_of(&model);

    assert_eq!(log.count(DispatchPoint::Annotations), 2);
    assert_eq!(
        log.names(DispatchPoint::Annotation),
        ["origin", "owner", "table"]
    );
}

#[test]
fn namespace_items_pass_through_every_tier() {
    let log = log_of(&fixtures::orders());

    // Address, Customer, Order, OrderStatus, CustomerOrders
    assert_eq!(
        log.names(DispatchPoint::NamespaceItem),
        ["Address", "Customer", "Order", "OrderStatus", "CustomerOrders"]
    );

    // every metadata item also reaches the base tier; facets only reach the base
    assert_eq!(
        log.count(DispatchPoint::DataModelItem),
        log.count(DispatchPoint::MetadataItem) + log.count(DispatchPoint::PrimitiveTypeFacets)
    );
}

#[test]
fn unresolved_reference_aborts_the_walk() {
    // a container outside any model skips builder validation
    let container = EntityContainer::new("Loose")
        .with_entity_set(EntitySet::new("Customers", "Sales.Customer"))
        .with_association_set(AssociationSet::new("Dangling", "Customers", "Missing"));

    let mut log = DispatchLog::new();
    let err = log.visit_entity_container(&container).unwrap_err();

    assert_eq!(
        err,
        VisitError::UnresolvedReference {
            owner: NodeKind::AssociationSet,
            name: "Dangling".to_string(),
            field: "target set",
            target: "Missing".to_string(),
        }
    );
    assert_eq!(log.names(DispatchPoint::AssociationSetEnd), ["Customers"]);
}

#[test]
fn unresolved_key_property_surfaces_as_visit_error() {
    let entity = EntityType::new("Order").with_key("Id");

    let mut log = DispatchLog::new();
    let err = log.visit_entity_type(&entity).unwrap_err();

    assert!(matches!(
        err,
        VisitError::UnresolvedReference { owner: NodeKind::EntityType, field: "key property", .. }
    ));
    assert_eq!(
        err.to_string(),
        "EntityType 'Order': key property 'Id' does not resolve"
    );
}
