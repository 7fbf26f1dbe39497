//! Builder-time checks. Staged, deterministic, fail-fast.

use crate::{
    error::SchemaError,
    node::{
        AssociationType, ComplexType, EntityContainer, EntityType, EnumType, FunctionGroup,
        FunctionParameter, Model, NamedMetadataItem, Namespace, NodeKind, Property,
        ReferencedType, TypeReference, split_qualified,
    },
};
use std::collections::BTreeSet;

pub(super) fn validate_model(model: &Model) -> Result<(), SchemaError> {
    // Phase 1: names and uniqueness at the root.
    ensure_named(model, "")?;
    ensure_unique(model.name(), model.namespaces())?;
    ensure_unique(model.name(), model.containers())?;

    // Phase 2: everything declared under each namespace.
    for namespace in model.namespaces() {
        validate_namespace(model, namespace)?;
    }

    // Phase 3: containers, whose references cross into namespaces.
    for container in model.containers() {
        validate_container(model, container)?;
    }

    Ok(())
}

// ============================================================================
// Namespace
// ============================================================================

fn validate_namespace(model: &Model, ns: &Namespace) -> Result<(), SchemaError> {
    ensure_named(ns, model.name())?;

    // every namespace item shares one scope
    let mut seen = BTreeSet::new();
    let items = ns
        .complex_types()
        .iter()
        .map(|i| i as &dyn NamedMetadataItem)
        .chain(ns.entity_types().iter().map(|i| i as &dyn NamedMetadataItem))
        .chain(ns.enum_types().iter().map(|i| i as &dyn NamedMetadataItem))
        .chain(ns.association_types().iter().map(|i| i as &dyn NamedMetadataItem))
        .chain(ns.function_groups().iter().map(|i| i as &dyn NamedMetadataItem));
    for item in items {
        ensure_named(item, ns.name())?;
        if !seen.insert(item.name()) {
            return Err(duplicate(item, ns.name()));
        }
    }

    for item in ns.complex_types() {
        validate_complex_type(model, item)?;
    }
    for item in ns.entity_types() {
        validate_entity_type(model, ns, item)?;
    }
    for item in ns.enum_types() {
        validate_enum_type(item)?;
    }
    for item in ns.association_types() {
        validate_association_type(ns, item)?;
    }
    for item in ns.function_groups() {
        validate_function_group(model, item)?;
    }

    Ok(())
}

fn validate_complex_type(model: &Model, item: &ComplexType) -> Result<(), SchemaError> {
    ensure_unique(item.name(), item.declared_properties())?;
    validate_properties(model, item.declared_properties())
}

fn validate_entity_type(
    model: &Model,
    ns: &Namespace,
    item: &EntityType,
) -> Result<(), SchemaError> {
    // properties and navigation properties share the member scope
    let members = item
        .declared_properties()
        .iter()
        .map(|p| p as &dyn NamedMetadataItem)
        .chain(
            item.declared_navigation_properties()
                .iter()
                .map(|p| p as &dyn NamedMetadataItem),
        );
    let mut seen = BTreeSet::new();
    for member in members {
        ensure_named(member, item.name())?;
        if !seen.insert(member.name()) {
            return Err(duplicate(member, item.name()));
        }
    }

    for key in item.key() {
        if item.declared_property(key).is_none() {
            return Err(SchemaError::dangling(
                NodeKind::EntityType,
                item.name(),
                "key property",
                key,
            ));
        }
    }

    if let Some(base) = item.base_type()
        && model.entity_type(base).is_none()
    {
        return Err(SchemaError::dangling(
            NodeKind::EntityType,
            item.name(),
            "base type",
            base,
        ));
    }

    for nav in item.declared_navigation_properties() {
        if ns.association_type(nav.association()).is_none() {
            return Err(SchemaError::dangling(
                NodeKind::NavigationProperty,
                nav.name(),
                "association",
                nav.association(),
            ));
        }
    }

    validate_properties(model, item.declared_properties())
}

fn validate_enum_type(item: &EnumType) -> Result<(), SchemaError> {
    if !item.underlying_type().is_integral() {
        return Err(SchemaError::NonIntegralEnum {
            name: item.name().to_string(),
            underlying: item.underlying_type(),
        });
    }

    ensure_unique(item.name(), item.members())
}

fn validate_association_type(ns: &Namespace, item: &AssociationType) -> Result<(), SchemaError> {
    let ends = [item.source_end(), item.target_end()];
    ensure_unique(item.name(), ends)?;

    for end in ends {
        if ns.entity_type(end.entity_type()).is_none() {
            return Err(SchemaError::dangling(
                NodeKind::AssociationEnd,
                end.name(),
                "entity type",
                end.entity_type(),
            ));
        }
    }

    if let Some(constraint) = item.constraint() {
        let dependent = item.end(constraint.dependent_end());
        let Some(entity) = ns.entity_type(dependent.entity_type()) else {
            return Err(SchemaError::dangling(
                NodeKind::AssociationEnd,
                dependent.name(),
                "entity type",
                dependent.entity_type(),
            ));
        };

        for property in constraint.dependent_properties() {
            if entity.declared_property(property).is_none() {
                return Err(SchemaError::dangling(
                    NodeKind::AssociationConstraint,
                    item.name(),
                    "dependent property",
                    property,
                ));
            }
        }
    }

    Ok(())
}

fn validate_function_group(model: &Model, item: &FunctionGroup) -> Result<(), SchemaError> {
    for overload in item.overloads() {
        if let Some(return_type) = overload.return_type() {
            validate_type_reference(model, NodeKind::FunctionOverload, item.name(), return_type)?;
        }
        validate_parameters(model, item.name(), overload.parameters())?;
    }

    Ok(())
}

// ============================================================================
// Container
// ============================================================================

fn validate_container(model: &Model, container: &EntityContainer) -> Result<(), SchemaError> {
    ensure_named(container, model.name())?;

    let members = container
        .entity_sets()
        .iter()
        .map(|s| s as &dyn NamedMetadataItem)
        .chain(
            container
                .association_sets()
                .iter()
                .map(|s| s as &dyn NamedMetadataItem),
        )
        .chain(
            container
                .function_imports()
                .iter()
                .map(|f| f as &dyn NamedMetadataItem),
        );
    let mut seen = BTreeSet::new();
    for member in members {
        ensure_named(member, container.name())?;
        if !seen.insert(member.name()) {
            return Err(duplicate(member, container.name()));
        }
    }

    for set in container.entity_sets() {
        if model.entity_type(set.element_type()).is_none() {
            return Err(SchemaError::dangling(
                NodeKind::EntitySet,
                set.name(),
                "element type",
                set.element_type(),
            ));
        }
    }

    for set in container.association_sets() {
        for (field, target) in [("source set", set.source_set()), ("target set", set.target_set())]
        {
            if container.entity_set(target).is_none() {
                return Err(SchemaError::dangling(
                    NodeKind::AssociationSet,
                    set.name(),
                    field,
                    target,
                ));
            }
        }

        if let Some(association) = set.association_type()
            && model.association_type(association).is_none()
        {
            return Err(SchemaError::dangling(
                NodeKind::AssociationSet,
                set.name(),
                "association type",
                association,
            ));
        }
    }

    for import in container.function_imports() {
        if let Some(return_type) = import.return_type() {
            validate_type_reference(model, NodeKind::FunctionImport, import.name(), return_type)?;
        }
        validate_parameters(model, import.name(), import.parameters())?;
    }

    Ok(())
}

// ============================================================================
// Shared
// ============================================================================

fn validate_properties(model: &Model, properties: &[Property]) -> Result<(), SchemaError> {
    for property in properties {
        validate_type_reference(
            model,
            NodeKind::Property,
            property.name(),
            property.property_type(),
        )?;
    }

    Ok(())
}

fn validate_parameters(
    model: &Model,
    owner: &str,
    parameters: &[FunctionParameter],
) -> Result<(), SchemaError> {
    ensure_unique(owner, parameters)?;

    for parameter in parameters {
        validate_type_reference(
            model,
            NodeKind::FunctionParameter,
            parameter.name(),
            parameter.parameter_type(),
        )?;
    }

    Ok(())
}

fn validate_type_reference(
    model: &Model,
    owner: NodeKind,
    name: &str,
    reference: &TypeReference,
) -> Result<(), SchemaError> {
    let resolves = match reference.referenced() {
        ReferencedType::Primitive(_) => true,
        ReferencedType::Entity(target) => model.entity_type(target).is_some(),
        ReferencedType::Complex(target) => resolve_in_namespace(model, target, |ns, name| {
            ns.complex_type(name).is_some()
        }),
        ReferencedType::Enum(target) => {
            resolve_in_namespace(model, target, |ns, name| ns.enum_type(name).is_some())
        }
    };

    let target = || match reference.referenced() {
        ReferencedType::Primitive(kind) => kind.to_string(),
        ReferencedType::Complex(t) | ReferencedType::Enum(t) | ReferencedType::Entity(t) => {
            t.clone()
        }
    };

    if !resolves {
        return Err(SchemaError::dangling(owner, name, "type", &target()));
    }

    // SRID facets only refine spatial primitives
    if let Some(facets) = reference.primitive_type_facets() {
        let spatial = matches!(
            reference.referenced(),
            ReferencedType::Primitive(kind) if kind.is_spatial()
        );
        let srid = [
            ("srid", facets.srid.is_some()),
            ("variable srid", facets.is_variable_srid.is_some()),
        ];
        if let Some((facet, _)) = srid.into_iter().find(|(_, set)| *set && !spatial) {
            return Err(SchemaError::InvalidFacet {
                owner,
                name: name.to_string(),
                facet,
                target: target(),
            });
        }
    }

    Ok(())
}

fn resolve_in_namespace(
    model: &Model,
    qualified: &str,
    found: impl Fn(&Namespace, &str) -> bool,
) -> bool {
    split_qualified(qualified)
        .and_then(|(ns, name)| model.namespace(ns).map(|ns| found(ns, name)))
        .unwrap_or(false)
}

fn ensure_named(item: &dyn NamedMetadataItem, scope: &str) -> Result<(), SchemaError> {
    if item.name().is_empty() {
        return Err(SchemaError::EmptyName {
            kind: item.kind(),
            scope: scope.to_string(),
        });
    }

    Ok(())
}

// ensure_unique
// names must be non-empty and unique within the declaring scope
fn ensure_unique<'a, T, I>(scope: &str, items: I) -> Result<(), SchemaError>
where
    T: NamedMetadataItem + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = BTreeSet::new();
    for item in items {
        ensure_named(item, scope)?;
        if !seen.insert(item.name()) {
            return Err(duplicate(item, scope));
        }
    }

    Ok(())
}

fn duplicate(item: &dyn NamedMetadataItem, scope: &str) -> SchemaError {
    SchemaError::DuplicateName {
        kind: item.kind(),
        scope: scope.to_string(),
        name: item.name().to_string(),
    }
}
