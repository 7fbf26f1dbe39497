//! Function groups and function imports.
//!
//! These node kinds sit outside the default traversal. A visitor opts in by
//! implementing [`FunctionVisitor`] and returning itself from
//! [`Visitor::functions`]; namespaces then descend into their function groups
//! and containers into their function imports, after every other child
//! collection.

use crate::visit::{Visitor, visit_collection};
use cmodel_schema::node::{
    DataModelItem, EntityContainer, FunctionGroup, FunctionImport, FunctionOverload,
    FunctionParameter, NamedMetadataItem, Namespace,
};
use tracing::trace;

///
/// FunctionVisitor
///
/// Same contract as [`Visitor`]: overrides extend by calling the matching
/// `walk_*` function in this module.
///

pub trait FunctionVisitor: Visitor {
    fn visit_function_groups(
        &mut self,
        namespace: &Namespace,
        groups: &[FunctionGroup],
    ) -> Result<(), Self::Error> {
        walk_function_groups(self, namespace, groups)
    }

    fn visit_function_group(&mut self, item: &FunctionGroup) -> Result<(), Self::Error> {
        walk_function_group(self, item)
    }

    fn visit_function_overloads(
        &mut self,
        group: &FunctionGroup,
        overloads: &[FunctionOverload],
    ) -> Result<(), Self::Error> {
        walk_function_overloads(self, group, overloads)
    }

    fn visit_function_overload(&mut self, item: &FunctionOverload) -> Result<(), Self::Error> {
        walk_function_overload(self, item)
    }

    fn visit_function_overload_parameters(
        &mut self,
        overload: &FunctionOverload,
        parameters: &[FunctionParameter],
    ) -> Result<(), Self::Error> {
        walk_function_overload_parameters(self, overload, parameters)
    }

    fn visit_function_imports(
        &mut self,
        container: &EntityContainer,
        imports: &[FunctionImport],
    ) -> Result<(), Self::Error> {
        walk_function_imports(self, container, imports)
    }

    fn visit_function_import(&mut self, item: &FunctionImport) -> Result<(), Self::Error> {
        walk_function_import(self, item)
    }

    fn visit_function_import_parameters(
        &mut self,
        import: &FunctionImport,
        parameters: &[FunctionParameter],
    ) -> Result<(), Self::Error> {
        walk_function_import_parameters(self, import, parameters)
    }

    fn visit_function_parameter(&mut self, item: &FunctionParameter) -> Result<(), Self::Error> {
        walk_function_parameter(self, item)
    }
}

// ============================================================================
// Namespace side
// ============================================================================

pub fn walk_function_groups<V: FunctionVisitor + ?Sized>(
    v: &mut V,
    _namespace: &Namespace,
    groups: &[FunctionGroup],
) -> Result<(), V::Error> {
    visit_collection(groups, |group| v.visit_function_group(group))
}

pub fn walk_function_group<V: FunctionVisitor + ?Sized>(
    v: &mut V,
    item: &FunctionGroup,
) -> Result<(), V::Error> {
    trace!(kind = %item.kind(), name = item.name(), "visit");
    v.visit_namespace_item(item)?;

    if item.has_overloads() {
        v.visit_function_overloads(item, item.overloads())?;
    }

    Ok(())
}

pub fn walk_function_overloads<V: FunctionVisitor + ?Sized>(
    v: &mut V,
    _group: &FunctionGroup,
    overloads: &[FunctionOverload],
) -> Result<(), V::Error> {
    visit_collection(overloads, |overload| v.visit_function_overload(overload))
}

/// Return type first when declared, then the parameters.
pub fn walk_function_overload<V: FunctionVisitor + ?Sized>(
    v: &mut V,
    item: &FunctionOverload,
) -> Result<(), V::Error> {
    trace!(kind = %item.kind(), "visit");
    v.visit_metadata_item(item)?;

    if let Some(return_type) = item.return_type() {
        v.visit_type_reference(return_type)?;
    }
    if item.has_parameters() {
        v.visit_function_overload_parameters(item, item.parameters())?;
    }

    Ok(())
}

pub fn walk_function_overload_parameters<V: FunctionVisitor + ?Sized>(
    v: &mut V,
    _overload: &FunctionOverload,
    parameters: &[FunctionParameter],
) -> Result<(), V::Error> {
    visit_collection(parameters, |parameter| v.visit_function_parameter(parameter))
}

// ============================================================================
// Container side
// ============================================================================

pub fn walk_function_imports<V: FunctionVisitor + ?Sized>(
    v: &mut V,
    _container: &EntityContainer,
    imports: &[FunctionImport],
) -> Result<(), V::Error> {
    visit_collection(imports, |import| v.visit_function_import(import))
}

pub fn walk_function_import<V: FunctionVisitor + ?Sized>(
    v: &mut V,
    item: &FunctionImport,
) -> Result<(), V::Error> {
    trace!(kind = %item.kind(), name = item.name(), "visit");
    v.visit_named_item(item)?;

    if let Some(return_type) = item.return_type() {
        v.visit_type_reference(return_type)?;
    }
    if item.has_parameters() {
        v.visit_function_import_parameters(item, item.parameters())?;
    }

    Ok(())
}

pub fn walk_function_import_parameters<V: FunctionVisitor + ?Sized>(
    v: &mut V,
    _import: &FunctionImport,
    parameters: &[FunctionParameter],
) -> Result<(), V::Error> {
    visit_collection(parameters, |parameter| v.visit_function_parameter(parameter))
}

pub fn walk_function_parameter<V: FunctionVisitor + ?Sized>(
    v: &mut V,
    item: &FunctionParameter,
) -> Result<(), V::Error> {
    trace!(kind = %item.kind(), name = item.name(), "visit");
    v.visit_named_item(item)?;
    v.visit_type_reference(item.parameter_type())
}
