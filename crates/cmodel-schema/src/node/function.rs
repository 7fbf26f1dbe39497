//! Function node kinds.
//!
//! Groups live under namespaces and imports under containers, but default
//! traversal only reaches them when a visitor opts into the function surface.

use crate::{annotation::Annotations, node::TypeReference, types::ParameterMode};

///
/// FunctionGroup
///

#[derive(Clone, Debug)]
pub struct FunctionGroup {
    name: String,
    annotations: Annotations,
    overloads: Vec<FunctionOverload>,
}

crate::node::impl_namespace_item!(FunctionGroup, FunctionGroup);

impl FunctionGroup {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Annotations::new(),
            overloads: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_overload(mut self, overload: FunctionOverload) -> Self {
        self.overloads.push(overload);
        self
    }

    #[must_use]
    pub fn overloads(&self) -> &[FunctionOverload] {
        &self.overloads
    }

    #[must_use]
    pub const fn has_overloads(&self) -> bool {
        !self.overloads.is_empty()
    }
}

///
/// FunctionOverload
/// Unnamed; identified by its position within the group.
///

#[derive(Clone, Debug, Default)]
pub struct FunctionOverload {
    annotations: Annotations,
    return_type: Option<TypeReference>,
    parameters: Vec<FunctionParameter>,
}

crate::node::impl_metadata_item!(FunctionOverload, FunctionOverload);

impl FunctionOverload {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            annotations: Annotations::new(),
            return_type: None,
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_return_type(mut self, return_type: TypeReference) -> Self {
        self.return_type = Some(return_type);
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: FunctionParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    #[must_use]
    pub const fn return_type(&self) -> Option<&TypeReference> {
        self.return_type.as_ref()
    }

    #[must_use]
    pub fn parameters(&self) -> &[FunctionParameter] {
        &self.parameters
    }

    #[must_use]
    pub const fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }
}

///
/// FunctionImport
///

#[derive(Clone, Debug)]
pub struct FunctionImport {
    name: String,
    annotations: Annotations,
    return_type: Option<TypeReference>,
    parameters: Vec<FunctionParameter>,
}

crate::node::impl_named_item!(FunctionImport, FunctionImport);

impl FunctionImport {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Annotations::new(),
            return_type: None,
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_return_type(mut self, return_type: TypeReference) -> Self {
        self.return_type = Some(return_type);
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: FunctionParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    #[must_use]
    pub const fn return_type(&self) -> Option<&TypeReference> {
        self.return_type.as_ref()
    }

    #[must_use]
    pub fn parameters(&self) -> &[FunctionParameter] {
        &self.parameters
    }

    #[must_use]
    pub const fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }
}

///
/// FunctionParameter
///

#[derive(Clone, Debug)]
pub struct FunctionParameter {
    name: String,
    annotations: Annotations,
    parameter_type: TypeReference,
    mode: ParameterMode,
}

crate::node::impl_named_item!(FunctionParameter, FunctionParameter);

impl FunctionParameter {
    #[must_use]
    pub fn new(name: impl Into<String>, parameter_type: TypeReference) -> Self {
        Self {
            name: name.into(),
            annotations: Annotations::new(),
            parameter_type,
            mode: ParameterMode::In,
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: ParameterMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn parameter_type(&self) -> &TypeReference {
        &self.parameter_type
    }

    #[must_use]
    pub const fn mode(&self) -> ParameterMode {
        self.mode
    }
}
