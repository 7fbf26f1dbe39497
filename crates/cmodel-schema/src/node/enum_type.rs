use crate::{annotation::Annotations, types::PrimitiveTypeKind};

///
/// EnumType
///

#[derive(Clone, Debug)]
pub struct EnumType {
    name: String,
    annotations: Annotations,
    underlying_type: PrimitiveTypeKind,
    is_flags: bool,
    members: Vec<EnumTypeMember>,
}

crate::node::impl_namespace_item!(EnumType, EnumType);

impl EnumType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Annotations::new(),
            underlying_type: PrimitiveTypeKind::Int32,
            is_flags: false,
            members: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_underlying_type(mut self, underlying_type: PrimitiveTypeKind) -> Self {
        self.underlying_type = underlying_type;
        self
    }

    #[must_use]
    pub const fn with_flags(mut self, is_flags: bool) -> Self {
        self.is_flags = is_flags;
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: EnumTypeMember) -> Self {
        self.members.push(member);
        self
    }

    #[must_use]
    pub const fn underlying_type(&self) -> PrimitiveTypeKind {
        self.underlying_type
    }

    #[must_use]
    pub const fn is_flags(&self) -> bool {
        self.is_flags
    }

    #[must_use]
    pub fn members(&self) -> &[EnumTypeMember] {
        &self.members
    }

    #[must_use]
    pub const fn has_members(&self) -> bool {
        !self.members.is_empty()
    }
}

///
/// EnumTypeMember
///

#[derive(Clone, Debug)]
pub struct EnumTypeMember {
    name: String,
    annotations: Annotations,
    value: i64,
}

crate::node::impl_named_item!(EnumTypeMember, EnumTypeMember);

impl EnumTypeMember {
    #[must_use]
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            annotations: Annotations::new(),
            value,
        }
    }

    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }
}
