use derive_more::Display;

///
/// PrimitiveTypeKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum PrimitiveTypeKind {
    Binary,
    Boolean,
    Byte,
    DateTime,
    DateTimeOffset,
    Decimal,
    Double,
    Geography,
    Geometry,
    Guid,
    Int16,
    Int32,
    Int64,
    SByte,
    Single,
    String,
    Time,
}

impl PrimitiveTypeKind {
    // the kinds an enum type may use as its underlying type
    #[must_use]
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::SByte | Self::Int16 | Self::Int32 | Self::Int64
        )
    }

    #[must_use]
    pub const fn is_spatial(self) -> bool {
        matches!(self, Self::Geography | Self::Geometry)
    }
}

///
/// RelationshipMultiplicity
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum RelationshipMultiplicity {
    ZeroOrOne,
    #[default]
    One,
    Many,
}

///
/// OperationAction
/// What happens to the dependent end when the principal is deleted.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum OperationAction {
    #[default]
    None,
    Cascade,
    Restrict,
}

///
/// EndRole
/// Selects one of the two ends of an association type.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum EndRole {
    Source,
    Target,
}

impl EndRole {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Source => Self::Target,
            Self::Target => Self::Source,
        }
    }
}

///
/// ParameterMode
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum ParameterMode {
    #[default]
    In,
    Out,
    InOut,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_integral_kinds_back_enums() {
        assert!(PrimitiveTypeKind::Int32.is_integral());
        assert!(PrimitiveTypeKind::SByte.is_integral());
        assert!(!PrimitiveTypeKind::Decimal.is_integral());
        assert!(!PrimitiveTypeKind::String.is_integral());
    }

    #[test]
    fn spatial_kinds() {
        assert!(PrimitiveTypeKind::Geography.is_spatial());
        assert!(PrimitiveTypeKind::Geometry.is_spatial());
        assert!(!PrimitiveTypeKind::Binary.is_spatial());
    }

    #[test]
    fn end_role_opposite_round_trips() {
        assert_eq!(EndRole::Source.opposite(), EndRole::Target);
        assert_eq!(EndRole::Target.opposite().opposite(), EndRole::Target);
    }
}
