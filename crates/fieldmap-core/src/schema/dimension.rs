use super::FieldId;
use crate::{Error, Result};
use std::{fmt, str::FromStr};

/// How a field's raw values are turned into display values.
///
/// The set of shapes is closed: anything the metadata service sends that is
/// not one of these is rejected when decoded (see [`Dimension::decode`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "wire::RawDimension", into = "wire::RawDimension")
)]
pub enum Dimension {
    /// No remapping; the raw value is displayed.
    #[default]
    None,

    /// The display value is looked up from another field, usually the
    /// human readable name of the row a foreign key points at.
    ///
    /// The target is `None` when no sensible default existed and the user
    /// has not picked one yet.
    External { target: Option<FieldId> },

    /// The display value comes from the field's own remapping table.
    Internal,
}

/// The type tag of a stored dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DimensionType {
    External,
    Internal,
}

/// The dimension payload sent to the mutation service.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionSpec {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: DimensionType,

    /// Display name of the dimension. Set to the field's display name.
    pub name: String,

    /// Field to read display values from. Always `None` for internal
    /// dimensions.
    pub human_readable_field_id: Option<FieldId>,
}

impl Dimension {
    /// Decodes a dimension from its untyped stored form.
    ///
    /// `ty` is `None` when the field has no dimension at all.
    pub fn decode(ty: Option<&str>, human_readable_field_id: Option<FieldId>) -> Result<Dimension> {
        let Some(ty) = ty else {
            return Ok(Dimension::None);
        };

        Ok(match ty.parse::<DimensionType>()? {
            DimensionType::External => Dimension::External {
                target: human_readable_field_id,
            },
            DimensionType::Internal => Dimension::Internal,
        })
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Self::External { .. })
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }

    /// The type tag, or `None` when there is no dimension.
    pub fn ty(&self) -> Option<DimensionType> {
        match self {
            Self::None => None,
            Self::External { .. } => Some(DimensionType::External),
            Self::Internal => Some(DimensionType::Internal),
        }
    }

    /// The human readable field of an external dimension.
    pub fn external_target(&self) -> Option<FieldId> {
        match self {
            Self::External { target } => *target,
            _ => None,
        }
    }
}

impl From<&DimensionSpec> for Dimension {
    fn from(spec: &DimensionSpec) -> Self {
        match spec.ty {
            DimensionType::External => Dimension::External {
                target: spec.human_readable_field_id,
            },
            DimensionType::Internal => Dimension::Internal,
        }
    }
}

impl DimensionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::External => "external",
            Self::Internal => "internal",
        }
    }
}

impl FromStr for DimensionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "external" => Ok(Self::External),
            "internal" => Ok(Self::Internal),
            other => Err(Error::unrecognized_mapping_type(other)),
        }
    }
}

impl fmt::Display for DimensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DimensionSpec {
    pub fn external(name: impl Into<String>, target: Option<FieldId>) -> DimensionSpec {
        DimensionSpec {
            ty: DimensionType::External,
            name: name.into(),
            human_readable_field_id: target,
        }
    }

    pub fn internal(name: impl Into<String>) -> DimensionSpec {
        DimensionSpec {
            ty: DimensionType::Internal,
            name: name.into(),
            human_readable_field_id: None,
        }
    }
}

#[cfg(feature = "serde")]
mod wire {
    use super::*;

    /// Untyped dimension as stored by the metadata service.
    #[derive(serde::Serialize, serde::Deserialize)]
    pub(super) struct RawDimension {
        #[serde(rename = "type", default)]
        ty: Option<String>,

        #[serde(default)]
        human_readable_field_id: Option<FieldId>,
    }

    impl TryFrom<RawDimension> for Dimension {
        type Error = Error;

        fn try_from(raw: RawDimension) -> Result<Dimension> {
            Dimension::decode(raw.ty.as_deref(), raw.human_readable_field_id)
        }
    }

    impl From<Dimension> for RawDimension {
        fn from(dimension: Dimension) -> RawDimension {
            RawDimension {
                ty: dimension.ty().map(|ty| ty.as_str().to_string()),
                human_readable_field_id: dimension.external_target(),
            }
        }
    }
}
