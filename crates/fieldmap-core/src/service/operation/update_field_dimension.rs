use super::*;
use crate::schema::DimensionSpec;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateFieldDimension {
    pub field: FieldId,

    /// The dimension to store. Any existing dimension is replaced.
    pub dimension: DimensionSpec,
}

impl From<UpdateFieldDimension> for Operation {
    fn from(value: UpdateFieldDimension) -> Self {
        Self::UpdateFieldDimension(value)
    }
}
