use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeleteFieldDimension {
    pub field: FieldId,
}

impl From<DeleteFieldDimension> for Operation {
    fn from(value: DeleteFieldDimension) -> Self {
        Self::DeleteFieldDimension(value)
    }
}
