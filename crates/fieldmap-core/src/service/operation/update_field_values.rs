use super::*;
use crate::schema::RawValue;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateFieldValues {
    pub field: FieldId,

    /// Every `(original, mapped)` pair of the table, in order. The stored
    /// table is replaced as a whole.
    pub values: Vec<(RawValue, String)>,
}

impl From<UpdateFieldValues> for Operation {
    fn from(value: UpdateFieldValues) -> Self {
        Self::UpdateFieldValues(value)
    }
}
