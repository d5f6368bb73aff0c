mod delete_field_dimension;
pub use delete_field_dimension::DeleteFieldDimension;

mod update_field;
pub use update_field::UpdateField;

mod update_field_dimension;
pub use update_field_dimension::UpdateFieldDimension;

mod update_field_values;
pub use update_field_values::UpdateFieldValues;

use crate::schema::FieldId;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum Operation {
    /// Update general field properties
    UpdateField(UpdateField),

    /// Replace the field's remapping table
    UpdateFieldValues(UpdateFieldValues),

    /// Create or replace the field's dimension
    UpdateFieldDimension(UpdateFieldDimension),

    /// Remove the field's dimension
    DeleteFieldDimension(DeleteFieldDimension),
}

impl Operation {
    /// The field the operation mutates.
    pub fn field(&self) -> FieldId {
        match self {
            Self::UpdateField(op) => op.field,
            Self::UpdateFieldValues(op) => op.field,
            Self::UpdateFieldDimension(op) => op.field,
            Self::DeleteFieldDimension(op) => op.field,
        }
    }

    pub fn is_dimension_write(&self) -> bool {
        matches!(
            self,
            Self::UpdateFieldDimension(_) | Self::DeleteFieldDimension(_)
        )
    }
}
