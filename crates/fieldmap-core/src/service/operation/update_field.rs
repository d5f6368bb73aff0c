use super::*;
use crate::schema::SemanticType;

/// Partial update of a field's general properties. `None` leaves the
/// property unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateField {
    pub field: FieldId,

    pub display_name: Option<String>,

    pub semantic_type: Option<SemanticType>,

    pub fk_target_field_id: Option<FieldId>,
}

impl UpdateField {
    pub fn new(field: FieldId) -> UpdateField {
        UpdateField {
            field,
            ..UpdateField::default()
        }
    }
}

impl From<UpdateField> for Operation {
    fn from(value: UpdateField) -> Self {
        Self::UpdateField(value)
    }
}
