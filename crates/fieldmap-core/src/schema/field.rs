use super::{BaseType, Dimension, RemappingTable, SemanticType, TableId};

id! {
    /// Identifies a field across the whole metadata graph.
    FieldId
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Uniquely identifies the field.
    pub id: FieldId,

    /// The table containing the field.
    pub table: TableId,

    /// Column name in the database.
    pub name: String,

    /// User facing name. Falls back to `name` when empty.
    pub display_name: String,

    /// Storage type of the column.
    pub base_type: BaseType,

    /// Semantic type, if one has been assigned.
    pub semantic_type: Option<SemanticType>,

    /// For foreign keys, the field the key points at.
    pub fk_target_field_id: Option<FieldId>,

    /// How values are displayed.
    pub dimension: Dimension,

    /// Known raw values and their custom display strings.
    pub remapping: RemappingTable,
}

impl Field {
    /// Creates a field with no semantic type, dimension or known values.
    pub fn new(
        id: impl Into<FieldId>,
        table: impl Into<TableId>,
        name: &str,
        base_type: BaseType,
    ) -> Field {
        Field {
            id: id.into(),
            table: table.into(),
            name: name.to_string(),
            display_name: name.to_string(),
            base_type,
            semantic_type: None,
            fk_target_field_id: None,
            dimension: Dimension::None,
            remapping: RemappingTable::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }

    pub fn is_foreign_key(&self) -> bool {
        self.semantic_type
            .as_ref()
            .map(SemanticType::is_foreign_key)
            .unwrap_or(false)
    }

    pub fn is_name(&self) -> bool {
        self.semantic_type
            .as_ref()
            .map(SemanticType::is_name)
            .unwrap_or(false)
    }

    /// Returns the FK target if the field is a foreign key that points
    /// somewhere.
    pub fn foreign_key_target(&self) -> Option<FieldId> {
        if self.is_foreign_key() {
            self.fk_target_field_id
        } else {
            None
        }
    }
}

impl From<&Field> for FieldId {
    fn from(val: &Field) -> Self {
        val.id
    }
}
