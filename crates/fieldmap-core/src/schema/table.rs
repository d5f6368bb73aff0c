use super::{DatabaseId, Field};

id! {
    /// Identifies a table.
    TableId
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub id: TableId,

    /// The database containing the table.
    pub db: DatabaseId,

    pub name: String,

    pub display_name: String,
}

/// A table and its fields, as returned by the metadata repository.
#[derive(Debug, Clone, PartialEq)]
pub struct TableMetadata {
    pub table: Table,

    /// Fields in display order.
    pub fields: Vec<Field>,
}

impl Table {
    pub fn new(id: impl Into<TableId>, db: impl Into<DatabaseId>, name: &str) -> Table {
        Table {
            id: id.into(),
            db: db.into(),
            name: name.to_string(),
            display_name: name.to_string(),
        }
    }
}

impl TableMetadata {
    pub fn field(&self, id: impl Into<super::FieldId>) -> Option<&Field> {
        let id = id.into();
        self.fields.iter().find(|field| field.id == id)
    }
}

impl From<&Table> for TableId {
    fn from(val: &Table) -> Self {
        val.id
    }
}
