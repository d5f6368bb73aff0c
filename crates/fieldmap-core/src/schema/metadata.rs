use super::{
    Database, DatabaseId, DatabaseMetadata, Field, FieldId, ForeignKeyOption, Table, TableId,
    TableMetadata, TargetDimension,
};
use crate::{Error, Result};
use indexmap::IndexMap;
use log::warn;

/// The loaded portion of the metadata graph.
///
/// Built up from repository fetches; a later fetch of the same table
/// replaces everything previously known about it.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    databases: IndexMap<DatabaseId, Database>,
    tables: IndexMap<TableId, Table>,
    fields: IndexMap<FieldId, Field>,
}

impl Metadata {
    pub fn new() -> Metadata {
        Metadata::default()
    }

    pub fn field(&self, id: impl Into<FieldId>) -> Result<&Field> {
        let id = id.into();
        self.fields
            .get(&id)
            .ok_or_else(|| Error::missing_metadata(format!("field {id}")))
    }

    pub fn field_mut(&mut self, id: impl Into<FieldId>) -> Result<&mut Field> {
        let id = id.into();
        self.fields
            .get_mut(&id)
            .ok_or_else(|| Error::missing_metadata(format!("field {id}")))
    }

    pub fn get_field(&self, id: impl Into<FieldId>) -> Option<&Field> {
        self.fields.get(&id.into())
    }

    pub fn table(&self, id: impl Into<TableId>) -> Result<&Table> {
        let id = id.into();
        self.tables
            .get(&id)
            .ok_or_else(|| Error::missing_metadata(format!("table {id}")))
    }

    pub fn database(&self, id: DatabaseId) -> Result<&Database> {
        self.databases
            .get(&id)
            .ok_or_else(|| Error::missing_metadata(format!("database {id}")))
    }

    /// Fields of a table, in display order.
    pub fn fields_of(&self, table: impl Into<TableId>) -> impl Iterator<Item = &Field> + '_ {
        let table = table.into();
        self.fields.values().filter(move |field| field.table == table)
    }

    /// Tables of a database, in load order.
    pub fn tables_of(&self, database: DatabaseId) -> impl Iterator<Item = &Table> + '_ {
        self.tables.values().filter(move |table| table.db == database)
    }

    /// An owned copy of a table and its fields.
    pub fn table_metadata(&self, id: impl Into<TableId>) -> Result<TableMetadata> {
        let table = self.table(id)?;

        Ok(TableMetadata {
            table: table.clone(),
            fields: self.fields_of(table.id).cloned().collect(),
        })
    }

    /// An owned copy of a database and all of its tables.
    pub fn database_metadata(&self, id: DatabaseId) -> Result<DatabaseMetadata> {
        let database = self.database(id)?;

        Ok(DatabaseMetadata {
            database: database.clone(),
            tables: self
                .tables_of(id)
                .map(|table| self.table_metadata(table.id))
                .collect::<Result<_>>()?,
        })
    }

    /// Merges a fetched table, replacing the table and all of its fields.
    ///
    /// Fields that claim to belong to a different table are dropped.
    pub fn apply_table(&mut self, table: TableMetadata) {
        let id = table.table.id;
        self.fields.retain(|_, field| field.table != id);
        self.tables.insert(id, table.table);

        for field in table.fields {
            if field.table != id {
                warn!(
                    "skipping field listed under another table; field={} table={id} owner={}",
                    field.id, field.table
                );
                continue;
            }
            self.fields.insert(field.id, field);
        }
    }

    /// Merges a fetched database and every table in it.
    pub fn apply_database(&mut self, database: DatabaseMetadata) {
        self.databases
            .insert(database.database.id, database.database);

        for table in database.tables {
            self.apply_table(table);
        }
    }

    /// Computes the foreign key options of a table.
    ///
    /// A field contributes an option when it is a foreign key, has a target
    /// and the target's table is loaded. Options are in field order.
    pub fn foreign_key_options(&self, table: impl Into<TableId>) -> Result<Vec<ForeignKeyOption>> {
        let table = self.table(table)?.id;

        Ok(self
            .fields_of(table)
            .filter_map(|field| {
                let target = self.get_field(field.foreign_key_target()?)?;

                Some(ForeignKeyOption {
                    field: field.id,
                    target_table: target.table,
                    dimensions: self
                        .fields_of(target.table)
                        .map(TargetDimension::for_field)
                        .collect(),
                })
            })
            .collect())
    }
}
