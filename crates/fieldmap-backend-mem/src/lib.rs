//! In-memory metadata service.
//!
//! Holds a metadata graph behind a mutex and applies mutations the way the
//! real service does, including its validation of dimension targets and
//! remapping coverage.

use fieldmap_core::{
    async_trait, bail,
    schema::{DatabaseId, DatabaseMetadata, Dimension, Field, FieldId, TableId, TableMetadata},
    service::{DeleteFieldDimension, UpdateField, UpdateFieldDimension, UpdateFieldValues},
    FieldMutations, Metadata, MetadataRepository, Operation, Result,
};
use log::trace;

use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemBackend {
    store: Mutex<Metadata>,
}

impl MemBackend {
    pub fn new() -> MemBackend {
        MemBackend::default()
    }

    /// Creates a backend serving one database.
    pub fn with_database(database: DatabaseMetadata) -> MemBackend {
        let backend = MemBackend::new();
        backend.insert_database(database);
        backend
    }

    pub fn insert_database(&self, database: DatabaseMetadata) {
        self.store.lock().unwrap().apply_database(database);
    }

    pub fn insert_table(&self, table: TableMetadata) {
        self.store.lock().unwrap().apply_table(table);
    }

    /// Returns a copy of a stored field.
    pub fn field(&self, id: FieldId) -> Result<Field> {
        self.store.lock().unwrap().field(id).cloned()
    }

    /// Applies `f` to a stored field, bypassing the operation interface.
    /// Used to simulate changes made by other clients.
    pub fn modify_field(&self, id: FieldId, f: impl FnOnce(&mut Field)) -> Result<()> {
        let mut store = self.store.lock().unwrap();
        f(store.field_mut(id)?);
        Ok(())
    }

    fn apply_update_field(store: &mut Metadata, op: UpdateField) -> Result<()> {
        if let Some(target) = op.fk_target_field_id {
            store.field(target)?;
        }

        let field = store.field_mut(op.field)?;
        if let Some(display_name) = op.display_name {
            field.display_name = display_name;
        }
        if let Some(semantic_type) = op.semantic_type {
            field.semantic_type = Some(semantic_type);
        }
        if let Some(target) = op.fk_target_field_id {
            field.fk_target_field_id = Some(target);
        }
        Ok(())
    }

    fn apply_update_field_values(store: &mut Metadata, op: UpdateFieldValues) -> Result<()> {
        let field = store.field_mut(op.field)?;

        if let Some(missing) = field
            .remapping
            .keys()
            .find(|key| !op.values.iter().any(|(original, _)| original == *key))
        {
            bail!(
                "remapping must cover every value; field={} missing={missing}",
                op.field
            );
        }

        field.remapping = op
            .values
            .into_iter()
            .map(|(original, mapped)| (original, Some(mapped)))
            .collect();
        Ok(())
    }

    fn apply_update_field_dimension(store: &mut Metadata, op: UpdateFieldDimension) -> Result<()> {
        if let Some(target) = op.dimension.human_readable_field_id {
            store.field(target)?;
        }

        store.field_mut(op.field)?.dimension = Dimension::from(&op.dimension);
        Ok(())
    }

    fn apply_delete_field_dimension(store: &mut Metadata, op: DeleteFieldDimension) -> Result<()> {
        store.field_mut(op.field)?.dimension = Dimension::None;
        Ok(())
    }
}

#[async_trait]
impl MetadataRepository for MemBackend {
    async fn fetch_table(&self, table: TableId, _force_reload: bool) -> Result<TableMetadata> {
        trace!("fetch table; table={table}");
        self.store.lock().unwrap().table_metadata(table)
    }

    async fn fetch_database(&self, database: DatabaseId) -> Result<DatabaseMetadata> {
        trace!("fetch database; database={database}");
        self.store.lock().unwrap().database_metadata(database)
    }
}

#[async_trait]
impl FieldMutations for MemBackend {
    async fn exec(&self, op: Operation) -> Result<()> {
        trace!("exec; op={op:?}");
        let mut store = self.store.lock().unwrap();

        match op {
            Operation::UpdateField(op) => Self::apply_update_field(&mut store, op),
            Operation::UpdateFieldValues(op) => Self::apply_update_field_values(&mut store, op),
            Operation::UpdateFieldDimension(op) => {
                Self::apply_update_field_dimension(&mut store, op)
            }
            Operation::DeleteFieldDimension(op) => {
                Self::apply_delete_field_dimension(&mut store, op)
            }
        }
    }
}
