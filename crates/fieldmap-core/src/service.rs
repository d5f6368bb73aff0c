//! Collaborators the editor talks to

pub mod operation;
pub use operation::{
    DeleteFieldDimension, Operation, UpdateField, UpdateFieldDimension, UpdateFieldValues,
};

use crate::{
    async_trait,
    schema::{
        DatabaseId, DatabaseMetadata, DimensionSpec, FieldId, RawValue, TableId, TableMetadata,
    },
    Result,
};

use std::fmt::Debug;

/// Read side of the metadata service.
#[async_trait]
pub trait MetadataRepository: Debug + Send + Sync + 'static {
    /// Fetches a table and its fields.
    ///
    /// Dimensions and remapping tables must be hydrated on the returned
    /// fields. With `force_reload`, cached copies must not be used.
    async fn fetch_table(&self, table: TableId, force_reload: bool) -> Result<TableMetadata>;

    /// Fetches a database and all of its tables.
    async fn fetch_database(&self, database: DatabaseId) -> Result<DatabaseMetadata>;
}

/// Write side of the metadata service.
///
/// Each operation is one atomic remote call. Implementations only need
/// [`exec`](FieldMutations::exec); the named methods build the operation and
/// forward to it.
#[async_trait]
pub trait FieldMutations: Debug + Send + Sync + 'static {
    /// Execute a mutation
    async fn exec(&self, op: Operation) -> Result<()>;

    async fn update_field(&self, update: UpdateField) -> Result<()> {
        self.exec(update.into()).await
    }

    /// Replaces the field's whole remapping table with `values`.
    async fn update_field_values(
        &self,
        field: FieldId,
        values: Vec<(RawValue, String)>,
    ) -> Result<()> {
        self.exec(UpdateFieldValues { field, values }.into()).await
    }

    /// Creates or replaces the field's dimension.
    async fn update_field_dimension(&self, field: FieldId, dimension: DimensionSpec) -> Result<()> {
        self.exec(UpdateFieldDimension { field, dimension }.into()).await
    }

    async fn delete_field_dimension(&self, field: FieldId) -> Result<()> {
        self.exec(DeleteFieldDimension { field }.into()).await
    }
}
