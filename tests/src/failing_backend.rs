use crate::Backend;

use fieldmap_core::{
    async_trait, err,
    schema::{DatabaseId, DatabaseMetadata, TableId, TableMetadata},
    FieldMutations, MetadataRepository, Operation, Result,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

/// Fails a configurable number of upcoming calls.
///
/// Mutations and table fetches are counted separately. A failed call never
/// reaches the inner backend.
#[derive(Debug)]
pub struct FailingBackend {
    inner: Arc<dyn Backend>,
    mutations: AtomicUsize,
    table_fetches: AtomicUsize,
}

impl FailingBackend {
    pub fn new(inner: Arc<dyn Backend>) -> Self {
        Self {
            inner,
            mutations: AtomicUsize::new(0),
            table_fetches: AtomicUsize::new(0),
        }
    }

    /// Fail the next `count` mutations.
    pub fn fail_next(&self, count: usize) {
        self.mutations.store(count, Ordering::SeqCst);
    }

    /// Fail the next `count` table fetches.
    pub fn fail_next_fetches(&self, count: usize) {
        self.table_fetches.store(count, Ordering::SeqCst);
    }
}

fn take_failure(remaining: &AtomicUsize) -> bool {
    remaining
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok()
}

#[async_trait]
impl MetadataRepository for FailingBackend {
    async fn fetch_table(&self, table: TableId, force_reload: bool) -> Result<TableMetadata> {
        if take_failure(&self.table_fetches) {
            return Err(err!("injected failure; table={table}"));
        }

        self.inner.fetch_table(table, force_reload).await
    }

    async fn fetch_database(&self, database: DatabaseId) -> Result<DatabaseMetadata> {
        self.inner.fetch_database(database).await
    }
}

#[async_trait]
impl FieldMutations for FailingBackend {
    async fn exec(&self, operation: Operation) -> Result<()> {
        if take_failure(&self.mutations) {
            return Err(err!("injected failure; field={}", operation.field()));
        }

        self.inner.exec(operation).await
    }
}
