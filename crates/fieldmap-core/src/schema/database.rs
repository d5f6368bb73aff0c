use super::TableMetadata;

id! {
    /// Identifies a database.
    DatabaseId
}

#[derive(Debug, Clone, PartialEq)]
pub struct Database {
    pub id: DatabaseId,
    pub name: String,
}

/// A database with all of its tables.
///
/// Fetched up front so that FK options can be computed for any table the
/// field may come to point at.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseMetadata {
    pub database: Database,
    pub tables: Vec<TableMetadata>,
}
