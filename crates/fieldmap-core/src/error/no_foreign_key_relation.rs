use super::Error;
use crate::schema::FieldId;

/// Error when foreign key targets are requested for a field that has no
/// foreign key option in the owning table's metadata.
#[derive(Debug)]
pub(super) struct NoForeignKeyRelationError {
    field: FieldId,
}

impl std::error::Error for NoForeignKeyRelationError {}

impl core::fmt::Display for NoForeignKeyRelationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field {} has no foreign key relation in the loaded metadata",
            self.field
        )
    }
}

impl Error {
    /// Creates a no foreign key relation error.
    pub fn no_foreign_key_relation(field: FieldId) -> Error {
        Error::from(super::ErrorKind::NoForeignKeyRelation(
            NoForeignKeyRelationError { field },
        ))
    }

    /// Returns `true` if this error is a no foreign key relation error.
    pub fn is_no_foreign_key_relation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoForeignKeyRelation(_))
    }
}
