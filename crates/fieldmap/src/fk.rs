//! Finding the fields a foreign key can borrow display values from

use fieldmap_core::{
    schema::{Field, FieldId, TableId, TargetDimension},
    Error, Metadata, Result,
};

/// A foreign key together with the target-table fields that may serve as
/// its display value.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyCandidate {
    /// The foreign key field
    pub field: FieldId,

    /// The table the key points into
    pub target_table: TableId,

    /// Usable targets, in the target table's field order
    pub targets: Vec<TargetDimension>,
}

/// Lists the remapping candidates for `field`.
///
/// Date/time fields never serve as a label and are dropped. Fails with
/// `NoForeignKeyRelation` when the owning table offers no foreign key
/// option for the field, which includes the case where the target table
/// has not been loaded.
pub fn candidates(field: &Field, metadata: &Metadata) -> Result<Vec<ForeignKeyCandidate>> {
    let candidates: Vec<_> = metadata
        .foreign_key_options(field.table)?
        .into_iter()
        .filter(|option| option.field == field.id)
        .map(|option| ForeignKeyCandidate {
            field: option.field,
            target_table: option.target_table,
            targets: option
                .dimensions
                .into_iter()
                .filter(is_valid_target)
                .collect(),
        })
        .collect();

    if candidates.is_empty() {
        return Err(Error::no_foreign_key_relation(field.id));
    }

    Ok(candidates)
}

pub fn is_valid_target(dimension: &TargetDimension) -> bool {
    !dimension.is_datetime()
}

/// Proposes a target: the first entity name field of the target table.
///
/// Returns `None` when the table has no name field; the user then has to
/// pick a target explicitly.
pub fn default_target(candidates: &[ForeignKeyCandidate]) -> Option<FieldId> {
    candidates
        .first()?
        .targets
        .iter()
        .find(|target| target.is_name())
        .map(|target| target.field)
}

pub fn contains_target(candidates: &[ForeignKeyCandidate], target: FieldId) -> bool {
    candidates
        .iter()
        .flat_map(|candidate| &candidate.targets)
        .any(|dimension| dimension.field == target)
}

/// Checks that `target` is one of the candidates' targets.
pub fn validate_target(
    candidates: &[ForeignKeyCandidate],
    target: FieldId,
    metadata: &Metadata,
) -> Result<()> {
    if contains_target(candidates, target) {
        return Ok(());
    }

    let in_target_table = metadata.get_field(target).is_some_and(|field| {
        candidates
            .iter()
            .any(|candidate| candidate.target_table == field.table)
    });

    if in_target_table {
        Err(Error::invalid_remapping_target(format!(
            "field {target} is a date/time field"
        )))
    } else {
        Err(Error::invalid_remapping_target(format!(
            "field {target} is not in the foreign key's target table"
        )))
    }
}
