//! Editing a field's custom value remappings

use fieldmap_core::{
    schema::{FieldId, RawValue, RemappingTable},
    Error, FieldMutations, Result,
};
use indexmap::IndexMap;
use log::{debug, info};

/// In-progress edits of one field's remapping table.
///
/// The buffer is a plain value owned by the caller; every edit returns a new
/// buffer. Keys are fixed when the buffer is seeded and keep their order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    entries: IndexMap<RawValue, String>,
}

/// Result of [`repair_if_incomplete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repair {
    pub buffer: EditBuffer,

    /// `true` if the seeded buffer had to be written back.
    pub wrote: bool,
}

impl EditBuffer {
    /// Seeds a buffer from a stored table. Unset entries map to the
    /// original value's string form.
    pub fn seed(table: &RemappingTable) -> EditBuffer {
        EditBuffer {
            entries: table
                .iter()
                .map(|(original, mapped)| {
                    let mapped = match mapped {
                        Some(mapped) => mapped.to_string(),
                        None => original.to_string(),
                    };
                    (original.clone(), mapped)
                })
                .collect(),
        }
    }

    /// Replaces the display string of `original`.
    ///
    /// A key that is not in the buffer leaves it unchanged.
    pub fn set_value(mut self, original: &RawValue, mapped: impl Into<String>) -> EditBuffer {
        match self.entries.get_mut(original) {
            Some(entry) => *entry = mapped.into(),
            None => debug!("ignoring edit of unknown value; original={original}"),
        }
        self
    }

    pub fn get(&self, original: &RawValue) -> Option<&str> {
        self.entries.get(original).map(String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&RawValue, &str)> + '_ {
        self.entries
            .iter()
            .map(|(original, mapped)| (original, mapped.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if every entry has a non-empty display string.
    pub fn is_savable(&self) -> bool {
        self.entries.values().all(|mapped| !mapped.is_empty())
    }

    pub fn empty_count(&self) -> usize {
        self.entries.values().filter(|mapped| mapped.is_empty()).count()
    }

    /// The full, ordered list of pairs sent when saving.
    pub fn to_pairs(&self) -> Vec<(RawValue, String)> {
        self.entries
            .iter()
            .map(|(original, mapped)| (original.clone(), mapped.clone()))
            .collect()
    }

    /// The buffer as a stored table, every entry set.
    pub fn to_table(&self) -> RemappingTable {
        self.entries
            .iter()
            .map(|(original, mapped)| (original.clone(), Some(mapped.clone())))
            .collect()
    }
}

/// Seeds an edit buffer and, if any entry was unset, persists the seeded
/// buffer before returning.
///
/// An internal dimension must not be left with partial coverage, so the
/// write happens as soon as the gap is found rather than on the first
/// explicit save.
pub async fn repair_if_incomplete(
    field: FieldId,
    table: &RemappingTable,
    mutations: &dyn FieldMutations,
) -> Result<Repair> {
    let buffer = EditBuffer::seed(table);

    if !table.has_unset() {
        return Ok(Repair {
            buffer,
            wrote: false,
        });
    }

    info!(
        "persisting seeded remappings; field={field} unset={}",
        table.unset_count()
    );
    mutations.update_field_values(field, buffer.to_pairs()).await?;

    Ok(Repair {
        buffer,
        wrote: true,
    })
}

/// Replaces the stored remapping table with the buffer's contents.
///
/// Rejected with `IncompleteRemapping` before any call when an entry is
/// empty.
pub async fn save(
    field: FieldId,
    buffer: &EditBuffer,
    mutations: &dyn FieldMutations,
) -> Result<()> {
    if !buffer.is_savable() {
        return Err(Error::incomplete_remapping(buffer.empty_count()));
    }

    debug!("saving remappings; field={field} values={}", buffer.len());
    mutations.update_field_values(field, buffer.to_pairs()).await
}
