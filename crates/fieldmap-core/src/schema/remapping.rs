use super::RawValue;
use indexmap::IndexMap;

/// Ordered mapping from a field's raw values to custom display strings.
///
/// Every value known to occur in the field has an entry. An entry whose
/// display string is `None` is *unset*: no custom mapping has been saved for
/// it yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemappingTable {
    entries: IndexMap<RawValue, Option<String>>,
}

impl RemappingTable {
    pub fn new() -> RemappingTable {
        RemappingTable::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts or replaces an entry. New keys are appended; replaced keys
    /// keep their position.
    pub fn insert(&mut self, original: impl Into<RawValue>, mapped: Option<String>) {
        self.entries.insert(original.into(), mapped);
    }

    pub fn contains(&self, original: &RawValue) -> bool {
        self.entries.contains_key(original)
    }

    /// Returns the entry for `original`; the inner option is `None` when the
    /// entry is unset.
    pub fn get(&self, original: &RawValue) -> Option<Option<&str>> {
        self.entries.get(original).map(Option::as_deref)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&RawValue, Option<&str>)> + '_ {
        self.entries
            .iter()
            .map(|(original, mapped)| (original, mapped.as_deref()))
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &RawValue> + '_ {
        self.entries.keys()
    }

    /// Returns `true` if every key is numeric. Vacuously true when empty.
    pub fn has_only_numeric_keys(&self) -> bool {
        self.entries.keys().all(RawValue::is_numeric)
    }

    /// Number of entries without a display string.
    pub fn unset_count(&self) -> usize {
        self.entries.values().filter(|v| v.is_none()).count()
    }

    pub fn has_unset(&self) -> bool {
        self.entries.values().any(Option::is_none)
    }

    /// Returns `true` if every entry has a non-empty display string. This is
    /// what the metadata service requires of an internal dimension.
    pub fn is_complete(&self) -> bool {
        self.entries
            .values()
            .all(|mapped| mapped.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

impl<K: Into<RawValue>> FromIterator<(K, Option<String>)> for RemappingTable {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        RemappingTable {
            entries: iter
                .into_iter()
                .map(|(original, mapped)| (original.into(), mapped))
                .collect(),
        }
    }
}

impl<K: Into<RawValue>> Extend<(K, Option<String>)> for RemappingTable {
    fn extend<I: IntoIterator<Item = (K, Option<String>)>>(&mut self, iter: I) {
        for (original, mapped) in iter {
            self.insert(original, mapped);
        }
    }
}
