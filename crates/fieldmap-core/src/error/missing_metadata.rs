use super::Error;

/// Error when a field, table or database is not present in the loaded
/// metadata.
#[derive(Debug)]
pub(super) struct MissingMetadataError {
    what: Box<str>,
}

impl std::error::Error for MissingMetadataError {}

impl core::fmt::Display for MissingMetadataError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing metadata: {}", self.what)
    }
}

impl Error {
    /// Creates a missing metadata error. `what` names the missing entity,
    /// e.g. `"field 12"`.
    pub fn missing_metadata(what: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingMetadata(MissingMetadataError {
            what: what.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing metadata error.
    pub fn is_missing_metadata(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingMetadata(_))
    }
}
