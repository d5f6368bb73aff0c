use super::Error;

/// Error when a mode or dimension type name does not match any known variant.
///
/// Once decoded, dimensions are a closed enum, so this only surfaces at the
/// boundary where untyped names come in. It indicates corrupted metadata or
/// a caller bug and must not be swallowed.
#[derive(Debug)]
pub(super) struct UnrecognizedMappingTypeError {
    value: Box<str>,
}

impl std::error::Error for UnrecognizedMappingTypeError {}

impl core::fmt::Display for UnrecognizedMappingTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unrecognized mapping type: `{}`", self.value)
    }
}

impl Error {
    /// Creates an unrecognized mapping type error for the given name.
    pub fn unrecognized_mapping_type(value: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnrecognizedMappingType(
            UnrecognizedMappingTypeError {
                value: value.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unrecognized mapping type error.
    pub fn is_unrecognized_mapping_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnrecognizedMappingType(_))
    }
}
