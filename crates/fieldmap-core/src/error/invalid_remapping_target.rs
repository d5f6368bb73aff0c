use super::Error;

/// Error when the requested mode or target field was filtered out.
///
/// This covers:
/// - Selecting a mode that is not among the field's available modes
/// - Selecting a foreign key target that is date/time typed
/// - Selecting a field that is not in the target table at all
#[derive(Debug)]
pub(super) struct InvalidRemappingTargetError {
    message: Box<str>,
}

impl std::error::Error for InvalidRemappingTargetError {}

impl core::fmt::Display for InvalidRemappingTargetError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid remapping target: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid remapping target error.
    pub fn invalid_remapping_target(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRemappingTarget(
            InvalidRemappingTargetError {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid remapping target error.
    pub fn is_invalid_remapping_target(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRemappingTarget(_))
    }
}
