use super::Error;

/// Error when a remapping save is attempted while some values still have an
/// empty display string. Raised before any service call.
#[derive(Debug)]
pub(super) struct IncompleteRemappingError {
    empty: usize,
}

impl std::error::Error for IncompleteRemappingError {}

impl core::fmt::Display for IncompleteRemappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.empty == 1 {
            f.write_str("incomplete remapping: 1 value has no display string")
        } else {
            write!(
                f,
                "incomplete remapping: {} values have no display string",
                self.empty
            )
        }
    }
}

impl Error {
    /// Creates an incomplete remapping error; `empty` is the number of
    /// entries without a display string.
    pub fn incomplete_remapping(empty: usize) -> Error {
        Error::from(super::ErrorKind::IncompleteRemapping(
            IncompleteRemappingError { empty },
        ))
    }

    /// Returns `true` if this error is an incomplete remapping error.
    pub fn is_incomplete_remapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::IncompleteRemapping(_))
    }
}
