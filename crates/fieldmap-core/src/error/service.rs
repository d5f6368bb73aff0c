use super::Error;

/// Error returned by a metadata or mutation service.
#[derive(Debug)]
pub(super) struct ServiceError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a collaborator failure.
    ///
    /// Backends use this to hand transport or service errors back to the
    /// editor, which propagates them unchanged.
    pub fn service(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Service(ServiceError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error came from a collaborator.
    pub fn is_service(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Service(_))
    }
}
