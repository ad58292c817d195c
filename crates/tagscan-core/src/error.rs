use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The tag advertises no technology we can access it through.
    #[error("Unsupported tag format: tag doesn't support ndef")]
    UnsupportedTagFormat,

    /// The reader could not deliver a discovery event.
    #[error("Hardware unavailable: {reason}")]
    HardwareUnavailable { reason: String },
}

impl Error {
    /// Create a new hardware unavailable error.
    pub fn hardware_unavailable(reason: impl Into<String>) -> Self {
        Self::HardwareUnavailable {
            reason: reason.into(),
        }
    }

    /// Check if this error is a technology negotiation failure.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedTagFormat)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_display() {
        let error = Error::UnsupportedTagFormat;
        assert!(error.is_unsupported());
        assert_eq!(
            error.to_string(),
            "Unsupported tag format: tag doesn't support ndef"
        );
    }

    #[test]
    fn test_hardware_unavailable_display() {
        let error = Error::hardware_unavailable("adapter missing");
        assert!(!error.is_unsupported());
        assert_eq!(error.to_string(), "Hardware unavailable: adapter missing");
    }
}
