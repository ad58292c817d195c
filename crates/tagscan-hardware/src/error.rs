//! Error types for reader operations.
//!
//! These cover the ways the platform side of tag discovery can fail: the
//! reader going away, no adapter being present, or polling calls rejected by
//! the device. None of them describe the tag itself; tags that cannot be
//! accessed are reported by [`tagscan_core::Error::UnsupportedTagFormat`].

/// Result type alias for reader operations.
pub type Result<T> = std::result::Result<T, HardwareError>;

/// Errors that can occur during reader operations.
#[derive(Debug, thiserror::Error)]
pub enum HardwareError {
    /// Reader is not connected or has been disconnected.
    #[error("Device disconnected: {device}")]
    Disconnected { device: String },

    /// No NFC adapter was found on this host.
    #[error("NFC adapter unavailable: {message}")]
    AdapterUnavailable { message: String },

    /// A tag was presented while polling was disabled.
    #[error("Polling disabled on {device}")]
    NotPolling { device: String },

    /// Device communication error.
    #[error("Communication error: {message}")]
    CommunicationError { message: String },
}

impl HardwareError {
    /// Create a new disconnected error.
    pub fn disconnected(device: impl Into<String>) -> Self {
        Self::Disconnected {
            device: device.into(),
        }
    }

    /// Create a new adapter unavailable error.
    pub fn adapter_unavailable(message: impl Into<String>) -> Self {
        Self::AdapterUnavailable {
            message: message.into(),
        }
    }

    /// Create a new polling disabled error.
    pub fn not_polling(device: impl Into<String>) -> Self {
        Self::NotPolling {
            device: device.into(),
        }
    }

    /// Create a new communication error.
    pub fn communication(message: impl Into<String>) -> Self {
        Self::CommunicationError {
            message: message.into(),
        }
    }

    /// Check if the reader is gone for good.
    pub fn is_disconnected(&self) -> bool {
        matches!(self, Self::Disconnected { .. })
    }
}

impl From<HardwareError> for tagscan_core::Error {
    fn from(error: HardwareError) -> Self {
        tagscan_core::Error::hardware_unavailable(error.to_string())
    }
}
