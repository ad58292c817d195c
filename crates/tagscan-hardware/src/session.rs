//! Reader polling session.
//!
//! A host only wants tags routed to it while it is in the foreground. The
//! [`PollingSession`] owns the reader and tracks whether polling is on, so the
//! host can call [`start`](PollingSession::start) when it becomes active and
//! [`stop`](PollingSession::stop) when it is suspended, as often as it likes.
//!
//! Both calls are best-effort: a reader that refuses the change is logged and
//! the session keeps its previous state, so the next call retries. A session
//! created without a reader (no NFC adapter on the host) accepts both calls and
//! does nothing.
//!
//! # Examples
//!
//! ```
//! use tagscan_hardware::mock::MockTagReader;
//! use tagscan_hardware::session::PollingSession;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (reader, handle) = MockTagReader::new();
//!     let mut session = PollingSession::new(Some(reader));
//!
//!     session.start().await;
//!     session.start().await;
//!     assert!(handle.is_polling());
//!
//!     session.stop().await;
//!     assert!(!handle.is_polling());
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::traits::TagReader;
use crate::{HardwareError, Result, ScannedTag};

/// Polling state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No adapter; lifecycle calls are ignored.
    Unavailable,

    /// Adapter present, not polling.
    Stopped,

    /// Adapter present and polling.
    Active,
}

/// Owns a reader and its polling lifecycle.
#[derive(Debug)]
pub struct PollingSession<R: TagReader> {
    reader: Option<R>,
    active: bool,
}

impl<R: TagReader> PollingSession<R> {
    /// Create a session for the host's adapter, if it has one.
    pub fn new(reader: Option<R>) -> Self {
        if reader.is_none() {
            debug!("No NFC adapter available, polling session is inert");
        }
        Self {
            reader,
            active: false,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> SessionState {
        match (&self.reader, self.active) {
            (None, _) => SessionState::Unavailable,
            (Some(_), false) => SessionState::Stopped,
            (Some(_), true) => SessionState::Active,
        }
    }

    /// Check if the reader is polling.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Check if the host has an adapter at all.
    pub fn is_available(&self) -> bool {
        self.reader.is_some()
    }

    /// Get the underlying reader, if any.
    pub fn reader(&self) -> Option<&R> {
        self.reader.as_ref()
    }

    /// Enable polling. Does nothing if already active or no adapter exists.
    ///
    /// Returns whether the session is active afterwards.
    pub async fn start(&mut self) -> bool {
        if self.active {
            return true;
        }
        let Some(reader) = self.reader.as_mut() else {
            return false;
        };

        match reader.enable_polling().await {
            Ok(()) => {
                info!("NFC polling enabled");
                self.active = true;
            }
            Err(e) => error!("Error enabling NFC polling: {}", e),
        }
        self.active
    }

    /// Disable polling. Does nothing if already stopped or no adapter exists.
    ///
    /// Returns whether the session is active afterwards.
    pub async fn stop(&mut self) -> bool {
        if !self.active {
            return false;
        }
        let Some(reader) = self.reader.as_mut() else {
            return false;
        };

        match reader.disable_polling().await {
            Ok(()) => {
                info!("NFC polling disabled");
                self.active = false;
            }
            Err(e) => error!("Error disabling NFC polling: {}", e),
        }
        self.active
    }

    /// Wait for the next discovery event from the reader.
    ///
    /// # Errors
    ///
    /// Returns [`HardwareError::AdapterUnavailable`] if the session has no
    /// reader, and [`HardwareError::NotPolling`] if it is not active. Reader
    /// errors are passed through.
    pub async fn next_tag(&mut self) -> Result<Option<ScannedTag>> {
        let Some(reader) = self.reader.as_mut() else {
            return Err(HardwareError::adapter_unavailable("no reader in session"));
        };
        if !self.active {
            return Err(HardwareError::not_polling("session"));
        }
        reader.next_tag().await
    }
}
