//! Reader abstraction and discovery dispatch for the tagscan workspace.
//!
//! This crate is the platform side of tag discovery. It owns everything
//! `tagscan-core` deliberately leaves out: talking to the reader, turning
//! polling on and off with the host's lifecycle, and delivering discovery
//! outcomes to the host.
//!
//! # Components
//!
//! - [`TagReader`]: async reader contract, with a [`mock`] implementation for
//!   development and tests.
//! - [`PollingSession`]: idempotent, best-effort `start()`/`stop()` of reader
//!   polling, tolerant of hosts without an NFC adapter.
//! - [`TagDispatcher`]: runs the reader in a Tokio task and emits one
//!   [`TagEvent`] per discovered tag.
//!
//! ```no_run
//! use tagscan_hardware::{DispatchConfig, TagDispatcher, TagEvent};
//! use tagscan_hardware::devices::AnyTagReader;
//! use tagscan_hardware::mock::MockTagReader;
//!
//! #[tokio::main]
//! async fn main() -> tagscan_hardware::Result<()> {
//!     let (reader, _handle) = MockTagReader::new();
//!     let mut dispatcher = TagDispatcher::new(DispatchConfig::default());
//!     dispatcher.register_reader(AnyTagReader::Mock(reader));
//!
//!     let mut handle = dispatcher.start();
//!     handle.pause().await?;
//!     handle.resume().await?;
//!
//!     if let Some(TagEvent::Read { read, .. }) = handle.recv().await {
//!         println!("{}", serde_json::to_string(&read).unwrap());
//!     }
//!
//!     handle.shutdown().await
//! }
//! ```
//!
//! # Error Handling
//!
//! Reader operations return [`Result<T>`][error::Result] with
//! [`HardwareError`]. Failures that mean a discovery event never materialized
//! are logged and skipped by the dispatcher; they convert into
//! [`tagscan_core::Error::HardwareUnavailable`].

pub mod devices;
pub mod dispatcher;
pub mod error;
pub mod mock;
pub mod session;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use dispatcher::{DispatchConfig, DispatchHandle, TagDispatcher, TagEvent};
pub use error::{HardwareError, Result};
pub use session::{PollingSession, SessionState};
pub use traits::TagReader;
pub use types::{ReaderInfo, ScannedTag, ScannedTagBuilder};
