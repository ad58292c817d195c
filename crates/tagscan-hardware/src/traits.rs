//! Reader trait definitions.
//!
//! [`TagReader`] is the contract between the discovery dispatcher and an NFC
//! reader backend. It uses native `async fn` methods (Edition 2024 RPITIT), so
//! it is not object-safe; use generics or the
//! [`AnyTagReader`](crate::devices::AnyTagReader) enum for dispatch.

#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::types::{ReaderInfo, ScannedTag};

/// NFC reader abstraction.
///
/// A reader only delivers tags while polling is enabled. Hosts enable polling
/// when they come to the foreground and disable it when they are suspended,
/// normally through a [`PollingSession`](crate::session::PollingSession).
///
/// # Examples
///
/// ```no_run
/// use tagscan_core::discovery;
/// use tagscan_hardware::error::Result;
/// use tagscan_hardware::traits::TagReader;
///
/// async fn first_tag_id<R: TagReader>(reader: &mut R) -> Result<Option<String>> {
///     reader.enable_polling().await?;
///
///     loop {
///         let Some(scanned) = reader.next_tag().await? else {
///             continue;
///         };
///         if let Ok(read) = discovery::handle(&scanned.tag) {
///             return Ok(read.tag_id.map(|id| id.to_string()));
///         }
///     }
/// }
/// ```
pub trait TagReader: Send + Sync {
    /// Wait for the next discovery event.
    ///
    /// Returns `Ok(None)` when the platform delivered an event that carried no
    /// tag; callers ignore those.
    ///
    /// This method must be cancel-safe: dropping the future before it
    /// completes must not lose a tag.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The reader is disconnected
    /// - A communication error occurs
    async fn next_tag(&mut self) -> Result<Option<ScannedTag>>;

    /// Start routing discovered tags to this reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the device refuses to start polling.
    async fn enable_polling(&mut self) -> Result<()>;

    /// Stop routing discovered tags to this reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the device refuses to stop polling.
    async fn disable_polling(&mut self) -> Result<()>;

    /// Get reader information.
    ///
    /// # Errors
    ///
    /// Returns an error if a communication error occurs while querying
    /// reader information.
    async fn get_reader_info(&self) -> Result<ReaderInfo>;
}
