//! Mock NFC reader implementation for testing and development.
//!
//! This module provides a simulated reader that can be controlled
//! programmatically for testing without requiring physical hardware.

use crate::{
    HardwareError, Result,
    traits::TagReader,
    types::{ReaderInfo, ScannedTag},
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tagscan_core::TagDiscovered;
use tagscan_core::constants::{
    TECH_ISO_DEP, TECH_NDEF, TECH_NDEF_FORMATABLE, TECH_NFC_A, TECH_NFC_B,
};
use tokio::sync::mpsc;

/// Mock NFC reader for testing and development.
///
/// Tags are presented through the paired [`MockTagReaderHandle`]. Like a real
/// adapter, the reader only accepts tags while polling is enabled.
///
/// # Examples
///
/// ```
/// use tagscan_hardware::mock::MockTagReader;
/// use tagscan_hardware::traits::TagReader;
///
/// #[tokio::main]
/// async fn main() -> tagscan_hardware::Result<()> {
///     let (mut reader, handle) = MockTagReader::new();
///     reader.enable_polling().await?;
///
///     handle
///         .present_tag(vec!["android.nfc.tech.Ndef".to_string()], Some(vec![0x04, 0xA1]))
///         .await?;
///
///     let scanned = reader.next_tag().await?.unwrap();
///     assert_eq!(scanned.tag.id, Some(vec![0x04, 0xA1]));
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockTagReader {
    /// Channel receiver for discovery events
    event_rx: mpsc::Receiver<Option<ScannedTag>>,

    /// Device name
    name: String,

    /// Polling flag, shared with the handle
    polling: Arc<AtomicBool>,

    /// When set, polling calls fail as if the host were not in the foreground
    fail_polling: Arc<AtomicBool>,
}

impl MockTagReader {
    /// Create a new mock reader with the default name.
    ///
    /// Returns a tuple of (MockTagReader, MockTagReaderHandle) where the handle
    /// can be used to simulate tag presentations.
    pub fn new() -> (Self, MockTagReaderHandle) {
        Self::with_name("Mock NFC Reader".to_string())
    }

    /// Create a new mock reader with a custom name.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagscan_hardware::mock::MockTagReader;
    ///
    /// let (_reader, handle) = MockTagReader::with_name("Front Desk".to_string());
    /// assert_eq!(handle.name(), "Front Desk");
    /// ```
    pub fn with_name(name: String) -> (Self, MockTagReaderHandle) {
        let (event_tx, event_rx) = mpsc::channel(32);
        let polling = Arc::new(AtomicBool::new(false));
        let fail_polling = Arc::new(AtomicBool::new(false));

        let reader = Self {
            event_rx,
            name: name.clone(),
            polling: Arc::clone(&polling),
            fail_polling: Arc::clone(&fail_polling),
        };

        let handle = MockTagReaderHandle {
            event_tx,
            name,
            polling,
            fail_polling,
        };

        (reader, handle)
    }

    /// Check if polling is currently enabled.
    pub fn is_polling(&self) -> bool {
        self.polling.load(Ordering::SeqCst)
    }

    fn set_polling(&mut self, enabled: bool) -> Result<()> {
        if self.fail_polling.load(Ordering::SeqCst) {
            return Err(HardwareError::communication(format!(
                "{} rejected polling change",
                self.name
            )));
        }
        self.polling.store(enabled, Ordering::SeqCst);
        Ok(())
    }
}

impl Default for MockTagReader {
    fn default() -> Self {
        Self::new().0
    }
}

impl TagReader for MockTagReader {
    async fn next_tag(&mut self) -> Result<Option<ScannedTag>> {
        self.event_rx
            .recv()
            .await
            .ok_or_else(|| HardwareError::disconnected("NFC event channel closed"))
    }

    async fn enable_polling(&mut self) -> Result<()> {
        self.set_polling(true)
    }

    async fn disable_polling(&mut self) -> Result<()> {
        self.set_polling(false)
    }

    async fn get_reader_info(&self) -> Result<ReaderInfo> {
        Ok(ReaderInfo::new(
            self.name.clone(),
            vec![
                TECH_NFC_A.to_string(),
                TECH_NFC_B.to_string(),
                TECH_ISO_DEP.to_string(),
                TECH_NDEF.to_string(),
                TECH_NDEF_FORMATABLE.to_string(),
            ],
        )
        .with_max_baud_rate(424000))
    }
}

/// Handle for controlling a mock reader.
///
/// Cloned handles share the reader's event channel and polling flag.
#[derive(Debug, Clone)]
pub struct MockTagReaderHandle {
    /// Channel sender for discovery events
    event_tx: mpsc::Sender<Option<ScannedTag>>,

    /// Device name
    name: String,

    polling: Arc<AtomicBool>,

    fail_polling: Arc<AtomicBool>,
}

impl MockTagReaderHandle {
    /// Present a tag to the reader.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Polling is disabled on the reader
    /// - The reader has been dropped and the channel is closed
    pub async fn present_tag(
        &self,
        technologies: Vec<String>,
        id: Option<Vec<u8>>,
    ) -> Result<()> {
        self.present(Some(ScannedTag::new(TagDiscovered::new(technologies, id))))
            .await
    }

    /// Deliver a discovery event that carries no tag.
    ///
    /// # Errors
    ///
    /// Same as [`present_tag`](Self::present_tag).
    pub async fn present_empty(&self) -> Result<()> {
        self.present(None).await
    }

    async fn present(&self, event: Option<ScannedTag>) -> Result<()> {
        if !self.is_polling() {
            return Err(HardwareError::not_polling(self.name.clone()));
        }

        self.event_tx
            .send(event)
            .await
            .map_err(|_| HardwareError::disconnected("NFC event channel closed"))
    }

    /// Make subsequent enable/disable calls fail (or succeed again).
    pub fn set_polling_failure(&self, fail: bool) {
        self.fail_polling.store(fail, Ordering::SeqCst);
    }

    /// Check if the reader is currently polling.
    pub fn is_polling(&self) -> bool {
        self.polling.load(Ordering::SeqCst)
    }

    /// Get the device name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ndef() -> Vec<String> {
        vec![TECH_NDEF.to_string()]
    }

    #[tokio::test]
    async fn test_mock_reader_present_and_read() {
        let (mut reader, handle) = MockTagReader::new();
        reader.enable_polling().await.unwrap();

        tokio::spawn(async move {
            handle
                .present_tag(ndef(), Some(vec![0x04, 0xAB, 0xCD, 0xEF]))
                .await
                .unwrap();
        });

        let scanned = reader.next_tag().await.unwrap().unwrap();
        assert_eq!(scanned.tag.technologies, ndef());
        assert_eq!(scanned.tag.id, Some(vec![0x04, 0xAB, 0xCD, 0xEF]));
    }

    #[tokio::test]
    async fn test_mock_reader_multiple_tags_in_order() {
        let (mut reader, handle) = MockTagReader::new();
        reader.enable_polling().await.unwrap();

        handle.present_tag(ndef(), Some(vec![0x01])).await.unwrap();
        handle.present_tag(ndef(), Some(vec![0x02])).await.unwrap();

        let first = reader.next_tag().await.unwrap().unwrap();
        let second = reader.next_tag().await.unwrap().unwrap();
        assert_eq!(first.tag.id, Some(vec![0x01]));
        assert_eq!(second.tag.id, Some(vec![0x02]));
    }

    #[tokio::test]
    async fn test_mock_reader_empty_event() {
        let (mut reader, handle) = MockTagReader::new();
        reader.enable_polling().await.unwrap();

        handle.present_empty().await.unwrap();
        assert!(reader.next_tag().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mock_reader_rejects_tags_when_not_polling() {
        let (_reader, handle) = MockTagReader::new();

        let result = handle.present_tag(ndef(), None).await;
        assert!(matches!(result, Err(HardwareError::NotPolling { .. })));
    }

    #[tokio::test]
    async fn test_mock_reader_polling_flag() {
        let (mut reader, handle) = MockTagReader::new();
        assert!(!reader.is_polling());

        reader.enable_polling().await.unwrap();
        assert!(reader.is_polling());
        assert!(handle.is_polling());

        reader.disable_polling().await.unwrap();
        assert!(!handle.is_polling());
    }

    #[tokio::test]
    async fn test_mock_reader_polling_failure() {
        let (mut reader, handle) = MockTagReader::new();
        handle.set_polling_failure(true);

        assert!(reader.enable_polling().await.is_err());
        assert!(!reader.is_polling());

        handle.set_polling_failure(false);
        reader.enable_polling().await.unwrap();
        assert!(reader.is_polling());
    }

    #[tokio::test]
    async fn test_mock_reader_disconnected() {
        let (mut reader, handle) = MockTagReader::new();
        drop(handle);

        let result = reader.next_tag().await;
        assert!(matches!(result, Err(HardwareError::Disconnected { .. })));
    }

    #[tokio::test]
    async fn test_mock_reader_get_reader_info() {
        let (reader, _handle) = MockTagReader::with_name("Test Reader".to_string());

        let info = reader.get_reader_info().await.unwrap();
        assert_eq!(info.name, "Test Reader");
        assert!(info.technologies.contains(&TECH_NDEF.to_string()));
        assert_eq!(info.max_baud_rate, Some(424000));
    }
}
