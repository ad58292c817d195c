//! Enum wrapper for reader dispatch.
//!
//! Native `async fn` in traits (Edition 2024 RPITIT) are not object-safe, so
//! `Box<dyn TagReader>` is not an option. [`AnyTagReader`] provides concrete
//! type dispatch instead, which also keeps the dispatcher's spawned task `Send`.
//!
//! # Examples
//!
//! ```
//! use tagscan_hardware::devices::AnyTagReader;
//! use tagscan_hardware::mock::MockTagReader;
//!
//! let (reader, _handle) = MockTagReader::new();
//! let any_reader = AnyTagReader::Mock(reader);
//! ```

use crate::mock::MockTagReader;
use crate::traits::TagReader;
use crate::{ReaderInfo, Result, ScannedTag};

/// Enum wrapper for reader dispatch.
///
/// # Examples
///
/// ```
/// use tagscan_hardware::devices::AnyTagReader;
/// use tagscan_hardware::mock::MockTagReader;
/// use tagscan_hardware::traits::TagReader;
///
/// #[tokio::main]
/// async fn main() -> tagscan_hardware::Result<()> {
///     let (reader, _handle) = MockTagReader::new();
///     let any_reader = AnyTagReader::Mock(reader);
///
///     let info = any_reader.get_reader_info().await?;
///     println!("Reader: {}", info.name);
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
#[non_exhaustive]
pub enum AnyTagReader {
    /// Mock reader for development and testing.
    Mock(MockTagReader),
}

impl TagReader for AnyTagReader {
    async fn next_tag(&mut self) -> Result<Option<ScannedTag>> {
        match self {
            Self::Mock(device) => device.next_tag().await,
        }
    }

    async fn enable_polling(&mut self) -> Result<()> {
        match self {
            Self::Mock(device) => device.enable_polling().await,
        }
    }

    async fn disable_polling(&mut self) -> Result<()> {
        match self {
            Self::Mock(device) => device.disable_polling().await,
        }
    }

    async fn get_reader_info(&self) -> Result<ReaderInfo> {
        match self {
            Self::Mock(device) => device.get_reader_info().await,
        }
    }
}

impl From<MockTagReader> for AnyTagReader {
    fn from(reader: MockTagReader) -> Self {
        Self::Mock(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_any_reader_delegates_to_mock() {
        let (reader, handle) = MockTagReader::new();
        let mut any_reader = AnyTagReader::from(reader);

        any_reader.enable_polling().await.unwrap();
        assert!(handle.is_polling());

        handle
            .present_tag(vec!["formatable".to_string()], Some(vec![0x07]))
            .await
            .unwrap();
        let scanned = any_reader.next_tag().await.unwrap().unwrap();
        assert_eq!(scanned.tag.id, Some(vec![0x07]));

        any_reader.disable_polling().await.unwrap();
        assert!(!handle.is_polling());
    }

    #[tokio::test]
    async fn test_any_reader_info() {
        let (reader, _handle) = MockTagReader::with_name("Lobby".to_string());
        let any_reader = AnyTagReader::Mock(reader);

        let info = any_reader.get_reader_info().await.unwrap();
        assert_eq!(info.name, "Lobby");
    }
}
