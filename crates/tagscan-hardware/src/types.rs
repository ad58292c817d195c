//! Common types shared across reader implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tagscan_core::TagDiscovered;

/// NFC reader information.
///
/// Contains reader-specific metadata such as the technologies it can poll for
/// and its maximum baud rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderInfo {
    /// Reader name (e.g., "ACR122U NFC Reader").
    pub name: String,

    /// Technologies the reader can discover (e.g., ["android.nfc.tech.NfcA"]).
    pub technologies: Vec<String>,

    /// Maximum supported baud rate in bits per second.
    pub max_baud_rate: Option<u32>,
}

impl ReaderInfo {
    /// Create a new ReaderInfo.
    pub fn new(name: impl Into<String>, technologies: Vec<String>) -> Self {
        Self {
            name: name.into(),
            technologies,
            max_baud_rate: None,
        }
    }

    /// Set the maximum baud rate.
    pub fn with_max_baud_rate(mut self, max_baud_rate: u32) -> Self {
        self.max_baud_rate = Some(max_baud_rate);
        self
    }
}

/// A tag observed by a reader, with the time it was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedTag {
    /// Capability list and serial as reported by the tag.
    pub tag: TagDiscovered,

    /// Timestamp when the tag was discovered.
    pub timestamp: DateTime<Utc>,
}

impl ScannedTag {
    /// Create a scanned tag stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagscan_core::TagDiscovered;
    /// use tagscan_hardware::ScannedTag;
    ///
    /// let tag = TagDiscovered::new(vec!["android.nfc.tech.Ndef".to_string()], Some(vec![0x04]));
    /// let scanned = ScannedTag::new(tag);
    /// assert_eq!(scanned.tag.technologies.len(), 1);
    /// ```
    pub fn new(tag: TagDiscovered) -> Self {
        ScannedTagBuilder::new(tag).build()
    }

    /// Create a builder, e.g. to replay a discovery with its original timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use tagscan_core::TagDiscovered;
    /// use tagscan_hardware::ScannedTag;
    ///
    /// let seen_at = Utc.with_ymd_and_hms(2025, 1, 15, 12, 30, 0).unwrap();
    /// let scanned = ScannedTag::builder(TagDiscovered::new(vec![], None))
    ///     .timestamp(seen_at)
    ///     .build();
    /// assert_eq!(scanned.timestamp, seen_at);
    /// ```
    pub fn builder(tag: TagDiscovered) -> ScannedTagBuilder {
        ScannedTagBuilder::new(tag)
    }
}

/// Builder for [`ScannedTag`].
#[derive(Debug, Clone)]
pub struct ScannedTagBuilder {
    tag: TagDiscovered,
    timestamp: Option<DateTime<Utc>>,
}

impl ScannedTagBuilder {
    /// Create a new builder for the given discovery.
    pub fn new(tag: TagDiscovered) -> Self {
        Self {
            tag,
            timestamp: None,
        }
    }

    /// Set a custom discovery timestamp.
    ///
    /// If not set, the current time is used when `build()` is called.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Build the scanned tag.
    pub fn build(self) -> ScannedTag {
        ScannedTag {
            tag: self.tag,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
        }
    }
}
