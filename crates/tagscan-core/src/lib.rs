//! Tag technology negotiation and identifier extraction for NFC tags.
//!
//! Given the technologies advertised by a freshly discovered tag, this crate
//! picks the access mode to use ([`resolver`]) and renders the tag's raw serial
//! number as a canonical hex identifier ([`codec`]). The [`discovery`] module
//! ties both together into a single per-event outcome.
//!
//! ```
//! use tagscan_core::{AccessMode, TagDiscovered, discovery};
//!
//! let event = TagDiscovered::new(
//!     vec!["record-exchange".to_string()],
//!     Some(vec![0x04, 0xA1, 0xFF]),
//! );
//! let read = discovery::handle(&event).unwrap();
//!
//! assert_eq!(read.access_mode, AccessMode::Readable);
//! assert_eq!(read.tag_id.unwrap().as_str(), "04A1FF");
//! ```
//!
//! Everything here is synchronous and stateless across calls. Polling the
//! reader hardware is the job of the `tagscan-hardware` crate.

pub mod codec;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod resolver;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
