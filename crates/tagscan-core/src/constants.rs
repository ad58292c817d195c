//! Technology names advertised by NFC tags.
//!
//! Readers report the technologies a tag supports as plain strings. On Android
//! these are the canonical class names of the `android.nfc.tech` handles; other
//! hosts and test fixtures use the short aliases below. Every name listed here
//! maps onto one [`TagTechnology`](crate::TagTechnology) variant.
//!
//! ```
//! use tagscan_core::constants::*;
//!
//! assert!(NDEF_NAMES.contains(&"android.nfc.tech.Ndef"));
//! assert!(NDEF_FORMATABLE_NAMES.contains(&"formatable"));
//! ```

/// Platform name of the NDEF record-exchange technology.
pub const TECH_NDEF: &str = "android.nfc.tech.Ndef";

/// Platform name of the NDEF pre-format technology.
pub const TECH_NDEF_FORMATABLE: &str = "android.nfc.tech.NdefFormatable";

pub const TECH_NFC_A: &str = "android.nfc.tech.NfcA";
pub const TECH_NFC_B: &str = "android.nfc.tech.NfcB";
pub const TECH_NFC_F: &str = "android.nfc.tech.NfcF";
pub const TECH_NFC_V: &str = "android.nfc.tech.NfcV";
pub const TECH_ISO_DEP: &str = "android.nfc.tech.IsoDep";
pub const TECH_MIFARE_CLASSIC: &str = "android.nfc.tech.MifareClassic";
pub const TECH_MIFARE_ULTRALIGHT: &str = "android.nfc.tech.MifareUltralight";
pub const TECH_NFC_BARCODE: &str = "android.nfc.tech.NfcBarcode";

/// All names accepted for the record-exchange technology.
pub const NDEF_NAMES: &[&str] = &[
    TECH_NDEF,
    "ndef",
    "record-exchange",
    "standard-record-exchange",
];

/// All names accepted for the formatable technology.
pub const NDEF_FORMATABLE_NAMES: &[&str] =
    &[TECH_NDEF_FORMATABLE, "ndef-formatable", "formatable"];

/// Default capacity of the dispatcher event channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 32;
