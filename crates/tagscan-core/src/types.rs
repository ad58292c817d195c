use crate::constants::{
    NDEF_FORMATABLE_NAMES, NDEF_NAMES, TECH_ISO_DEP, TECH_MIFARE_CLASSIC, TECH_MIFARE_ULTRALIGHT,
    TECH_NDEF, TECH_NDEF_FORMATABLE, TECH_NFC_A, TECH_NFC_B, TECH_NFC_BARCODE, TECH_NFC_F,
    TECH_NFC_V,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Technology a tag advertises in its capability list.
///
/// Only [`Ndef`](Self::Ndef) and [`NdefFormatable`](Self::NdefFormatable) grant
/// an [`AccessMode`]. The low-level transport technologies are recognized so
/// they are not mistaken for unknown names, but they carry no access mode of
/// their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TagTechnology {
    /// NDEF record exchange.
    Ndef,

    /// NDEF-formatable, not yet initialized.
    NdefFormatable,

    /// ISO 14443-3A.
    NfcA,

    /// ISO 14443-3B.
    NfcB,

    /// JIS 6319-4 (FeliCa).
    NfcF,

    /// ISO 15693.
    NfcV,

    /// ISO 14443-4.
    IsoDep,

    MifareClassic,

    MifareUltralight,

    NfcBarcode,

    /// Name not in the known set, kept verbatim.
    Unrecognized(String),
}

impl TagTechnology {
    /// Classify a capability string.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagscan_core::TagTechnology;
    ///
    /// assert_eq!(TagTechnology::from_name("android.nfc.tech.Ndef"), TagTechnology::Ndef);
    /// assert_eq!(TagTechnology::from_name("formatable"), TagTechnology::NdefFormatable);
    /// assert!(!TagTechnology::from_name("android.nfc.tech.Felica2").is_known());
    /// ```
    pub fn from_name(name: &str) -> Self {
        if NDEF_NAMES.contains(&name) {
            return Self::Ndef;
        }
        if NDEF_FORMATABLE_NAMES.contains(&name) {
            return Self::NdefFormatable;
        }

        match name {
            TECH_NFC_A => Self::NfcA,
            TECH_NFC_B => Self::NfcB,
            TECH_NFC_F => Self::NfcF,
            TECH_NFC_V => Self::NfcV,
            TECH_ISO_DEP => Self::IsoDep,
            TECH_MIFARE_CLASSIC => Self::MifareClassic,
            TECH_MIFARE_ULTRALIGHT => Self::MifareUltralight,
            TECH_NFC_BARCODE => Self::NfcBarcode,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Canonical platform name of the technology.
    pub fn name(&self) -> &str {
        match self {
            Self::Ndef => TECH_NDEF,
            Self::NdefFormatable => TECH_NDEF_FORMATABLE,
            Self::NfcA => TECH_NFC_A,
            Self::NfcB => TECH_NFC_B,
            Self::NfcF => TECH_NFC_F,
            Self::NfcV => TECH_NFC_V,
            Self::IsoDep => TECH_ISO_DEP,
            Self::MifareClassic => TECH_MIFARE_CLASSIC,
            Self::MifareUltralight => TECH_MIFARE_ULTRALIGHT,
            Self::NfcBarcode => TECH_NFC_BARCODE,
            Self::Unrecognized(name) => name.as_str(),
        }
    }

    /// Access mode granted by this technology, if any.
    pub fn access_mode(&self) -> Option<AccessMode> {
        match self {
            Self::Ndef => Some(AccessMode::Readable),
            Self::NdefFormatable => Some(AccessMode::Formatable),
            _ => None,
        }
    }

    /// Check if this is a known technology.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for TagTechnology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Negotiated access technology for a discovered tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Standard NDEF record exchange.
    Readable,

    /// Pre-format access only.
    Formatable,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Readable => write!(f, "Readable"),
            Self::Formatable => write!(f, "Formatable"),
        }
    }
}

/// Canonical tag identifier: uppercase hex, two characters per serial byte.
///
/// Only the [`codec`](crate::codec) creates these, so the contents are always
/// a non-empty, even-length string over `0-9A-F`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TagId(String);

impl TagId {
    pub(crate) fn from_hex(hex: String) -> Self {
        debug_assert!(!hex.is_empty() && hex.len() % 2 == 0);
        debug_assert!(hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F')));
        Self(hex)
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of serial bytes the identifier encodes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.0.len() / 2
    }

    /// Decode the identifier back into the raw serial bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagscan_core::codec;
    ///
    /// let id = codec::encode(Some(&[0x04, 0xA1, 0xFF][..])).unwrap();
    /// assert_eq!(id.to_bytes(), vec![0x04, 0xA1, 0xFF]);
    /// ```
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0
            .as_bytes()
            .chunks_exact(2)
            .map(|pair| (nibble(pair[0]) << 4) | nibble(pair[1]))
            .collect()
    }
}

fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'A'..=b'F' => digit - b'A' + 10,
        _ => unreachable!("TagId holds uppercase hex only"),
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TagId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A tag presented to the reader, as delivered by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDiscovered {
    /// Capability list in the order the tag reported it.
    pub technologies: Vec<String>,

    /// Vendor serial number, if the tag reported one.
    pub id: Option<Vec<u8>>,
}

impl TagDiscovered {
    /// Create a new discovery event.
    pub fn new(technologies: Vec<String>, id: Option<Vec<u8>>) -> Self {
        Self { technologies, id }
    }

    /// Classify every advertised technology.
    pub fn tag_technologies(&self) -> Vec<TagTechnology> {
        self.technologies
            .iter()
            .map(|name| TagTechnology::from_name(name))
            .collect()
    }
}

/// Successful outcome of one discovery event.
///
/// Serializes to the payload hosts receive on a tag read:
/// `{"accessMode":"readable","tagId":"04A1FF"}`, with `tagId` set to `null`
/// when the tag reported no usable serial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRead {
    /// Access mode the tag was resolved to.
    pub access_mode: AccessMode,

    /// Canonical identifier, `None` when the serial is absent or all zero.
    pub tag_id: Option<TagId>,
}

impl TagRead {
    /// Get the identifier as a string slice, if present.
    pub fn tag_id_str(&self) -> Option<&str> {
        self.tag_id.as_ref().map(TagId::as_str)
    }
}
