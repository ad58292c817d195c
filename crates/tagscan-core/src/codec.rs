//! Tag identifier encoding.
//!
//! The serial number a tag reports is rendered as uppercase hex, two characters
//! per byte, in the original byte order. A serial that is missing, empty or made
//! of zero bytes only is treated as absent and encodes to `None`: some tags
//! report a zeroed serial instead of none at all.
//!
//! ```
//! use tagscan_core::codec;
//!
//! assert_eq!(codec::encode(Some(&[0x04, 0xA1, 0xFF][..])).unwrap().as_str(), "04A1FF");
//! assert_eq!(codec::encode(Some(&[0x00, 0x00][..])), None);
//! assert_eq!(codec::encode(None), None);
//! ```

use crate::TagId;

/// Encode a raw tag serial into its canonical identifier.
///
/// Never fails; an effectively absent serial yields `None`.
pub fn encode(raw: Option<&[u8]>) -> Option<TagId> {
    let bytes = raw?;
    if is_effectively_absent(bytes) {
        return None;
    }

    let hex = bytes.iter().map(|b| format!("{:02X}", b)).collect();

    Some(TagId::from_hex(hex))
}

/// Check whether a serial carries no identifying information.
///
/// True for an empty slice or one where every byte is zero. The whole slice is
/// scanned: a single non-zero byte anywhere makes the serial present.
pub fn is_effectively_absent(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[0x04, 0xA1, 0xFF], "04A1FF")]
    #[case(&[0x01], "01")]
    #[case(&[0x00, 0x01], "0001")]
    #[case(&[0x10, 0x00], "1000")]
    #[case(&[0xAB, 0xCD, 0xEF, 0x12, 0x34, 0x56, 0x78], "ABCDEF12345678")]
    fn test_encode_present(#[case] raw: &[u8], #[case] expected: &str) {
        let id = encode(Some(raw)).unwrap();
        assert_eq!(id.as_str(), expected);
        assert_eq!(id.byte_len(), raw.len());
    }

    #[rstest]
    #[case(&[])]
    #[case(&[0x00])]
    #[case(&[0x00, 0x00])]
    #[case(&[0x00; 10])]
    fn test_encode_absent(#[case] raw: &[u8]) {
        assert_eq!(encode(Some(raw)), None);
        assert!(is_effectively_absent(raw));
    }

    #[test]
    fn test_encode_none() {
        assert_eq!(encode(None), None);
    }

    #[test]
    fn test_absence_scans_whole_sequence() {
        let mut raw = vec![0x00; 16];
        raw[15] = 0x01;
        assert!(!is_effectively_absent(&raw));
        assert_eq!(
            encode(Some(raw.as_slice())).unwrap().as_str(),
            "00000000000000000000000000000001"
        );
    }
}
