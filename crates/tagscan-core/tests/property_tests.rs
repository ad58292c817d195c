//! Property-based tests for technology resolution and identifier encoding.
//!
//! These tests use proptest to generate random capability lists and serials
//! and verify that the resolution and encoding invariants hold for all of them.

use proptest::prelude::*;
use tagscan_core::constants::{NDEF_FORMATABLE_NAMES, NDEF_NAMES};
use tagscan_core::{AccessMode, Error, codec, resolver};

/// Strategy for technology names that grant no access mode.
fn other_technology() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("android.nfc.tech.NfcA".to_string()),
        Just("android.nfc.tech.NfcB".to_string()),
        Just("android.nfc.tech.IsoDep".to_string()),
        Just("android.nfc.tech.MifareClassic".to_string()),
        prop::string::string_regex("vendor\\.tech\\.[A-Za-z]{1,12}")
            .expect("Failed to create technology regex strategy"),
    ]
}

fn ndef_name() -> impl Strategy<Value = String> {
    prop::sample::select(NDEF_NAMES).prop_map(str::to_string)
}

fn formatable_name() -> impl Strategy<Value = String> {
    prop::sample::select(NDEF_FORMATABLE_NAMES).prop_map(str::to_string)
}

/// Strategy for serials with at least one non-zero byte.
fn present_serial() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=16)
        .prop_filter("serial must contain a non-zero byte", |bytes| {
            bytes.iter().any(|&b| b != 0)
        })
}

proptest! {
    /// Property: record-exchange anywhere in the list always resolves Readable,
    /// whether or not formatable is also present.
    #[test]
    fn prop_ndef_resolves_readable(
        mut technologies in prop::collection::vec(other_technology(), 0..6),
        ndef in ndef_name(),
        formatable in prop::option::of(formatable_name()),
        position in any::<prop::sample::Index>(),
    ) {
        if let Some(formatable) = formatable {
            technologies.push(formatable);
        }
        let at = position.index(technologies.len() + 1);
        technologies.insert(at, ndef);

        prop_assert_eq!(resolver::resolve(&technologies), Ok(AccessMode::Readable));
    }

    /// Property: formatable without record-exchange resolves Formatable.
    #[test]
    fn prop_formatable_only_resolves_formatable(
        mut technologies in prop::collection::vec(other_technology(), 0..6),
        formatable in formatable_name(),
    ) {
        technologies.push(formatable);
        prop_assert_eq!(resolver::resolve(&technologies), Ok(AccessMode::Formatable));
    }

    /// Property: neither NDEF technology means the tag is rejected.
    #[test]
    fn prop_no_ndef_is_unsupported(
        technologies in prop::collection::vec(other_technology(), 0..8),
    ) {
        prop_assert_eq!(resolver::resolve(&technologies), Err(Error::UnsupportedTagFormat));
    }

    /// Property: zeroed serials of any length encode to no identifier.
    #[test]
    fn prop_zero_serial_is_absent(len in 1usize..=32) {
        let raw = vec![0u8; len];
        prop_assert_eq!(codec::encode(Some(raw.as_slice())), None);
    }

    /// Property: a serial with a non-zero byte encodes to 2 uppercase hex
    /// characters per byte and decodes back to the same bytes.
    #[test]
    fn prop_present_serial_encodes_hex(raw in present_serial()) {
        let id = codec::encode(Some(raw.as_slice())).expect("serial should be present");

        prop_assert_eq!(id.as_str().len(), raw.len() * 2);
        prop_assert!(id.as_str().chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')));
        prop_assert_eq!(id.to_bytes(), raw);
    }
}
