//! Tag technology negotiation.
//!
//! A discovered tag lists every technology it speaks. Exactly one access mode
//! is picked from that list:
//!
//! 1. NDEF record exchange present → [`AccessMode::Readable`]
//! 2. otherwise NDEF-formatable present → [`AccessMode::Formatable`]
//! 3. otherwise [`Error::UnsupportedTagFormat`]
//!
//! Readable access wins whenever both are advertised, since it needs no
//! formatting step before the tag can be used.
//!
//! # Examples
//!
//! ```
//! use tagscan_core::{AccessMode, Error, resolver};
//!
//! assert_eq!(resolver::resolve(&["ndef", "formatable"]), Ok(AccessMode::Readable));
//! assert_eq!(resolver::resolve(&["formatable"]), Ok(AccessMode::Formatable));
//! assert_eq!(resolver::resolve::<&str>(&[]), Err(Error::UnsupportedTagFormat));
//! ```

use crate::{AccessMode, Error, Result, TagTechnology};
use tracing::debug;

/// Resolve the access mode for a tag from its capability list.
///
/// # Errors
///
/// Returns [`Error::UnsupportedTagFormat`] if the list advertises neither the
/// record-exchange nor the formatable technology. An empty list is valid input
/// and fails the same way.
pub fn resolve<S: AsRef<str>>(technologies: &[S]) -> Result<AccessMode> {
    let technologies: Vec<TagTechnology> = technologies
        .iter()
        .map(|name| TagTechnology::from_name(name.as_ref()))
        .collect();

    for tech in technologies.iter().filter(|tech| !tech.is_known()) {
        debug!("Ignoring unrecognized tag technology {}", tech);
    }

    resolve_technologies(&technologies)
}

/// Resolve the access mode from already classified technologies.
///
/// # Errors
///
/// Returns [`Error::UnsupportedTagFormat`] if neither NDEF technology is present.
pub fn resolve_technologies(technologies: &[TagTechnology]) -> Result<AccessMode> {
    let mode = if technologies.contains(&TagTechnology::Ndef) {
        AccessMode::Readable
    } else if technologies.contains(&TagTechnology::NdefFormatable) {
        AccessMode::Formatable
    } else {
        debug!(
            "No NDEF technology among {} advertised technologies",
            technologies.len()
        );
        return Err(Error::UnsupportedTagFormat);
    };

    debug!("Resolved tag access mode {}", mode);
    Ok(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{TECH_NDEF, TECH_NDEF_FORMATABLE, TECH_NFC_A};
    use rstest::rstest;

    #[rstest]
    #[case(&["record-exchange"])]
    #[case(&[TECH_NDEF])]
    #[case(&[TECH_NFC_A, TECH_NDEF])]
    #[case(&[TECH_NDEF, TECH_NDEF_FORMATABLE])]
    #[case(&[TECH_NDEF_FORMATABLE, TECH_NDEF])]
    fn test_resolve_readable(#[case] technologies: &[&str]) {
        assert_eq!(resolve(technologies), Ok(AccessMode::Readable));
    }

    #[rstest]
    #[case(&["formatable"])]
    #[case(&[TECH_NDEF_FORMATABLE])]
    #[case(&[TECH_NFC_A, TECH_NDEF_FORMATABLE, "vendor.tech.Unknown"])]
    fn test_resolve_formatable(#[case] technologies: &[&str]) {
        assert_eq!(resolve(technologies), Ok(AccessMode::Formatable));
    }

    #[rstest]
    #[case(&[])]
    #[case(&[TECH_NFC_A])]
    #[case(&["android.nfc.tech.MifareClassic", "android.nfc.tech.NfcA"])]
    #[case(&["vendor.tech.Unknown"])]
    #[case(&["NDEF"])]
    fn test_resolve_unsupported(#[case] technologies: &[&str]) {
        assert_eq!(resolve(technologies), Err(Error::UnsupportedTagFormat));
    }

    #[test]
    fn test_resolve_owned_strings() {
        let technologies = vec![TECH_NDEF_FORMATABLE.to_string()];
        assert_eq!(resolve(&technologies), Ok(AccessMode::Formatable));
    }

    #[test]
    fn test_resolve_technologies() {
        assert_eq!(
            resolve_technologies(&[TagTechnology::NdefFormatable, TagTechnology::Ndef]),
            Ok(AccessMode::Readable)
        );
        assert_eq!(
            resolve_technologies(&[TagTechnology::Unrecognized("x".to_string())]),
            Err(Error::UnsupportedTagFormat)
        );
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let technologies = [TECH_NDEF];
        for _ in 0..3 {
            assert_eq!(resolve(&technologies), Ok(AccessMode::Readable));
        }
    }
}
