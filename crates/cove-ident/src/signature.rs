//! Signature: the content identity of a stored object.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseIdError;

/// A 64-bit content signature.
///
/// Signatures name the *content* of an object rather than a particular
/// replica of it: when an object migrates between instances it receives a
/// fresh [`ObjectId`](crate::ObjectId) but keeps its signature. The value
/// itself is opaque to this crate; the metadata service mints it and this
/// type only carries it.
///
/// The canonical text form is `o` followed by exactly 16 lowercase hex
/// digits, zero-padded: `Signature::new(42)` renders as
/// `"o000000000000002a"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature(u64);

impl Signature {
    /// The reserved "no signature" value (all bits set).
    ///
    /// Renders as `"offffffffffffffff"`. Legacy SDKs store this as the
    /// signed value `-1`; the bit pattern is the same.
    pub const INVALID: Self = Self(u64::MAX);

    /// Wrap a raw 64-bit value.
    ///
    /// Total: any bit pattern is accepted, including the sentinel.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw 64-bit value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether this is an actual signature rather than the reserved sentinel.
    pub const fn is_valid(self) -> bool {
        self.0 != u64::MAX
    }

    /// Lift into an `Option`, mapping the sentinel to `None`.
    pub const fn valid(self) -> Option<Self> {
        if self.is_valid() {
            Some(self)
        } else {
            None
        }
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(o{:016x})", self.0)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "o{:016x}", self.0)
    }
}

impl FromStr for Signature {
    type Err = ParseIdError;

    /// Decode the canonical text form.
    ///
    /// The leading tag character is stripped without being inspected;
    /// persisted metadata relies on that, so any single-character prefix
    /// is accepted. The remainder must be an unsigned 64-bit hex numeral
    /// (either case on input; canonical output is lowercase).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if chars.next().is_none() {
            return Err(ParseIdError::Empty);
        }
        let numeral = chars.as_str();
        let id = u64::from_str_radix(numeral, 16).map_err(|source| ParseIdError::Numeral {
            numeral: numeral.to_owned(),
            source,
        })?;
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_known_encoding() {
        assert_eq!(Signature::new(42).to_string(), "o000000000000002a");
        assert_eq!("o000000000000002a".parse::<Signature>().unwrap().get(), 42);
    }

    #[test]
    fn test_zero_encoding() {
        assert_eq!(Signature::new(0).to_string(), "o0000000000000000");
    }

    #[test]
    fn test_invalid_sentinel() {
        assert_eq!(Signature::INVALID.get(), u64::MAX);
        assert_eq!(Signature::INVALID.to_string(), "offffffffffffffff");
        assert!(!Signature::INVALID.is_valid());
        assert_eq!(Signature::INVALID.valid(), None);
    }

    #[test]
    fn test_valid_option_view() {
        let sig = Signature::new(7);
        assert!(sig.is_valid());
        assert_eq!(sig.valid(), Some(sig));
    }

    #[test]
    fn test_equality() {
        assert_eq!(Signature::new(5), Signature::new(5));
        assert_ne!(Signature::new(5), Signature::new(6));
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert_eq!("".parse::<Signature>(), Err(ParseIdError::Empty));
    }

    #[test]
    fn test_parse_rejects_bad_numeral() {
        assert!(matches!(
            "oxyz".parse::<Signature>(),
            Err(ParseIdError::Numeral { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_missing_numeral() {
        // A lone tag leaves an empty numeral behind.
        assert!(matches!(
            "o".parse::<Signature>(),
            Err(ParseIdError::Numeral { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(matches!(
            "o1ffffffffffffffff".parse::<Signature>(),
            Err(ParseIdError::Numeral { .. })
        ));
    }

    #[test]
    fn test_parse_accepts_uppercase_hex() {
        assert_eq!(
            "o00000000DEADBEEF".parse::<Signature>().unwrap().get(),
            0xdead_beef
        );
    }

    #[test]
    fn test_tag_character_is_not_checked() {
        // The first character is stripped unconditionally, so a wrong tag
        // still decodes. Deployed metadata depends on this.
        assert_eq!("x000000000000002a".parse::<Signature>().unwrap().get(), 42);
    }

    #[test]
    fn test_multibyte_tag_does_not_panic() {
        assert_eq!("\u{00e9}2a".parse::<Signature>().unwrap().get(), 0x2a);
        assert!(matches!(
            "\u{00e9}".parse::<Signature>(),
            Err(ParseIdError::Numeral { .. })
        ));
    }

    #[test]
    fn test_roundtrip_extremes() {
        for id in [0, 1, u64::MAX, i64::MAX as u64, i64::MIN as u64] {
            let sig = Signature::new(id);
            assert_eq!(sig.to_string().parse::<Signature>().unwrap(), sig);
        }
    }

    #[test]
    fn test_debug_shows_canonical_form() {
        assert_eq!(
            format!("{:?}", Signature::new(42)),
            "Signature(o000000000000002a)"
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let sig = Signature::new(42);
        let json = serde_json::to_string(&sig).unwrap();
        assert_eq!(json, "42");
        assert_eq!(serde_json::from_str::<Signature>(&json).unwrap(), sig);
    }

    proptest! {
        #[test]
        fn test_roundtrip_all_values(id in any::<u64>()) {
            let sig = Signature::new(id);
            prop_assert_eq!(sig.to_string().parse::<Signature>().unwrap().get(), id);
        }

        #[test]
        fn test_encoding_fixed_width(id in any::<u64>()) {
            let encoded = Signature::new(id).to_string();
            prop_assert_eq!(encoded.len(), 17);
            prop_assert!(encoded.starts_with('o'));
            prop_assert!(encoded[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
        }
    }
}
