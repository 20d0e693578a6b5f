//! Instance identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseIdError;

/// Identifies one store instance (daemon) within the cluster.
///
/// Ordinals are handed out by the metadata service when a daemon joins,
/// so they stay small; the text form is `i` plus the decimal ordinal
/// (`"i0"`, `"i42"`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(u64);

impl InstanceId {
    /// "No preferred instance" / not yet assigned (all bits set).
    pub const UNSPECIFIED: Self = Self(u64::MAX);

    /// Wrap a raw 64-bit ordinal.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw 64-bit ordinal.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether a concrete instance has been assigned.
    pub const fn is_specified(self) -> bool {
        self.0 != u64::MAX
    }

    /// Lift into an `Option`, mapping the sentinel to `None`.
    pub const fn specified(self) -> Option<Self> {
        if self.is_specified() {
            Some(self)
        } else {
            None
        }
    }
}

impl fmt::Debug for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstanceId(i{})", self.0)
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{}", self.0)
    }
}

impl FromStr for InstanceId {
    type Err = ParseIdError;

    /// Decode the `i` + decimal form.
    ///
    /// The leading tag character is stripped without being inspected,
    /// matching the hex id decoders; the remainder must be an unsigned
    /// decimal numeral.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if chars.next().is_none() {
            return Err(ParseIdError::Empty);
        }
        let numeral = chars.as_str();
        let id = numeral.parse::<u64>().map_err(|source| ParseIdError::Numeral {
            numeral: numeral.to_owned(),
            source,
        })?;
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_encodings() {
        assert_eq!(InstanceId::new(0).to_string(), "i0");
        assert_eq!(InstanceId::new(42).to_string(), "i42");
        assert_eq!("i42".parse::<InstanceId>().unwrap().get(), 42);
    }

    #[test]
    fn test_unspecified_sentinel() {
        assert_eq!(InstanceId::UNSPECIFIED.get(), u64::MAX);
        assert!(!InstanceId::UNSPECIFIED.is_specified());
        assert_eq!(InstanceId::UNSPECIFIED.specified(), None);
        assert_eq!(InstanceId::new(3).specified(), Some(InstanceId::new(3)));
    }

    #[test]
    fn test_roundtrip() {
        for id in [0, 1, 42, u64::MAX] {
            let instance = InstanceId::new(id);
            assert_eq!(instance.to_string().parse::<InstanceId>().unwrap(), instance);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!("".parse::<InstanceId>(), Err(ParseIdError::Empty));
        assert!(matches!(
            "i".parse::<InstanceId>(),
            Err(ParseIdError::Numeral { .. })
        ));
        assert!(matches!(
            "iabc".parse::<InstanceId>(),
            Err(ParseIdError::Numeral { .. })
        ));
    }

    #[test]
    fn test_debug_form() {
        assert_eq!(format!("{:?}", InstanceId::new(3)), "InstanceId(i3)");
    }
}
