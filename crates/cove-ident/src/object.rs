//! Object identifiers and the blob partition of the id space.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseIdError;

/// Marks an id as naming a raw shared-memory blob.
///
/// Blob ids carry the blob's arena offset in the low 63 bits; composed
/// object ids never have this bit set.
const BLOB_MARK: u64 = 0x8000_0000_0000_0000;

/// A 64-bit object identifier.
///
/// Names one replica of an object on one instance; a migrated copy gets a
/// new id while keeping its [`Signature`](crate::Signature). The id space
/// is split in two: ids with the high bit set name raw shared-memory
/// blobs addressed by offset, everything else names composed objects
/// assembled from metadata plus blob members.
///
/// Same canonical text form as signatures: `o` plus 16 lowercase hex
/// digits, zero-padded.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(u64);

impl ObjectId {
    /// The reserved "no object" value (all bits set).
    pub const INVALID: Self = Self(u64::MAX);

    /// The blob id at offset zero, used for zero-sized blobs.
    pub const EMPTY_BLOB: Self = Self(BLOB_MARK);

    /// Wrap a raw 64-bit value.
    ///
    /// Total: any bit pattern is accepted, including the sentinel.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The id of the blob at `offset` within the shared-memory arena.
    pub const fn blob(offset: u64) -> Self {
        Self(BLOB_MARK | offset)
    }

    /// The raw 64-bit value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether this id names a raw blob rather than a composed object.
    pub const fn is_blob(self) -> bool {
        self.0 & BLOB_MARK != 0
    }

    /// Whether this is an actual id rather than the reserved sentinel.
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

    /// Mint a fresh id for a composed object.
    ///
    /// The blob mark is always cleared, so minted ids never collide with
    /// the blob partition (and never hit the sentinel).
    pub fn random() -> Self {
        Self(rand::random::<u64>() & !BLOB_MARK)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId(o{:016x})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "o{:016x}", self.0)
    }
}

impl FromStr for ObjectId {
    type Err = ParseIdError;

    /// Decode the canonical text form.
    ///
    /// As with signatures, the leading tag character is stripped without
    /// being inspected and the remainder is parsed as an unsigned 64-bit
    /// hex numeral.
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
