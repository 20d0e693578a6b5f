//! Error types for identifier decoding.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when decoding an identifier string.
///
/// Decoding is the only fallible operation on identifiers; construction
/// from a raw integer always succeeds. A failed decode is always surfaced
/// to the caller, never mapped to a sentinel, so "parse failed" stays
/// distinguishable from "parsed the invalid sentinel".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIdError {
    /// The input had no leading tag character to strip.
    #[error("empty identifier string")]
    Empty,

    /// The characters after the tag are not a valid unsigned numeral.
    #[error("invalid numeral {numeral:?} in identifier: {source}")]
    Numeral {
        /// Everything after the tag character, as rejected.
        numeral: String,
        /// The underlying integer parse failure.
        source: ParseIntError,
    },
}
