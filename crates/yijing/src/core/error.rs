//! The domain error shared by every fallible lookup and parser.

use thiserror::Error;

/// A value or name outside the fixed vocabulary of the hexagram space.
///
/// This is the only error kind in the crate. Bit operations are total
/// (inputs are masked), so it is raised only by strict constructors,
/// name lookups, codon parsing and sequence construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An integer exceeded the range of its kind.
    #[error("{kind} value {value} is out of range 0..={max}")]
    OutOfRange {
        /// What was being constructed (`"trigram"`, `"hexagram"`, ...).
        kind: &'static str,
        /// The rejected value.
        value: u64,
        /// The largest valid value.
        max: u8,
    },

    /// Not a trigram name (pinyin or image).
    #[error("unknown trigram name: {0:?}")]
    UnknownTrigram(String),

    /// Not one of the five element names.
    #[error("unknown element name: {0:?}")]
    UnknownElement(String),

    /// Not one of the four sixiang names.
    #[error("unknown sixiang name: {0:?}")]
    UnknownSixiang(String),

    /// Not one of the named hexagram orderings.
    #[error("unknown sequence name: {0:?}")]
    UnknownSequence(String),

    /// Not one of the classification group names.
    #[error("unknown group name: {0:?}")]
    UnknownGroup(String),

    /// A hexagram string that is neither decimal, `0b` binary nor six lines.
    #[error("cannot parse hexagram from {0:?}")]
    InvalidHexagram(String),

    /// A codon that is not exactly three bases long.
    #[error("codon must be exactly 3 bases, got {0}")]
    InvalidCodonLength(usize),

    /// A character outside `A`, `C`, `G`, `T`, `U`.
    #[error("invalid base {base:?} at position {position}")]
    InvalidBase {
        /// The rejected character.
        base: char,
        /// Zero-based position in the codon.
        position: usize,
    },

    /// A sequence table with the wrong number of entries.
    #[error("sequence must have exactly {expected} entries, got {actual}")]
    InvalidSequenceLength {
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// A sequence table that repeats a value, so it is not a permutation.
    #[error("sequence repeats value {value}")]
    DuplicateEntry {
        /// The first repeated value.
        value: u8,
    },
}

/// Result alias for domain lookups.
pub type Result<T> = core::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = DomainError::OutOfRange {
            kind: "hexagram",
            value: 64,
            max: 63,
        };
        assert_eq!(err.to_string(), "hexagram value 64 is out of range 0..=63");

        let err = DomainError::InvalidBase {
            base: 'X',
            position: 2,
        };
        assert_eq!(err.to_string(), "invalid base 'X' at position 2");

        let err = DomainError::UnknownTrigram("sky".into());
        assert_eq!(err.to_string(), "unknown trigram name: \"sky\"");
    }
}
