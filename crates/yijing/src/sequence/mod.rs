//! Orderings of the 64 hexagrams.
//!
//! A [`Sequence`] is a permutation of `0..64` stored as a forward table
//! (position → hexagram) together with its inverse (hexagram → position).
//! The traditional orderings are built at compile time; a table that is not
//! a permutation fails the build. Tables supplied at runtime go through
//! [`Sequence::new`], which checks the same property and reports a
//! [`DomainError`] instead.
//!
//! | Kind | Slug | Source |
//! |------|------|--------|
//! | Binary | `binary` | value order |
//! | Gray | `gray` | reflected Gray code |
//! | King Wen | `kingwen` | received text |
//! | Eight Palaces | `palaces` | Jing Fang |
//! | King Wen bagua | `bagua` | trigram product |
//! | Early Heaven | `early` | trigram product |
//! | Later Heaven | `later` | trigram product |

pub mod bagua;
pub mod gray;
pub mod king_wen;

use crate::core::constants::{HEXAGRAM_CARDINALITY, HEXAGRAM_MASK};
use crate::core::error::DomainError;
use crate::core::hexagram::Hexagram;
use core::fmt;
use core::str::FromStr;

/// A bijection between positions `0..64` and hexagrams.
///
/// # Example
///
/// ```
/// use yijing::sequence::{Sequence, KING_WEN};
/// use yijing::Hexagram;
///
/// assert_eq!(KING_WEN.hexagram_at(2), Some(Hexagram::new(0b100_010)));
/// assert_eq!(KING_WEN.position_of(Hexagram::new(0b100_010)), 2);
///
/// let reversed: Vec<u8> = (0..64).rev().collect();
/// let seq = Sequence::new(&reversed).unwrap();
/// assert_eq!(seq.position_of(Hexagram::new(63)), 0);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Sequence {
    forward: [u8; HEXAGRAM_CARDINALITY],
    inverse: [u8; HEXAGRAM_CARDINALITY],
}

/// Builds the inverse permutation of `table`.
///
/// # Errors
///
/// - [`DomainError::InvalidSequenceLength`] when `table` does not have 64 entries
/// - [`DomainError::OutOfRange`] when an entry exceeds 63
/// - [`DomainError::DuplicateEntry`] when an entry appears twice
pub fn invert_sequence(table: &[u8]) -> Result<[u8; HEXAGRAM_CARDINALITY], DomainError> {
    if table.len() != HEXAGRAM_CARDINALITY {
        return Err(DomainError::InvalidSequenceLength {
            expected: HEXAGRAM_CARDINALITY,
            actual: table.len(),
        });
    }
    let mut inverse = [0u8; HEXAGRAM_CARDINALITY];
    let mut seen = 0u64;
    for (position, &value) in table.iter().enumerate() {
        let h = Hexagram::try_new(u64::from(value))?;
        if seen & (1 << h.value()) != 0 {
            return Err(DomainError::DuplicateEntry { value });
        }
        seen |= 1 << h.value();
        inverse[h.value() as usize] = position as u8;
    }
    Ok(inverse)
}

/// Compile-time permutation check used by the built-in tables.
const fn is_permutation(table: &[u8; HEXAGRAM_CARDINALITY]) -> bool {
    let mut seen = 0u64;
    let mut i = 0;
    while i < HEXAGRAM_CARDINALITY {
        if table[i] > HEXAGRAM_MASK {
            return false;
        }
        seen |= 1 << table[i];
        i += 1;
    }
    seen == u64::MAX
}

impl Sequence {
    /// Builds a sequence from a position → hexagram table.
    ///
    /// # Errors
    ///
    /// Same as [`invert_sequence`].
    pub fn new(table: &[u8]) -> Result<Self, DomainError> {
        let inverse = invert_sequence(table)?;
        let mut forward = [0u8; HEXAGRAM_CARDINALITY];
        forward.copy_from_slice(table);
        Ok(Self { forward, inverse })
    }

    /// Builds a sequence from a table known at compile time.
    ///
    /// Only called in `static` initializers, so a bad table is a build error.
    pub(crate) const fn from_permutation(forward: [u8; HEXAGRAM_CARDINALITY]) -> Self {
        assert!(is_permutation(&forward), "table is not a permutation of 0..64");
        let mut inverse = [0u8; HEXAGRAM_CARDINALITY];
        let mut i = 0;
        while i < HEXAGRAM_CARDINALITY {
            inverse[forward[i] as usize] = i as u8;
            i += 1;
        }
        Self { forward, inverse }
    }

    /// Hexagram at a 0-based position, `None` past the end.
    #[inline]
    #[must_use]
    pub fn hexagram_at(&self, position: usize) -> Option<Hexagram> {
        self.forward.get(position).map(|&v| Hexagram::new(v))
    }

    /// 0-based position of a hexagram. Total, since the table is a bijection.
    #[inline]
    #[must_use]
    pub const fn position_of(&self, h: Hexagram) -> usize {
        self.inverse[h.value() as usize] as usize
    }

    /// Position → hexagram table.
    #[inline]
    #[must_use]
    pub const fn forward(&self) -> &[u8; HEXAGRAM_CARDINALITY] {
        &self.forward
    }

    /// Hexagram → position table.
    #[inline]
    #[must_use]
    pub const fn inverse(&self) -> &[u8; HEXAGRAM_CARDINALITY] {
        &self.inverse
    }

    /// Hexagrams in sequence order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Hexagram> + '_ {
        self.forward.iter().map(|&v| Hexagram::new(v))
    }

    /// Always 64.
    #[inline]
    pub const fn len(&self) -> usize {
        HEXAGRAM_CARDINALITY
    }

    /// Always false.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.forward.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Sequence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.forward.iter())
    }
}

// ============================================================================
// Built-in orderings
// ============================================================================

const fn identity() -> [u8; HEXAGRAM_CARDINALITY] {
    let mut table = [0u8; HEXAGRAM_CARDINALITY];
    let mut i = 0;
    while i < HEXAGRAM_CARDINALITY {
        table[i] = i as u8;
        i += 1;
    }
    table
}

/// Value order 0..63.
pub static BINARY: Sequence = Sequence::from_permutation(identity());

/// Reflected Gray code: neighbouring positions differ by one line.
pub static GRAY: Sequence = Sequence::from_permutation(gray::table());

/// The received King Wen order.
pub static KING_WEN: Sequence = Sequence::from_permutation(king_wen::FORWARD);

/// Jing Fang's Eight Palaces, eight blocks headed by the doubled trigrams.
pub static EIGHT_PALACES: Sequence = Sequence::from_permutation(king_wen::palace_table());

/// Trigram product over the King Wen bagua order.
pub static KING_WEN_BAGUA: Sequence =
    Sequence::from_permutation(bagua::product(bagua::KING_WEN_ORDER));

/// Trigram product over the Early Heaven (Fu Xi) order.
pub static EARLY_HEAVEN: Sequence =
    Sequence::from_permutation(bagua::product(bagua::EARLY_HEAVEN_ORDER));

/// Trigram product over the Later Heaven (King Wen) arrangement.
pub static LATER_HEAVEN: Sequence =
    Sequence::from_permutation(bagua::product(bagua::LATER_HEAVEN_ORDER));

/// Names the built-in orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SequenceKind {
    /// Value order.
    Binary,
    /// Gray code order.
    Gray,
    /// King Wen order.
    KingWen,
    /// Eight Palaces order.
    EightPalaces,
    /// Product of the King Wen bagua order.
    KingWenBagua,
    /// Product of the Early Heaven order.
    EarlyHeaven,
    /// Product of the Later Heaven order.
    LaterHeaven,
}

impl SequenceKind {
    /// Every kind.
    pub const ALL: [Self; 7] = [
        Self::Binary,
        Self::Gray,
        Self::KingWen,
        Self::EightPalaces,
        Self::KingWenBagua,
        Self::EarlyHeaven,
        Self::LaterHeaven,
    ];

    /// Short command-line name.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Gray => "gray",
            Self::KingWen => "kingwen",
            Self::EightPalaces => "palaces",
            Self::KingWenBagua => "bagua",
            Self::EarlyHeaven => "early",
            Self::LaterHeaven => "later",
        }
    }

    /// Human-readable title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Binary => "Binary",
            Self::Gray => "Gray Code",
            Self::KingWen => "King Wen",
            Self::EightPalaces => "Eight Palaces",
            Self::KingWenBagua => "King Wen Bagua",
            Self::EarlyHeaven => "Early Heaven",
            Self::LaterHeaven => "Later Heaven",
        }
    }

    /// The built sequence.
    #[must_use]
    pub fn sequence(self) -> &'static Sequence {
        match self {
            Self::Binary => &BINARY,
            Self::Gray => &GRAY,
            Self::KingWen => &KING_WEN,
            Self::EightPalaces => &EIGHT_PALACES,
            Self::KingWenBagua => &KING_WEN_BAGUA,
            Self::EarlyHeaven => &EARLY_HEAVEN,
            Self::LaterHeaven => &LATER_HEAVEN,
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for SequenceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownSequence(s.to_string()))
    }
}
