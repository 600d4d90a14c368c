//! Classification of hexagrams into named classes.
//!
//! Every classifier here is a pure function of one hexagram, built from the
//! structural operations of [`Hexagram`]. Each one partitions the 64
//! hexagrams: every value lands in exactly one class.
//!
//! # Symmetry Classes
//!
//! Checked in order; the first matching predicate wins.
//!
//! | Class | Predicate | Count |
//! |-------|-----------|-------|
//! | breath    | `center(h) == invert(h)` | 2 |
//! | mother    | balanced, `upper(h) == lower(invert(h))` | 6 |
//! | direction | balanced | 12 |
//! | beginning | `upper == lower`, upper ∈ {☷, ☰} | 2 |
//! | principle | `upper == lower` | 6 |
//! | titan     | one or five yang lines | 12 |
//! | gigante   | anything else | 24 |
//!
//! # Mantra Depth
//!
//! | Class | Meaning | Count |
//! |-------|---------|-------|
//! | cosmic | a root | 4 |
//! | karmic | one `center` step from a root | 12 |
//! | atomic | two steps | 48 |

pub mod groups;

pub use groups::{
    amino_acid_groups, balance_groups, mantra_groups, symmetry_groups, transition_groups,
    AminoAcidGroups, BalanceGroups, GroupKind, MantraGroups, Partition, SymmetryGroups,
    TransitionGroups,
};

use crate::codon::AminoAcid;
use crate::core::constants::BALANCED_LINE_COUNT;
use crate::core::error::DomainError;
use crate::core::hexagram::Hexagram;
use crate::core::trigram::Trigram;
use crate::core::wuxing::Transition;
use core::fmt;
use core::str::FromStr;

/// A classification with a fixed, finite set of classes.
///
/// Implementors are total: `classify` returns a member of `ALL` for every
/// hexagram.
pub trait Class: Copy + Eq + fmt::Debug + 'static {
    /// Every class, in display order.
    const ALL: &'static [Self];

    /// The class of a hexagram.
    fn classify(h: Hexagram) -> Self;

    /// Lowercase label.
    fn label(self) -> &'static str;
}

// ============================================================================
// Balance
// ============================================================================

/// Three yang lines against three yin lines, or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Balance {
    /// Exactly three yang lines (20 hexagrams).
    Balanced,
    /// Any other count (44 hexagrams).
    Unbalanced,
}

/// True for exactly three yang lines.
#[inline]
#[must_use]
pub const fn is_balanced(h: Hexagram) -> bool {
    h.line_count() == BALANCED_LINE_COUNT
}

/// Balance class of a hexagram.
#[must_use]
pub const fn balance_class(h: Hexagram) -> Balance {
    if is_balanced(h) {
        Balance::Balanced
    } else {
        Balance::Unbalanced
    }
}

/// Upper and lower trigram are the same (the eight doubled trigrams).
#[inline]
#[must_use]
pub const fn is_foundation(h: Hexagram) -> bool {
    h.upper().value() == h.lower().value()
}

impl Class for Balance {
    const ALL: &'static [Self] = &[Self::Balanced, Self::Unbalanced];

    fn classify(h: Hexagram) -> Self {
        balance_class(h)
    }

    fn label(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Unbalanced => "unbalanced",
        }
    }
}

// ============================================================================
// Symmetry
// ============================================================================

/// The seven symmetry classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Symmetry {
    /// The nuclear hexagram is the inverse.
    Breath,
    /// Balanced, upper trigram is the inverse of the lower.
    Mother,
    /// Remaining balanced hexagrams.
    Direction,
    /// Pure yin or pure yang.
    Beginning,
    /// Remaining doubled trigrams.
    Principle,
    /// One or five yang lines.
    Titan,
    /// Everything else.
    Gigante,
}

/// Symmetry class of a hexagram.
///
/// ```
/// use yijing::classify::{symmetry, Symmetry};
/// use yijing::Hexagram;
///
/// assert_eq!(symmetry(Hexagram::new(21)), Symmetry::Breath);
/// assert_eq!(symmetry(Hexagram::new(0b000_111)), Symmetry::Mother);
/// assert_eq!(symmetry(Hexagram::new(63)), Symmetry::Beginning);
/// assert_eq!(symmetry(Hexagram::new(0b000_001)), Symmetry::Titan);
/// ```
#[must_use]
pub const fn symmetry(h: Hexagram) -> Symmetry {
    if h.center().value() == h.invert().value() {
        return Symmetry::Breath;
    }
    if is_balanced(h) {
        if h.upper().value() == h.invert().lower().value() {
            return Symmetry::Mother;
        }
        return Symmetry::Direction;
    }
    if is_foundation(h) {
        return match h.upper() {
            Trigram::KUN | Trigram::QIAN => Symmetry::Beginning,
            _ => Symmetry::Principle,
        };
    }
    match h.line_count() {
        1 | 5 => Symmetry::Titan,
        _ => Symmetry::Gigante,
    }
}

impl Symmetry {
    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Breath => "breath",
            Self::Mother => "mother",
            Self::Direction => "direction",
            Self::Beginning => "beginning",
            Self::Principle => "principle",
            Self::Titan => "titan",
            Self::Gigante => "gigante",
        }
    }

    /// Balanced classes come first.
    #[must_use]
    pub const fn is_balanced(self) -> bool {
        matches!(self, Self::Breath | Self::Mother | Self::Direction)
    }
}

impl Class for Symmetry {
    const ALL: &'static [Self] = &[
        Self::Breath,
        Self::Mother,
        Self::Direction,
        Self::Beginning,
        Self::Principle,
        Self::Titan,
        Self::Gigante,
    ];

    fn classify(h: Hexagram) -> Self {
        symmetry(h)
    }

    fn label(self) -> &'static str {
        self.name()
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Mantra
// ============================================================================

/// Depth in the nuclear convergence tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mantra {
    /// A root.
    Cosmic,
    /// One step from a root.
    Karmic,
    /// Two steps from a root.
    Atomic,
}

/// Mantra class of a hexagram.
#[must_use]
pub const fn mantra(h: Hexagram) -> Mantra {
    if h.is_root() {
        Mantra::Cosmic
    } else if h.center().is_root() {
        Mantra::Karmic
    } else {
        Mantra::Atomic
    }
}

impl Mantra {
    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cosmic => "cosmic",
            Self::Karmic => "karmic",
            Self::Atomic => "atomic",
        }
    }
}

impl Class for Mantra {
    const ALL: &'static [Self] = &[Self::Cosmic, Self::Karmic, Self::Atomic];

    fn classify(h: Hexagram) -> Self {
        mantra(h)
    }

    fn label(self) -> &'static str {
        self.name()
    }
}

impl fmt::Display for Mantra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Element transition and amino acid, as classes
// ============================================================================

impl Class for Transition {
    const ALL: &'static [Self] = &Transition::ALL;

    fn classify(h: Hexagram) -> Self {
        h.transition()
    }

    fn label(self) -> &'static str {
        self.name()
    }
}

impl Class for AminoAcid {
    const ALL: &'static [Self] = &AminoAcid::ALL;

    fn classify(h: Hexagram) -> Self {
        AminoAcid::of(h)
    }

    fn label(self) -> &'static str {
        self.name()
    }
}

// ============================================================================
// Relation
// ============================================================================

/// The single transform that carries one hexagram to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Relation {
    /// `b` is the nuclear hexagram of `a`.
    Center,
    /// `b` swaps the trigrams of `a`.
    Opposite,
    /// `b` mirrors `a`, whose trigrams are equal.
    SymmetricReverse,
    /// `b` mirrors `a`.
    Mirror,
    /// `b` inverts `a`, whose trigrams are equal.
    SymmetricInvert,
    /// `b` inverts `a`.
    Invert,
    /// No single transform connects them.
    Unrelated,
}

/// How `b` is reached from `a`, first match wins: center, opposite,
/// reverse, invert.
///
/// ```
/// use yijing::classify::{relation, Relation};
/// use yijing::Hexagram;
///
/// assert_eq!(relation(Hexagram::new(1), Hexagram::new(8)), Relation::Opposite);
/// assert_eq!(relation(Hexagram::new(9), Hexagram::new(54)), Relation::SymmetricInvert);
/// assert_eq!(relation(Hexagram::new(9), Hexagram::new(10)).code(), '?');
/// ```
#[must_use]
pub const fn relation(a: Hexagram, b: Hexagram) -> Relation {
    let b = b.value();
    if a.center().value() == b {
        Relation::Center
    } else if a.opposite().value() == b {
        Relation::Opposite
    } else if a.reverse().value() == b {
        if is_foundation(a) {
            Relation::SymmetricReverse
        } else {
            Relation::Mirror
        }
    } else if a.invert().value() == b {
        if is_foundation(a) {
            Relation::SymmetricInvert
        } else {
            Relation::Invert
        }
    } else {
        Relation::Unrelated
    }
}

impl Relation {
    /// Every relation, in priority order.
    pub const ALL: [Self; 7] = [
        Self::Center,
        Self::Opposite,
        Self::SymmetricReverse,
        Self::Mirror,
        Self::SymmetricInvert,
        Self::Invert,
        Self::Unrelated,
    ];

    /// One-letter tag: `C O S M A I ?`.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Center => 'C',
            Self::Opposite => 'O',
            Self::SymmetricReverse => 'S',
            Self::Mirror => 'M',
            Self::SymmetricInvert => 'A',
            Self::Invert => 'I',
            Self::Unrelated => '?',
        }
    }

    /// Badge glyph shown next to a related hexagram.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Center => "\u{1f4a0}",
            Self::Opposite => "\u{1f504}",
            Self::SymmetricReverse => "\u{1f533}",
            Self::Mirror => "\u{1fa9e}",
            Self::SymmetricInvert => "\u{2696}\u{fe0f}",
            Self::Invert => "\u{1f317}",
            Self::Unrelated => "\u{2753}",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Looks up a class by its label, ignoring ASCII case.
///
/// # Errors
///
/// Returns [`DomainError::UnknownGroup`] when no class of `C` has that label.
pub fn class_from_label<C: Class>(label: &str) -> Result<C, DomainError> {
    C::ALL
        .iter()
        .copied()
        .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
        .ok_or_else(|| DomainError::UnknownGroup(label.to_string()))
}

impl FromStr for Symmetry {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        class_from_label(s)
    }
}

impl FromStr for Mantra {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        class_from_label(s)
    }
}
