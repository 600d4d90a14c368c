//! Yijing - hexagram algebra over six bits
//!
//! The 64 hexagrams of the Yijing (I Ching) are the 64 values of a 6-bit
//! word. Everything in this crate is a pure function over that space or over
//! the 8 trigrams (3-bit values): bit operations, table lookups and fixed
//! orderings. Every table is built at compile time or once on first use.
//!
//! # Bit Convention
//!
//! ```text
//! bit:     5   4   3   2   1   0
//! line:    1   2   3   4   5   6      (line 1 is the bottom)
//!          └─ lower ──┘ └─ upper ──┘
//! ```
//!
//! A set bit is a yang (solid) line. With this layout the binary literal of
//! a hexagram reads the figure from the ground up.
//!
//! | Value | Binary | Glyph | King Wen | Name |
//! |-------|--------|-------|----------|------|
//! | 63 | 111111 | ䷀ | 1 | Qian |
//! | 0 | 000000 | ䷁ | 2 | Kun |
//! | 34 | 100010 | ䷂ | 3 | Zhun |
//! | 56 | 111000 | ䷊ | 11 | Tai |
//! | 21 | 010101 | ䷿ | 64 | Wei Ji |
//!
//! # Nuclear Convergence
//!
//! The nuclear hexagram ([`Hexagram::center`]) keeps lines 2-5. Repeating it
//! reaches one of four roots, 0, 21, 42 and 63, in at most two steps. The
//! depth of that walk gives the mantra classes: 4 cosmic roots, 12 karmic
//! hexagrams one step out and 48 atomic ones.
//!
//! # Example
//!
//! ```
//! use yijing::{Hexagram, Trigram};
//! use yijing::classify::{mantra, symmetry, Mantra, Symmetry};
//! use yijing::codon::{AminoAcid, Codon};
//!
//! let zhun: Hexagram = "100010".parse().unwrap();
//! assert_eq!(zhun.king_wen_number(), 3);
//! assert_eq!(zhun.upper(), Trigram::KAN);
//! assert_eq!(zhun.lower(), Trigram::ZHEN);
//!
//! assert_eq!(zhun.center().king_wen_number(), 23);
//! assert_eq!(zhun.root(), Hexagram::new(0));
//! assert_eq!(mantra(zhun), Mantra::Atomic);
//! assert_eq!(symmetry(zhun), Symmetry::Gigante);
//!
//! assert_eq!(Codon::from_hexagram(zhun).to_string(), "GAG");
//! assert_eq!(Codon::from_hexagram(zhun).amino_acid(), AminoAcid::GlutamicAcid);
//! ```
//!
//! # Design Principles
//!
//! - **Total operations**: constructors mask, so bit operations never fail
//! - **Strict edges**: parsers and `try_new` report a [`DomainError`]
//! - **Checked tables**: built-in orderings are verified permutations at compile time
//! - **No I/O**: the crate neither logs nor allocates outside of group and chain results

#![deny(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// Core value types (trigram, hexagram, sixiang, elements, sets, errors)
mod core;

// Precomputed lookup tables for O(1) operations
pub mod lut;

// Symmetry, mantra, balance and relation classification
pub mod classify;

// King Wen, Gray, Eight Palaces and bagua orderings
pub mod sequence;

// Hexagram <-> codon bijection and the standard genetic code
pub mod codon;

// Re-export submodules for external access
pub use core::constants;
pub use core::error;
pub use core::hexagram;
pub use core::set;
pub use core::sixiang;
pub use core::trigram;
pub use core::wuxing;

// Re-export core types at crate root
pub use core::constants::{HEXAGRAM_CARDINALITY, ROOTS, TRIGRAM_CARDINALITY};
pub use core::error::{DomainError, Result};
pub use core::hexagram::{Hexagram, Orbit};
pub use core::set::{HexagramSet, HexagramSetIter};
pub use core::sixiang::Sixiang;
pub use core::trigram::Trigram;
pub use core::wuxing::{Element, Transition};

pub use classify::{Balance, Class, GroupKind, Mantra, Partition, Relation, Symmetry};
pub use codon::{AminoAcid, Base, Codon};
pub use sequence::{Sequence, SequenceKind};

/// Prelude module for convenient imports.
///
/// ```
/// use yijing::prelude::*;
///
/// assert_eq!(symmetry(Hexagram::new(21)), Symmetry::Breath);
/// ```
pub mod prelude {
    // Value types
    pub use crate::core::error::DomainError;
    pub use crate::core::hexagram::{Hexagram, Orbit};
    pub use crate::core::set::HexagramSet;
    pub use crate::core::sixiang::Sixiang;
    pub use crate::core::trigram::Trigram;
    pub use crate::core::wuxing::{Element, Transition};

    // Classification
    pub use crate::classify::{
        balance_class, is_balanced, is_foundation, mantra, relation, symmetry, Balance, Class,
        GroupKind, Mantra, Partition, Relation, Symmetry,
    };

    // Sequences and codons
    pub use crate::codon::{AminoAcid, Base, Codon};
    pub use crate::sequence::{Sequence, SequenceKind};
}
