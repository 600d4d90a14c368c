//! Constants derived from the line count of a trigram.
//!
//! Everything in the hexagram space follows from two numbers: a trigram has
//! three lines, and a hexagram stacks two trigrams.

/// Lines per trigram.
pub const TRIGRAM_LINES: usize = 3;

/// Lines per hexagram (two stacked trigrams).
pub const HEXAGRAM_LINES: usize = 2 * TRIGRAM_LINES;

/// Number of distinct trigrams (2^3 = 8).
pub const TRIGRAM_CARDINALITY: usize = 1 << TRIGRAM_LINES;

/// Number of distinct hexagrams (2^6 = 64).
pub const HEXAGRAM_CARDINALITY: usize = 1 << HEXAGRAM_LINES;

/// Number of distinct sixiang (two-line figures, 2^2 = 4).
pub const SIXIANG_CARDINALITY: usize = 4;

/// Bit mask selecting one trigram.
pub const TRIGRAM_MASK: u8 = (TRIGRAM_CARDINALITY - 1) as u8;

/// Bit mask selecting one hexagram.
pub const HEXAGRAM_MASK: u8 = (HEXAGRAM_CARDINALITY - 1) as u8;

/// Bit mask selecting one sixiang.
pub const SIXIANG_MASK: u8 = (SIXIANG_CARDINALITY - 1) as u8;

/// The four root hexagrams, the only values `center` maps into themselves.
///
/// `0` and `63` are fixed points; `21` and `42` swap under `center`.
pub const ROOTS: [u8; SIXIANG_CARDINALITY] = [0b000_000, 0b010_101, 0b101_010, 0b111_111];

/// Upper bound on `center` steps before a root is reached.
///
/// The observed maximum over the whole space is 2; loops that walk the
/// nuclear chain are bounded by this constant rather than trusting
/// convergence.
pub const MAX_CENTER_DEPTH: usize = HEXAGRAM_LINES;

/// Yang line count of a balanced hexagram.
pub const BALANCED_LINE_COUNT: u8 = TRIGRAM_LINES as u8;

/// Unicode codepoint of the Kun trigram glyph (☷, value 0).
///
/// Trigram glyphs run downwards from here: value `t` maps to `U+2637 - t`.
pub const TRIGRAM_GLYPH_BASE: u32 = 0x2637;

/// Unicode codepoint of the first hexagram glyph (䷀, King Wen 1).
pub const HEXAGRAM_GLYPH_BASE: u32 = 0x4DC0;
