//! Hexagram type: six lines, sixty-four values.
//!
//! # Bit Convention
//!
//! Bit 5 is the bottom (first) line and bit 0 the top (sixth) line, so the
//! binary literal reads the figure from the ground up, exactly as it is
//! built when casting:
//!
//! ```text
//! bit:    5   4   3   2   1   0
//! line:   1   2   3   4   5   6
//!         └─ lower ─┘ └─ upper ─┘
//! ```
//!
//! - `upper = h & 7` (bits 0-2, the top three lines)
//! - `lower = (h >> 3) & 7` (bits 3-5, the bottom three lines)
//!
//! Under this convention hexagram 3 of the King Wen sequence, Zhun (water
//! over thunder), is `0b100_010`: lower ☳ = 4, upper ☵ = 2.
//!
//! # Zero-Copy Contract
//!
//! `Hexagram` is a transparent wrapper around `u8`, masked to six bits on
//! construction. All structural operations are O(1), most of them a single
//! table lookup (see [`crate::lut`]).

use super::constants::{
    HEXAGRAM_CARDINALITY, HEXAGRAM_GLYPH_BASE, HEXAGRAM_LINES, HEXAGRAM_MASK, MAX_CENTER_DEPTH,
    TRIGRAM_LINES,
};
use super::error::DomainError;
use super::sixiang::Sixiang;
use super::trigram::Trigram;
use super::wuxing::Transition;
use crate::lut;
use crate::sequence::king_wen;
use core::fmt;
use core::str::FromStr;

/// A hexagram (0-63).
///
/// # Example
///
/// ```
/// use yijing::{Hexagram, Trigram};
///
/// let h = Hexagram::new(0b111_000);
/// assert_eq!(h.lower(), Trigram::QIAN);
/// assert_eq!(h.upper(), Trigram::KUN);
/// assert_eq!(h.king_wen_number(), 11); // Tai, Peace
/// assert_eq!(h.symbol(), '䷊');
/// assert_eq!(h.opposite(), Hexagram::new(0b000_111));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Hexagram(u8);

/// The four single-step images of a hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Orbit {
    /// The hexagram itself.
    pub selected: Hexagram,
    /// All lines flipped.
    pub inverted: Hexagram,
    /// Trigrams swapped.
    pub opposite: Hexagram,
    /// Lines mirrored.
    pub reversed: Hexagram,
    /// Nuclear hexagram.
    pub centered: Hexagram,
}

impl Hexagram {
    /// ䷁ All yin (Kun, King Wen 2).
    pub const EARTH: Self = Self(0);

    /// ䷀ All yang (Qian, King Wen 1).
    pub const HEAVEN: Self = Self(63);

    /// Creates a hexagram from the low six bits of `value`.
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value & HEXAGRAM_MASK)
    }

    /// Creates a hexagram without masking.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutOfRange`] when `value > 63`.
    pub const fn try_new(value: u64) -> Result<Self, DomainError> {
        if value > HEXAGRAM_MASK as u64 {
            return Err(DomainError::OutOfRange {
                kind: "hexagram",
                value,
                max: HEXAGRAM_MASK,
            });
        }
        Ok(Self(value as u8))
    }

    /// Stacks two trigrams: `(lower << 3) | upper`.
    #[inline]
    #[must_use]
    pub const fn from_trigrams(upper: Trigram, lower: Trigram) -> Self {
        Self((lower.value() << TRIGRAM_LINES) | upper.value())
    }

    /// All 64 hexagrams in binary order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator + Clone {
        (0..HEXAGRAM_CARDINALITY as u8).map(Self)
    }

    /// The raw 6-bit value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Lines from bottom to top; `true` is yang.
    #[must_use]
    pub const fn lines(self) -> [bool; HEXAGRAM_LINES] {
        let mut lines = [false; HEXAGRAM_LINES];
        let mut i = 0;
        while i < HEXAGRAM_LINES {
            lines[i] = (self.0 >> (HEXAGRAM_LINES - 1 - i)) & 1 == 1;
            i += 1;
        }
        lines
    }

    // ------------------------------------------------------------------
    // Substructure
    // ------------------------------------------------------------------

    /// Upper trigram (top three lines, bits 0-2).
    #[inline]
    #[must_use]
    pub const fn upper(self) -> Trigram {
        Trigram::new(self.0)
    }

    /// Lower trigram (bottom three lines, bits 3-5).
    #[inline]
    #[must_use]
    pub const fn lower(self) -> Trigram {
        Trigram::new(self.0 >> TRIGRAM_LINES)
    }

    /// Top two lines (bits 0-1).
    #[inline]
    #[must_use]
    pub const fn top_pair(self) -> Sixiang {
        Sixiang::from_bits(self.0)
    }

    /// Middle two lines (bits 2-3).
    #[inline]
    #[must_use]
    pub const fn middle_pair(self) -> Sixiang {
        Sixiang::from_bits(self.0 >> 2)
    }

    /// Bottom two lines (bits 4-5).
    #[inline]
    #[must_use]
    pub const fn bottom_pair(self) -> Sixiang {
        Sixiang::from_bits(self.0 >> 4)
    }

    /// The three sixiang layers, top first.
    #[must_use]
    pub const fn layers(self) -> [Sixiang; 3] {
        [self.top_pair(), self.middle_pair(), self.bottom_pair()]
    }

    // ------------------------------------------------------------------
    // Symmetry operators
    // ------------------------------------------------------------------

    /// Flips every line (`h ^ 63`). Involution.
    #[inline]
    #[must_use]
    pub const fn invert(self) -> Self {
        Self((self.0 ^ HEXAGRAM_MASK) & HEXAGRAM_MASK)
    }

    /// Nuclear hexagram built from lines 2-5.
    ///
    /// Not idempotent: repeated application reaches a root in at most two
    /// steps.
    #[inline]
    #[must_use]
    pub const fn center(self) -> Self {
        Self(lut::center(self.0))
    }

    /// Swaps the upper and lower trigrams. Involution.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::from_trigrams(self.lower(), self.upper())
    }

    /// Mirrors all six lines. Involution.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        Self(lut::reverse(self.0))
    }

    /// Dyadic mutation: flips the lines set in `mask`.
    #[inline]
    #[must_use]
    pub const fn mutate(self, mask: Self) -> Self {
        Self((self.0 ^ mask.0) & HEXAGRAM_MASK)
    }

    /// Every single-step image at once.
    #[must_use]
    pub const fn orbit(self) -> Orbit {
        Orbit {
            selected: self,
            inverted: self.invert(),
            opposite: self.opposite(),
            reversed: self.reverse(),
            centered: self.center(),
        }
    }

    // ------------------------------------------------------------------
    // Nuclear convergence
    // ------------------------------------------------------------------

    /// True for the four roots 0, 21, 42, 63.
    #[inline]
    #[must_use]
    pub const fn is_root(self) -> bool {
        lut::is_root_bits(self.0)
    }

    /// Root reached by repeated [`Hexagram::center`].
    #[inline]
    #[must_use]
    pub const fn root(self) -> Self {
        Self(lut::root(self.0))
    }

    /// Number of `center` steps to the root: 0 (cosmic), 1 (karmic) or
    /// 2 (atomic).
    #[inline]
    #[must_use]
    pub const fn depth(self) -> u8 {
        lut::depth(self.0)
    }

    /// Hexagrams visited from `self` down to its root, inclusive.
    ///
    /// Stops early if a value repeats.
    ///
    /// ```
    /// use yijing::Hexagram;
    ///
    /// let chain: Vec<u8> = Hexagram::new(0b110_100).center_chain()
    ///     .iter().map(|h| h.value()).collect();
    /// assert_eq!(chain, vec![0b110_100, 0b101_010]);
    /// ```
    #[must_use]
    pub fn center_chain(self) -> Vec<Self> {
        let mut chain = vec![self];
        let mut current = self;
        while !current.is_root() && chain.len() <= MAX_CENTER_DEPTH {
            current = current.center();
            if chain.contains(&current) {
                break;
            }
            chain.push(current);
        }
        chain
    }

    /// The sixiang carried by the root: 0 north, 21 east, 42 west, 63 south.
    #[must_use]
    pub const fn sixiang(self) -> Sixiang {
        match self.root().0 {
            0 => Sixiang::North,
            21 => Sixiang::East,
            42 => Sixiang::West,
            _ => Sixiang::South,
        }
    }

    /// The root hexagram carrying a sixiang.
    #[must_use]
    pub const fn from_sixiang(sixiang: Sixiang) -> Self {
        match sixiang {
            Sixiang::North => Self(0),
            Sixiang::East => Self(21),
            Sixiang::West => Self(42),
            Sixiang::South => Self(63),
        }
    }

    // ------------------------------------------------------------------
    // Metrics
    // ------------------------------------------------------------------

    /// Number of yang lines, 0..=6.
    #[inline]
    #[must_use]
    pub const fn line_count(self) -> u8 {
        lut::line_count(self.0)
    }

    /// Hamming distance (number of differing lines), 0..=6.
    #[inline]
    #[must_use]
    pub const fn distance(self, other: Self) -> u8 {
        lut::line_count(self.0 ^ other.0)
    }

    /// The six hexagrams one line change away, ordered by flipped bit.
    #[must_use]
    pub const fn neighbors(self) -> [Self; HEXAGRAM_LINES] {
        let mut out = [self; HEXAGRAM_LINES];
        let mut i = 0;
        while i < HEXAGRAM_LINES {
            out[i] = Self((self.0 ^ (1 << i)) & HEXAGRAM_MASK);
            i += 1;
        }
        out
    }

    /// Yang fraction, `line_count / 6`.
    #[inline]
    #[must_use]
    pub fn balance(self) -> f64 {
        f64::from(self.line_count()) / HEXAGRAM_LINES as f64
    }

    /// Binary Shannon entropy of the yang/yin ratio.
    ///
    /// 0.0 for pure yin or pure yang, 1.0 at three yang lines.
    #[must_use]
    pub fn entropy(self) -> f64 {
        let yang = self.line_count();
        if yang == 0 || yang as usize == HEXAGRAM_LINES {
            return 0.0;
        }
        let p_yang = self.balance();
        let p_yin = 1.0 - p_yang;
        -(p_yang * p_yang.log2() + p_yin * p_yin.log2())
    }

    /// Element transition from the upper trigram to the lower trigram.
    #[must_use]
    pub const fn transition(self) -> Transition {
        self.upper().element().transition_to(self.lower().element())
    }

    // ------------------------------------------------------------------
    // Identity in the traditional sequence
    // ------------------------------------------------------------------

    /// 1-based position in the King Wen sequence.
    #[inline]
    #[must_use]
    pub fn king_wen_number(self) -> u8 {
        king_wen::position(self) + 1
    }

    /// Unicode hexagram glyph (U+4DC0..U+4DFF, King Wen order).
    #[must_use]
    pub fn symbol(self) -> char {
        char::from_u32(HEXAGRAM_GLYPH_BASE + u32::from(king_wen::position(self))).unwrap_or('?')
    }

    /// Pinyin name.
    #[must_use]
    pub fn name(self) -> &'static str {
        king_wen::NAMES[king_wen::position(self) as usize].0
    }

    /// English title.
    #[must_use]
    pub fn title(self) -> &'static str {
        king_wen::NAMES[king_wen::position(self) as usize].1
    }
}

impl fmt::Debug for Hexagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hexagram({}, {:06b}, {})", self.0, self.0, self.symbol())
    }
}

impl fmt::Display for Hexagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl From<Hexagram> for u8 {
    #[inline]
    fn from(h: Hexagram) -> Self {
        h.value()
    }
}

impl TryFrom<u8> for Hexagram {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(u64::from(value))
    }
}

impl FromStr for Hexagram {
    type Err = DomainError;

    /// Accepts a six-character line string (`"100010"`, bottom line first),
    /// `0b` binary, or a decimal value 0-63.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || DomainError::InvalidHexagram(s.to_string());

        if let Some(bits) = s.strip_prefix("0b") {
            let value = u64::from_str_radix(&bits.replace('_', ""), 2).map_err(|_| invalid())?;
            return Self::try_new(value);
        }
        if s.len() == HEXAGRAM_LINES && s.bytes().all(|b| b == b'0' || b == b'1') {
            let value = u64::from_str_radix(s, 2).map_err(|_| invalid())?;
            return Self::try_new(value);
        }
        let value = s.parse::<u64>().map_err(|_| invalid())?;
        Self::try_new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigram_halves() {
        let h = Hexagram::new(0b111_000);
        assert_eq!(h.upper().value(), 0b000);
        assert_eq!(h.lower().value(), 0b111);
        for u in Trigram::ALL {
            for l in Trigram::ALL {
                let h = Hexagram::from_trigrams(u, l);
                assert_eq!(h.upper(), u);
                assert_eq!(h.lower(), l);
            }
        }
    }

    #[test]
    fn test_zhun_reads_water_over_thunder() {
        let zhun = Hexagram::new(0b100_010);
        assert_eq!(zhun.king_wen_number(), 3);
        assert_eq!(zhun.upper(), Trigram::KAN);
        assert_eq!(zhun.lower(), Trigram::ZHEN);
        assert_eq!(zhun.name(), "Zhun");
        assert_eq!(zhun.lines(), [true, false, false, false, true, false]);
    }

    #[test]
    fn test_layers() {
        let h = Hexagram::new(0b11_10_01);
        assert_eq!(h.top_pair(), Sixiang::East);
        assert_eq!(h.middle_pair(), Sixiang::West);
        assert_eq!(h.bottom_pair(), Sixiang::South);
        assert_eq!(h.layers(), [Sixiang::East, Sixiang::West, Sixiang::South]);
    }

    #[test]
    fn test_involutions() {
        for h in Hexagram::all() {
            assert_eq!(h.invert().invert(), h);
            assert_eq!(h.reverse().reverse(), h);
            assert_eq!(h.opposite().opposite(), h);
        }
    }

    #[test]
    fn test_center_known_values() {
        assert_eq!(Hexagram::new(21).center(), Hexagram::new(42));
        assert_eq!(Hexagram::new(42).center(), Hexagram::new(21));
        assert_eq!(Hexagram::new(0).center(), Hexagram::new(0));
        assert_eq!(Hexagram::new(63).center(), Hexagram::new(63));
        // Zhun (3): nuclear is Bo (23)
        assert_eq!(Hexagram::new(0b100_010).center(), Hexagram::new(0b000_001));
    }

    #[test]
    fn test_root_and_chain() {
        for h in Hexagram::all() {
            let chain = h.center_chain();
            assert_eq!(chain.first(), Some(&h));
            assert_eq!(chain.last(), Some(&h.root()));
            assert_eq!(chain.len(), h.depth() as usize + 1);
            assert!(h.root().is_root());
        }
    }

    #[test]
    fn test_sixiang_roundtrip() {
        for s in Sixiang::ALL {
            assert_eq!(Hexagram::from_sixiang(s).sixiang(), s);
        }
    }

    #[test]
    fn test_line_count_and_distance() {
        assert_eq!(Hexagram::new(0b101_101).line_count(), 4);
        assert_eq!(Hexagram::EARTH.distance(Hexagram::HEAVEN), 6);
        for h in Hexagram::all() {
            assert_eq!(h.distance(h), 0);
            assert_eq!(h.distance(h.invert()), 6);
        }
    }

    #[test]
    fn test_neighbors() {
        let n = Hexagram::new(0).neighbors();
        let values: Vec<u8> = n.iter().map(|h| h.value()).collect();
        assert_eq!(values, vec![1, 2, 4, 8, 16, 32]);
    }

    #[test]
    fn test_balance_and_entropy() {
        assert_eq!(Hexagram::new(0).balance(), 0.0);
        assert_eq!(Hexagram::new(63).balance(), 1.0);
        assert_eq!(Hexagram::new(21).balance(), 0.5);
        assert_eq!(Hexagram::new(0).entropy(), 0.0);
        assert_eq!(Hexagram::new(63).entropy(), 0.0);
        assert!((Hexagram::new(21).entropy() - 1.0).abs() < 1e-12);
        assert!((Hexagram::new(42).entropy() - 1.0).abs() < 1e-12);
        // 1 yang line: -(1/6 log2 1/6 + 5/6 log2 5/6)
        assert!((Hexagram::new(1).entropy() - 0.650_022_421_648_350_8).abs() < 1e-9);
    }

    #[test]
    fn test_transition() {
        // Tai: kun above (earth), qian below (metal): earth creates metal
        assert_eq!(Hexagram::new(0b111_000).transition(), Transition::Creates);
        assert_eq!(Hexagram::new(0b010_010).transition(), Transition::Neutral);
    }

    #[test]
    fn test_glyphs_and_names() {
        assert_eq!(Hexagram::HEAVEN.symbol(), '䷀');
        assert_eq!(Hexagram::EARTH.symbol(), '䷁');
        assert_eq!(Hexagram::new(0b010_101).symbol(), '䷿');
        assert_eq!(Hexagram::HEAVEN.title(), "The Creative");
        assert_eq!(Hexagram::HEAVEN.to_string(), "䷀");
        assert_eq!(format!("{:?}", Hexagram::new(42)), "Hexagram(42, 101010, ䷾)");
    }

    #[test]
    fn test_parse() {
        assert_eq!("42".parse::<Hexagram>(), Ok(Hexagram::new(42)));
        assert_eq!("0b100_010".parse::<Hexagram>(), Ok(Hexagram::new(34)));
        assert_eq!("100010".parse::<Hexagram>(), Ok(Hexagram::new(34)));
        assert!(matches!(
            "64".parse::<Hexagram>(),
            Err(DomainError::OutOfRange { value: 64, .. })
        ));
        assert!(matches!(
            "qian".parse::<Hexagram>(),
            Err(DomainError::InvalidHexagram(_))
        ));
    }

    #[test]
    fn test_orbit() {
        let o = Hexagram::new(0b100_010).orbit();
        assert_eq!(o.selected.value(), 0b100_010);
        assert_eq!(o.inverted.value(), 0b011_101);
        assert_eq!(o.opposite.value(), 0b010_100);
        assert_eq!(o.reversed.value(), 0b010_001);
        assert_eq!(o.centered.value(), 0b000_001);
    }
}
