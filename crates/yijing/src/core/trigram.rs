//! Trigram type: three lines, eight values.
//!
//! Bit 2 is the bottom line and bit 0 the top line; a set bit is a yang
//! (solid) line. With that convention the binary value reads the figure
//! from the ground up:
//!
//! | Value | Bits | Glyph | Name | Image | Element |
//! |-------|------|-------|------|-------|---------|
//! | 0 | 000 | ☷ | kun  | earth    | earth |
//! | 1 | 001 | ☶ | gen  | mountain | earth |
//! | 2 | 010 | ☵ | kan  | water    | water |
//! | 3 | 011 | ☴ | xun  | wind     | wood  |
//! | 4 | 100 | ☳ | zhen | thunder  | wood  |
//! | 5 | 101 | ☲ | li   | fire     | fire  |
//! | 6 | 110 | ☱ | dui  | lake     | metal |
//! | 7 | 111 | ☰ | qian | heaven   | metal |

use super::constants::{TRIGRAM_GLYPH_BASE, TRIGRAM_MASK};
use super::error::DomainError;
use super::sixiang::Sixiang;
use super::wuxing::Element;
use core::fmt;
use core::str::FromStr;

const NAMES: [&str; 8] = ["kun", "gen", "kan", "xun", "zhen", "li", "dui", "qian"];

const IMAGES: [&str; 8] = [
    "earth", "mountain", "water", "wind", "thunder", "fire", "lake", "heaven",
];

const ELEMENTS: [Element; 8] = [
    Element::Earth,
    Element::Earth,
    Element::Water,
    Element::Wood,
    Element::Wood,
    Element::Fire,
    Element::Metal,
    Element::Metal,
];

/// A trigram (0-7).
///
/// Construction masks to three bits, so every operation is total.
///
/// # Example
///
/// ```
/// use yijing::{Element, Trigram};
///
/// let t = Trigram::new(0b100);
/// assert_eq!(t.name(), "zhen");
/// assert_eq!(t.symbol(), '☳');
/// assert_eq!(t.element(), Element::Wood);
/// assert_eq!(t.reverse(), Trigram::GEN);
/// assert_eq!(t.invert(), Trigram::XUN);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Trigram(u8);

impl Trigram {
    /// ☷ Earth, the receptive.
    pub const KUN: Self = Self(0);
    /// ☶ Mountain, keeping still.
    pub const GEN: Self = Self(1);
    /// ☵ Water, the abysmal.
    pub const KAN: Self = Self(2);
    /// ☴ Wind, the gentle.
    pub const XUN: Self = Self(3);
    /// ☳ Thunder, the arousing.
    pub const ZHEN: Self = Self(4);
    /// ☲ Fire, the clinging.
    pub const LI: Self = Self(5);
    /// ☱ Lake, the joyous.
    pub const DUI: Self = Self(6);
    /// ☰ Heaven, the creative.
    pub const QIAN: Self = Self(7);

    /// All trigrams in value order.
    pub const ALL: [Self; 8] = [
        Self::KUN,
        Self::GEN,
        Self::KAN,
        Self::XUN,
        Self::ZHEN,
        Self::LI,
        Self::DUI,
        Self::QIAN,
    ];

    /// Creates a trigram from the low three bits of `value`.
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value & TRIGRAM_MASK)
    }

    /// Creates a trigram without masking.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutOfRange`] when `value > 7`.
    pub const fn try_new(value: u64) -> Result<Self, DomainError> {
        if value > TRIGRAM_MASK as u64 {
            return Err(DomainError::OutOfRange {
                kind: "trigram",
                value,
                max: TRIGRAM_MASK,
            });
        }
        Ok(Self(value as u8))
    }

    /// The raw 3-bit value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Mirrors the line order (swaps bit 0 and bit 2).
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        Self(((self.0 & 1) << 2) | (self.0 & 2) | ((self.0 & 4) >> 2))
    }

    /// Flips every line (`t ^ 7`).
    #[inline]
    #[must_use]
    pub const fn invert(self) -> Self {
        Self(self.0 ^ TRIGRAM_MASK)
    }

    /// Number of yang lines, 0..=3.
    #[inline]
    #[must_use]
    pub const fn line_count(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Element of the trigram.
    #[inline]
    #[must_use]
    pub const fn element(self) -> Element {
        ELEMENTS[self.0 as usize]
    }

    /// Unicode trigram glyph (U+2630..U+2637).
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match char::from_u32(TRIGRAM_GLYPH_BASE - self.0 as u32) {
            Some(c) => c,
            None => '?',
        }
    }

    /// Pinyin name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }

    /// Natural image (earth, mountain, ...).
    #[inline]
    #[must_use]
    pub const fn image(self) -> &'static str {
        IMAGES[self.0 as usize]
    }

    /// Looks up a trigram by pinyin name or image, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownTrigram`] for any other string.
    ///
    /// # Example
    ///
    /// ```
    /// use yijing::Trigram;
    ///
    /// assert_eq!(Trigram::from_name("qian").ok(), Some(Trigram::QIAN));
    /// assert_eq!(Trigram::from_name("Lake").ok(), Some(Trigram::DUI));
    /// assert!(Trigram::from_name("sky").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name) || t.image().eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::UnknownTrigram(name.to_string()))
    }

    /// The upper two lines as a sixiang (`(t >> 1) & 3`).
    #[inline]
    #[must_use]
    pub const fn sixiang(self) -> Sixiang {
        Sixiang::from_bits(self.0 >> 1)
    }

    /// The root trigram carrying a sixiang: north ☷, east ☵, west ☲, south ☰.
    ///
    /// Inverse of [`Trigram::sixiang`] on the four root trigrams.
    #[must_use]
    pub const fn from_sixiang(sixiang: Sixiang) -> Self {
        match sixiang {
            Sixiang::North => Self::KUN,
            Sixiang::East => Self::KAN,
            Sixiang::West => Self::LI,
            Sixiang::South => Self::QIAN,
        }
    }

    /// True for the trigrams with a constant or alternating line pattern
    /// (☷ ☵ ☲ ☰).
    #[inline]
    #[must_use]
    pub const fn is_root(self) -> bool {
        matches!(self.0, 0 | 2 | 5 | 7)
    }
}

impl fmt::Debug for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trigram({}, {:03b}, {})", self.0, self.0, self.symbol())
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl From<Trigram> for u8 {
    #[inline]
    fn from(t: Trigram) -> Self {
        t.value()
    }
}

impl TryFrom<u8> for Trigram {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(u64::from(value))
    }
}

impl FromStr for Trigram {
    type Err = DomainError;

    /// Accepts a name, an image, or a decimal value 0-7.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u64>() {
            Ok(value) => Self::try_new(value),
            Err(_) => Self::from_name(s.trim()),
        }
    }
}
