//! The four images (sixiang): two-line figures.
//!
//! A sixiang is any 2-bit slice of a trigram or hexagram. The four values
//! carry a cardinal direction, a guardian animal and an element.
//!
//! | Value | Bits | Name | Glyph | Element |
//! |-------|------|------|-------|---------|
//! | 0 | 00 | north | ⚏ | water |
//! | 1 | 01 | east  | ⚎ | wood  |
//! | 2 | 10 | west  | ⚍ | metal |
//! | 3 | 11 | south | ⚌ | fire  |

use super::constants::SIXIANG_MASK;
use super::error::DomainError;
use super::wuxing::Element;
use core::fmt;
use core::str::FromStr;

/// A two-line figure.
///
/// # Example
///
/// ```
/// use yijing::{Element, Sixiang};
///
/// let s = Sixiang::from_bits(0b1101); // masked to 0b01
/// assert_eq!(s, Sixiang::East);
/// assert_eq!(s.symbol(), '⚎');
/// assert_eq!(s.element(), Element::Wood);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Sixiang {
    /// Old yin, Black Tortoise.
    #[default]
    North = 0,
    /// Young yang, Azure Dragon.
    East = 1,
    /// Young yin, White Tiger.
    West = 2,
    /// Old yang, Vermilion Bird.
    South = 3,
}

impl Sixiang {
    /// All four in value order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::West, Self::South];

    /// Builds a sixiang from the low two bits of `bits`.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & SIXIANG_MASK {
            0 => Self::North,
            1 => Self::East,
            2 => Self::West,
            _ => Self::South,
        }
    }

    /// The 2-bit value.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Direction name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::West => "west",
            Self::South => "south",
        }
    }

    /// Looks up a sixiang by direction name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownSixiang`] for any other string.
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::UnknownSixiang(name.to_string()))
    }

    /// Unicode digram glyph.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::North => '⚏',
            Self::East => '⚎',
            Self::West => '⚍',
            Self::South => '⚌',
        }
    }

    /// Guardian animal emoji.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::North => "\u{1f422}",
            Self::East => "\u{1f409}",
            Self::West => "\u{1f405}",
            Self::South => "\u{1f426}",
        }
    }

    /// Element of the direction.
    #[must_use]
    pub const fn element(self) -> Element {
        match self {
            Self::North => Element::Water,
            Self::East => Element::Wood,
            Self::West => Element::Metal,
            Self::South => Element::Fire,
        }
    }
}

impl fmt::Display for Sixiang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sixiang {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
