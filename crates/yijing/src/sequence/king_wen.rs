//! The King Wen sequence and the Eight Palaces.
//!
//! The King Wen order is the order of the received text: hexagram 1 is
//! Qian (all yang), hexagram 2 Kun (all yin), and so on through Wei Ji.
//! Unicode places the hexagram glyphs U+4DC0..U+4DFF in this order.
//!
//! The Eight Palaces (Jing Fang) regroup the same 64 figures into eight
//! blocks of eight. Each block opens with a doubled trigram and then
//! changes lines from the bottom up. The table is recorded as King Wen
//! numbers and resolved through [`FORWARD`].

use crate::core::constants::{HEXAGRAM_CARDINALITY, TRIGRAM_CARDINALITY};
use crate::core::error::DomainError;
use crate::core::hexagram::Hexagram;
use crate::core::trigram::Trigram;
use crate::sequence::{EIGHT_PALACES, KING_WEN};

/// Position → hexagram for the King Wen order (position = number - 1).
#[rustfmt::skip]
pub const FORWARD: [u8; HEXAGRAM_CARDINALITY] = [
    0b111_111, 0b000_000, 0b100_010, 0b010_001, 0b111_010, 0b010_111, 0b010_000, 0b000_010,
    0b111_011, 0b110_111, 0b111_000, 0b000_111, 0b101_111, 0b111_101, 0b001_000, 0b000_100,
    0b100_110, 0b011_001, 0b110_000, 0b000_011, 0b100_101, 0b101_001, 0b000_001, 0b100_000,
    0b100_111, 0b111_001, 0b100_001, 0b011_110, 0b010_010, 0b101_101, 0b001_110, 0b011_100,
    0b001_111, 0b111_100, 0b000_101, 0b101_000, 0b101_011, 0b110_101, 0b001_010, 0b010_100,
    0b110_001, 0b100_011, 0b111_110, 0b011_111, 0b000_110, 0b011_000, 0b010_110, 0b011_010,
    0b101_110, 0b011_101, 0b100_100, 0b001_001, 0b001_011, 0b110_100, 0b101_100, 0b001_101,
    0b011_011, 0b110_110, 0b010_011, 0b110_010, 0b110_011, 0b001_100, 0b101_010, 0b010_101,
];

/// Pinyin name and English title, indexed by King Wen position.
pub const NAMES: [(&str, &str); HEXAGRAM_CARDINALITY] = [
    ("Qian", "The Creative"),
    ("Kun", "The Receptive"),
    ("Zhun", "Difficulty at the Beginning"),
    ("Meng", "Youthful Folly"),
    ("Xu", "Waiting"),
    ("Song", "Conflict"),
    ("Shi", "The Army"),
    ("Bi", "Holding Together"),
    ("Xiao Chu", "The Taming Power of the Small"),
    ("Lu", "Treading"),
    ("Tai", "Peace"),
    ("Pi", "Standstill"),
    ("Tong Ren", "Fellowship with Men"),
    ("Da You", "Possession in Great Measure"),
    ("Qian", "Modesty"),
    ("Yu", "Enthusiasm"),
    ("Sui", "Following"),
    ("Gu", "Work on What Has Been Spoiled"),
    ("Lin", "Approach"),
    ("Guan", "Contemplation"),
    ("Shi He", "Biting Through"),
    ("Bi", "Grace"),
    ("Bo", "Splitting Apart"),
    ("Fu", "Return"),
    ("Wu Wang", "Innocence"),
    ("Da Chu", "The Taming Power of the Great"),
    ("Yi", "The Corners of the Mouth"),
    ("Da Guo", "Preponderance of the Great"),
    ("Kan", "The Abysmal"),
    ("Li", "The Clinging"),
    ("Xian", "Influence"),
    ("Heng", "Duration"),
    ("Dun", "Retreat"),
    ("Da Zhuang", "The Power of the Great"),
    ("Jin", "Progress"),
    ("Ming Yi", "Darkening of the Light"),
    ("Jia Ren", "The Family"),
    ("Kui", "Opposition"),
    ("Jian", "Obstruction"),
    ("Xie", "Deliverance"),
    ("Sun", "Decrease"),
    ("Yi", "Increase"),
    ("Guai", "Breakthrough"),
    ("Gou", "Coming to Meet"),
    ("Cui", "Gathering Together"),
    ("Sheng", "Pushing Upward"),
    ("Kun", "Oppression"),
    ("Jing", "The Well"),
    ("Ge", "Revolution"),
    ("Ding", "The Cauldron"),
    ("Zhen", "The Arousing"),
    ("Gen", "Keeping Still"),
    ("Jian", "Development"),
    ("Gui Mei", "The Marrying Maiden"),
    ("Feng", "Abundance"),
    ("Lu", "The Wanderer"),
    ("Xun", "The Gentle"),
    ("Dui", "The Joyous"),
    ("Huan", "Dispersion"),
    ("Jie", "Limitation"),
    ("Zhong Fu", "Inner Truth"),
    ("Xiao Guo", "Preponderance of the Small"),
    ("Ji Ji", "After Completion"),
    ("Wei Ji", "Before Completion"),
];

/// Eight Palaces order as King Wen numbers (1-based).
#[rustfmt::skip]
pub const PALACE_NUMBERS: [u8; HEXAGRAM_CARDINALITY] = [
     2, 24, 19, 11, 34, 43,  5,  8,
    52, 22, 26, 41, 38, 10, 61, 53,
    29, 60,  3, 63, 49, 55, 36,  7,
    57,  9, 37, 42, 25, 21, 27, 18,
    51, 16, 40, 32, 46, 48, 28, 17,
    30, 56, 50, 64,  4, 59,  6, 13,
    58, 47, 45, 31, 39, 15, 62, 54,
     1, 44, 33, 12, 20, 23, 35, 14,
];

/// Eight Palaces position → hexagram, resolved through the King Wen table.
pub(crate) const fn palace_table() -> [u8; HEXAGRAM_CARDINALITY] {
    let mut table = [0u8; HEXAGRAM_CARDINALITY];
    let mut i = 0;
    while i < HEXAGRAM_CARDINALITY {
        table[i] = FORWARD[PALACE_NUMBERS[i] as usize - 1];
        i += 1;
    }
    table
}

/// 0-based King Wen position of a hexagram.
#[inline]
#[must_use]
pub fn position(h: Hexagram) -> u8 {
    KING_WEN.inverse()[h.value() as usize]
}

/// The hexagram with a 1-based King Wen number.
///
/// # Errors
///
/// Returns [`DomainError::OutOfRange`] unless `1 <= number <= 64`.
///
/// ```
/// use yijing::sequence::king_wen;
///
/// assert_eq!(king_wen::by_number(11).unwrap().value(), 0b111_000);
/// assert!(king_wen::by_number(0).is_err());
/// ```
pub fn by_number(number: u8) -> Result<Hexagram, DomainError> {
    let out_of_range = DomainError::OutOfRange {
        kind: "King Wen number",
        value: u64::from(number),
        max: HEXAGRAM_CARDINALITY as u8,
    };
    let position = usize::from(number.checked_sub(1).ok_or(out_of_range.clone())?);
    KING_WEN.hexagram_at(position).ok_or(out_of_range)
}

/// The palace a hexagram belongs to, named by its heading trigram.
///
/// ```
/// use yijing::sequence::king_wen::palace;
/// use yijing::{Hexagram, Trigram};
///
/// // Tai (Peace) is the fourth figure of the Kun palace.
/// assert_eq!(palace(Hexagram::new(0b111_000)), Trigram::KUN);
/// ```
#[must_use]
pub fn palace(h: Hexagram) -> Trigram {
    Trigram::new((EIGHT_PALACES.position_of(h) / TRIGRAM_CARDINALITY) as u8)
}
