//! Reflected binary Gray code over six bits.

use crate::core::constants::HEXAGRAM_CARDINALITY;
use crate::core::hexagram::Hexagram;
use crate::lut;

/// Gray code of a 6-bit value.
///
/// ```
/// use yijing::sequence::gray::{from_gray, to_gray};
///
/// assert_eq!(to_gray(0b000_011), 0b000_010);
/// assert_eq!(from_gray(to_gray(45)), 45);
/// ```
#[inline]
#[must_use]
pub const fn to_gray(n: u8) -> u8 {
    lut::to_gray(n)
}

/// Binary value whose Gray code is `g`.
#[inline]
#[must_use]
pub const fn from_gray(g: u8) -> u8 {
    lut::from_gray(g)
}

/// The hexagram at position `n` of the Gray ordering.
#[inline]
#[must_use]
pub const fn hexagram(n: u8) -> Hexagram {
    Hexagram::new(to_gray(n))
}

/// Position → hexagram table for the Gray ordering.
pub(crate) const fn table() -> [u8; HEXAGRAM_CARDINALITY] {
    let mut table = [0u8; HEXAGRAM_CARDINALITY];
    let mut i = 0;
    while i < HEXAGRAM_CARDINALITY {
        table[i] = lut::to_gray_bits(i as u8);
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::GRAY;

    #[test]
    fn test_roundtrip() {
        for n in 0..64u8 {
            assert_eq!(from_gray(to_gray(n)), n);
        }
    }

    #[test]
    fn test_sequence_steps_one_line() {
        let hexagrams: Vec<Hexagram> = GRAY.iter().collect();
        for pair in hexagrams.windows(2) {
            assert_eq!(pair[0].distance(pair[1]), 1);
        }
        // wraps around as well
        assert_eq!(hexagrams[63].distance(hexagrams[0]), 1);
    }

    #[test]
    fn test_table_matches_lut() {
        for (n, &g) in table().iter().enumerate() {
            assert_eq!(g, to_gray(n as u8));
            assert_eq!(hexagram(n as u8).value(), g);
        }
    }
}
