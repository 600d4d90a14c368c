//! Trigram (bagua) arrangements and the hexagram orders they generate.
//!
//! A hexagram order is the product of a trigram order with itself: the
//! outer loop walks the upper trigram, the inner loop the lower one, and
//! each pair becomes `(lower << 3) | upper`.

use crate::core::constants::{HEXAGRAM_CARDINALITY, TRIGRAM_CARDINALITY};
use crate::core::error::DomainError;
use crate::core::hexagram::Hexagram;
use crate::core::trigram::Trigram;

/// Early Heaven (Fu Xi): ☰ ☱ ☲ ☳ ☴ ☵ ☶ ☷.
pub const EARLY_HEAVEN_ORDER: [Trigram; TRIGRAM_CARDINALITY] = [
    Trigram::QIAN,
    Trigram::DUI,
    Trigram::LI,
    Trigram::ZHEN,
    Trigram::XUN,
    Trigram::KAN,
    Trigram::GEN,
    Trigram::KUN,
];

/// Later Heaven (King Wen arrangement), clockwise from the south:
/// ☲ ☷ ☱ ☰ ☵ ☶ ☳ ☴.
pub const LATER_HEAVEN_ORDER: [Trigram; TRIGRAM_CARDINALITY] = [
    Trigram::LI,
    Trigram::KUN,
    Trigram::DUI,
    Trigram::QIAN,
    Trigram::KAN,
    Trigram::GEN,
    Trigram::ZHEN,
    Trigram::XUN,
];

/// Parents then sons then daughters: ☰ ☷ ☳ ☵ ☶ ☴ ☲ ☱.
pub const KING_WEN_ORDER: [Trigram; TRIGRAM_CARDINALITY] = [
    Trigram::QIAN,
    Trigram::KUN,
    Trigram::ZHEN,
    Trigram::KAN,
    Trigram::GEN,
    Trigram::XUN,
    Trigram::LI,
    Trigram::DUI,
];

/// Unchecked product, for orders fixed at compile time.
pub(crate) const fn product(order: [Trigram; TRIGRAM_CARDINALITY]) -> [u8; HEXAGRAM_CARDINALITY] {
    let mut table = [0u8; HEXAGRAM_CARDINALITY];
    let mut i = 0;
    while i < TRIGRAM_CARDINALITY {
        let mut j = 0;
        while j < TRIGRAM_CARDINALITY {
            table[i * TRIGRAM_CARDINALITY + j] =
                Hexagram::from_trigrams(order[i], order[j]).value();
            j += 1;
        }
        i += 1;
    }
    table
}

/// Generates the 64 hexagrams from a trigram order.
///
/// Position `8 * i + j` holds the hexagram with upper trigram `order[i]`
/// and lower trigram `order[j]`.
///
/// # Errors
///
/// - [`DomainError::InvalidSequenceLength`] unless `order` has 8 entries
/// - [`DomainError::DuplicateEntry`] when a trigram repeats
///
/// # Example
///
/// ```
/// use yijing::sequence::bagua::{generate_hexagrams, EARLY_HEAVEN_ORDER};
///
/// let hexagrams = generate_hexagrams(&EARLY_HEAVEN_ORDER).unwrap();
/// assert_eq!(hexagrams[0].value(), 0b111_111);
/// assert_eq!(hexagrams[1].value(), 0b110_111); // dui below qian
/// assert_eq!(hexagrams[63].value(), 0);
/// ```
pub fn generate_hexagrams(order: &[Trigram]) -> Result<[Hexagram; HEXAGRAM_CARDINALITY], DomainError> {
    if order.len() != TRIGRAM_CARDINALITY {
        return Err(DomainError::InvalidSequenceLength {
            expected: TRIGRAM_CARDINALITY,
            actual: order.len(),
        });
    }
    let mut seen = 0u8;
    for t in order {
        if seen & (1 << t.value()) != 0 {
            return Err(DomainError::DuplicateEntry { value: t.value() });
        }
        seen |= 1 << t.value();
    }

    let mut out = [Hexagram::default(); HEXAGRAM_CARDINALITY];
    for (i, &upper) in order.iter().enumerate() {
        for (j, &lower) in order.iter().enumerate() {
            out[i * TRIGRAM_CARDINALITY + j] = Hexagram::from_trigrams(upper, lower);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::set::HexagramSet;

    #[test]
    fn test_orders_are_permutations() {
        for order in [EARLY_HEAVEN_ORDER, LATER_HEAVEN_ORDER, KING_WEN_ORDER] {
            let mut values: Vec<u8> = order.iter().map(|t| t.value()).collect();
            values.sort_unstable();
            assert_eq!(values, (0..8).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn test_generate_covers_every_pair() {
        for order in [EARLY_HEAVEN_ORDER, LATER_HEAVEN_ORDER, KING_WEN_ORDER] {
            let hexagrams = generate_hexagrams(&order).unwrap();
            let set: HexagramSet = hexagrams.iter().copied().collect();
            assert_eq!(set, HexagramSet::FULL);
            for (position, h) in hexagrams.iter().enumerate() {
                assert_eq!(h.upper(), order[position / 8]);
                assert_eq!(h.lower(), order[position % 8]);
            }
        }
    }

    #[test]
    fn test_generate_matches_const_product() {
        let checked = generate_hexagrams(&LATER_HEAVEN_ORDER).unwrap();
        let table = product(LATER_HEAVEN_ORDER);
        for (h, v) in checked.iter().zip(table) {
            assert_eq!(h.value(), v);
        }
    }

    #[test]
    fn test_generate_rejects_bad_orders() {
        assert!(matches!(
            generate_hexagrams(&EARLY_HEAVEN_ORDER[..7]),
            Err(DomainError::InvalidSequenceLength {
                expected: 8,
                actual: 7
            })
        ));
        let mut order = KING_WEN_ORDER;
        order[7] = Trigram::QIAN;
        assert_eq!(
            generate_hexagrams(&order),
            Err(DomainError::DuplicateEntry { value: 7 })
        );
    }
}
