//! Precomputed lookup tables for O(1) hexagram operations.
//!
//! Every table is built at compile time by a `const` loop over the 64
//! hexagram values and stored in read-only memory. Each table is 64 bytes
//! and fits in a single cache line.
//!
//! # Tables Provided
//!
//! - **Line count**: yang lines per hexagram
//! - **Center**: nuclear hexagram (lines 2-5)
//! - **Reverse**: six-line mirror
//! - **Root**: fixed point reached by repeated `center`
//! - **Depth**: number of `center` steps to the root
//! - **Gray**: reflected binary code and its inverse
//!
//! # Example
//!
//! ```
//! use yijing::lut::{center, depth, line_count, root};
//!
//! assert_eq!(line_count(0b101_101), 4);
//! assert_eq!(center(0b000_001), 0b000_000);
//! assert_eq!(root(0b110_100), 0b101_010);
//! assert_eq!(depth(0b111_111), 0);
//! ```

use crate::core::constants::{HEXAGRAM_CARDINALITY, HEXAGRAM_MASK, MAX_CENTER_DEPTH};

// ============================================================================
// Primitive bit operations (const, used to build the tables)
// ============================================================================

/// Nuclear hexagram: lines 2-4 become the lower trigram, lines 3-5 the upper.
#[inline]
pub const fn center_bits(h: u8) -> u8 {
    ((h << 1) & 56) | ((h >> 1) & 7)
}

/// Reverses the order of the six lines.
#[inline]
pub const fn reverse_bits(h: u8) -> u8 {
    ((h & 1) << 5)
        | ((h & 2) << 3)
        | ((h & 4) << 1)
        | ((h & 8) >> 1)
        | ((h & 16) >> 3)
        | ((h & 32) >> 5)
}

/// True for the four roots 0, 21, 42, 63.
#[inline]
pub const fn is_root_bits(h: u8) -> bool {
    matches!(h & HEXAGRAM_MASK, 0 | 21 | 42 | 63)
}

/// Binary to reflected Gray code.
#[inline]
pub const fn to_gray_bits(n: u8) -> u8 {
    n ^ (n >> 1)
}

/// Reflected Gray code to binary by XOR folding.
#[inline]
pub const fn from_gray_bits(g: u8) -> u8 {
    let mut n = g ^ (g >> 4);
    n ^= n >> 2;
    n ^= n >> 1;
    n
}

// ============================================================================
// Hexagram tables
// ============================================================================

/// `LINE_COUNT[h]` = popcount(h).
pub static LINE_COUNT: [u8; HEXAGRAM_CARDINALITY] = {
    let mut table = [0u8; HEXAGRAM_CARDINALITY];
    let mut i = 0;
    while i < HEXAGRAM_CARDINALITY {
        table[i] = (i as u8).count_ones() as u8;
        i += 1;
    }
    table
};

/// `CENTER[h]` = nuclear hexagram of `h`.
pub static CENTER: [u8; HEXAGRAM_CARDINALITY] = {
    let mut table = [0u8; HEXAGRAM_CARDINALITY];
    let mut i = 0;
    while i < HEXAGRAM_CARDINALITY {
        table[i] = center_bits(i as u8);
        i += 1;
    }
    table
};

/// `REVERSE[h]` = `h` with its six lines mirrored.
pub static REVERSE: [u8; HEXAGRAM_CARDINALITY] = {
    let mut table = [0u8; HEXAGRAM_CARDINALITY];
    let mut i = 0;
    while i < HEXAGRAM_CARDINALITY {
        table[i] = reverse_bits(i as u8);
        i += 1;
    }
    table
};

/// Root and depth, packed as `(depth << 6) | root`.
///
/// The walk is bounded by `MAX_CENTER_DEPTH`. Every entry lands on a root
/// well inside that bound (checked in tests).
static ROOT_DEPTH: [u8; HEXAGRAM_CARDINALITY] = {
    let mut table = [0u8; HEXAGRAM_CARDINALITY];
    let mut i = 0;
    while i < HEXAGRAM_CARDINALITY {
        let mut value = i as u8;
        let mut depth = 0u8;
        while !is_root_bits(value) && (depth as usize) < MAX_CENTER_DEPTH {
            value = center_bits(value);
            depth += 1;
        }
        table[i] = (depth << 6) | value;
        i += 1;
    }
    table
};

/// `GRAY[n]` = Gray code of `n`.
pub static GRAY: [u8; HEXAGRAM_CARDINALITY] = {
    let mut table = [0u8; HEXAGRAM_CARDINALITY];
    let mut i = 0;
    while i < HEXAGRAM_CARDINALITY {
        table[i] = to_gray_bits(i as u8);
        i += 1;
    }
    table
};

/// `FROM_GRAY[g]` = binary value whose Gray code is `g`.
pub static FROM_GRAY: [u8; HEXAGRAM_CARDINALITY] = {
    let mut table = [0u8; HEXAGRAM_CARDINALITY];
    let mut i = 0;
    while i < HEXAGRAM_CARDINALITY {
        table[i] = from_gray_bits(i as u8);
        i += 1;
    }
    table
};

// ============================================================================
// O(1) accessors
// ============================================================================

/// O(1) yang line count.
#[inline]
pub const fn line_count(h: u8) -> u8 {
    LINE_COUNT[(h & HEXAGRAM_MASK) as usize]
}

/// O(1) nuclear hexagram.
#[inline]
pub const fn center(h: u8) -> u8 {
    CENTER[(h & HEXAGRAM_MASK) as usize]
}

/// O(1) six-line mirror.
#[inline]
pub const fn reverse(h: u8) -> u8 {
    REVERSE[(h & HEXAGRAM_MASK) as usize]
}

/// O(1) root lookup.
#[inline]
pub const fn root(h: u8) -> u8 {
    ROOT_DEPTH[(h & HEXAGRAM_MASK) as usize] & HEXAGRAM_MASK
}

/// O(1) nuclear depth lookup.
#[inline]
pub const fn depth(h: u8) -> u8 {
    ROOT_DEPTH[(h & HEXAGRAM_MASK) as usize] >> 6
}

/// O(1) Gray encoding.
#[inline]
pub const fn to_gray(n: u8) -> u8 {
    GRAY[(n & HEXAGRAM_MASK) as usize]
}

/// O(1) Gray decoding.
#[inline]
pub const fn from_gray(g: u8) -> u8 {
    FROM_GRAY[(g & HEXAGRAM_MASK) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count_matches_popcount() {
        for h in 0..64u8 {
            assert_eq!(line_count(h), h.count_ones() as u8);
        }
        assert_eq!(line_count(0b101_101), 4);
    }

    #[test]
    fn test_every_walk_reaches_a_root() {
        for h in 0..64u8 {
            assert!(is_root_bits(root(h)), "walk from {h} stopped at {}", root(h));
            assert!(depth(h) <= 2, "depth({h}) = {}", depth(h));
        }
    }

    #[test]
    fn test_depth_histogram() {
        let mut counts = [0usize; 3];
        for h in 0..64u8 {
            counts[depth(h) as usize] += 1;
        }
        assert_eq!(counts, [4, 12, 48]);
    }

    #[test]
    fn test_root_depth_agrees_with_iteration() {
        for h in 0..64u8 {
            let mut value = h;
            let mut steps = 0;
            while !is_root_bits(value) {
                value = center_bits(value);
                steps += 1;
            }
            assert_eq!(root(h), value);
            assert_eq!(depth(h), steps);
        }
    }

    #[test]
    fn test_reverse_involution() {
        for h in 0..64u8 {
            assert_eq!(reverse(reverse(h)), h);
        }
        assert_eq!(reverse(0b000_001), 0b100_000);
        assert_eq!(reverse(0b110_100), 0b001_011);
    }

    #[test]
    fn test_gray_roundtrip() {
        for n in 0..64u8 {
            assert_eq!(from_gray(to_gray(n)), n);
            assert_eq!(to_gray(from_gray(n)), n);
        }
    }

    #[test]
    fn test_gray_adjacent_codes_differ_by_one_bit() {
        for n in 0..63u8 {
            assert_eq!((to_gray(n) ^ to_gray(n + 1)).count_ones(), 1);
        }
    }

    #[test]
    fn test_accessors_mask_input() {
        assert_eq!(center(64 + 5), center(5));
        assert_eq!(line_count(0xFF), 6);
    }
}
