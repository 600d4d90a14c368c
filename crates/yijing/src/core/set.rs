//! 64-bit bitset of hexagrams.

use super::constants::HEXAGRAM_MASK;
use super::hexagram::Hexagram;

/// A subset of the 64 hexagrams.
///
/// Bit `h` is set when hexagram `h` is a member. Set algebra is a single
/// word operation and iteration is in ascending hexagram order.
///
/// # Examples
///
/// ```
/// use yijing::{Hexagram, HexagramSet};
///
/// let set = HexagramSet::EMPTY.insert(Hexagram::new(0)).insert(Hexagram::new(63));
/// assert!(set.contains(Hexagram::new(63)));
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.complement().len(), 62);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct HexagramSet(u64);

impl HexagramSet {
    /// Empty set.
    pub const EMPTY: Self = Self(0);

    /// All 64 hexagrams.
    pub const FULL: Self = Self(u64::MAX);

    /// Builds a set from its raw bitmask.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Raw bitmask.
    #[inline]
    #[must_use]
    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// Set containing every hexagram that satisfies `predicate`.
    pub fn from_predicate(predicate: impl Fn(Hexagram) -> bool) -> Self {
        Hexagram::all()
            .filter(|&h| predicate(h))
            .fold(Self::EMPTY, Self::insert)
    }

    /// Insert a hexagram.
    #[inline]
    #[must_use]
    pub const fn insert(self, h: Hexagram) -> Self {
        Self(self.0 | (1u64 << h.value()))
    }

    /// Remove a hexagram.
    #[inline]
    #[must_use]
    pub const fn remove(self, h: Hexagram) -> Self {
        Self(self.0 & !(1u64 << h.value()))
    }

    /// Test membership.
    #[inline]
    pub const fn contains(&self, h: Hexagram) -> bool {
        (self.0 >> h.value()) & 1 == 1
    }

    /// Population count.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Intersection (AND).
    #[inline]
    #[must_use]
    pub const fn intersection(&self, other: &Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Union (OR).
    #[inline]
    #[must_use]
    pub const fn union(&self, other: &Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Difference (self AND NOT other).
    #[inline]
    #[must_use]
    pub const fn difference(&self, other: &Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Complement within the 64 hexagrams.
    #[inline]
    #[must_use]
    pub const fn complement(&self) -> Self {
        Self(!self.0)
    }

    /// Check if two sets share no member.
    #[inline]
    pub const fn is_disjoint(&self, other: &Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Iterate over members in ascending order.
    pub fn iter(&self) -> HexagramSetIter {
        HexagramSetIter { bits: self.0 }
    }

    /// Members as a vector, ascending.
    pub fn to_vec(&self) -> Vec<Hexagram> {
        self.iter().collect()
    }
}

impl core::fmt::Debug for HexagramSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter().map(|h| h.value())).finish()
    }
}

impl FromIterator<Hexagram> for HexagramSet {
    fn from_iter<I: IntoIterator<Item = Hexagram>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::insert)
    }
}

impl IntoIterator for HexagramSet {
    type Item = Hexagram;
    type IntoIter = HexagramSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &HexagramSet {
    type Item = Hexagram;
    type IntoIter = HexagramSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HexagramSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|h| h.value()))
    }
}

/// Iterator over `HexagramSet` members in ascending order.
#[derive(Debug, Clone)]
pub struct HexagramSetIter {
    bits: u64,
}

impl Iterator for HexagramSetIter {
    type Item = Hexagram;

    fn next(&mut self) -> Option<Hexagram> {
        if self.bits == 0 {
            return None;
        }
        let bit = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        Some(Hexagram::new(bit as u8 & HEXAGRAM_MASK))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HexagramSetIter {}
