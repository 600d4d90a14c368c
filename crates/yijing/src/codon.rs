//! Genetic codons in bijection with the 64 hexagrams.
//!
//! Each base takes two bits (A=00, C=01, G=10, T/U=11). The 5′ base sits on
//! the bottom pair of lines (bits 4-5), the middle base on bits 2-3 and the
//! 3′ base on the top pair (bits 0-1), so a codon is read the same way a
//! hexagram is built.
//!
//! ```text
//! hexagram  0b 10 01 11
//!              │  │  └─ 3′ base  T
//!              │  └──── middle   C
//!              └─────── 5′ base  G      → "GCT" → alanine
//! ```
//!
//! Amino acids follow the standard genetic code. The label carries no
//! meaning for the hexagram algebra; it is a derived lookup keyed by the
//! same six bits.

use crate::core::constants::HEXAGRAM_CARDINALITY;
use crate::core::error::DomainError;
use crate::core::hexagram::Hexagram;
use core::fmt;
use core::str::FromStr;

/// A nucleotide base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Base {
    /// Adenine.
    A = 0,
    /// Cytosine.
    C = 1,
    /// Guanine.
    G = 2,
    /// Thymine (uracil in RNA).
    T = 3,
}

impl Base {
    /// All bases in bit order.
    pub const ALL: [Self; 4] = [Self::A, Self::C, Self::G, Self::T];

    /// Base from the low two bits.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 3 {
            0 => Self::A,
            1 => Self::C,
            2 => Self::G,
            _ => Self::T,
        }
    }

    /// Two-bit value.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// DNA letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::T => 'T',
        }
    }

    /// Parses one letter; `U` is read as `T`. Case-insensitive.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'C' => Some(Self::C),
            'G' => Some(Self::G),
            'T' | 'U' => Some(Self::T),
            _ => None,
        }
    }
}

/// Three bases, 5′ to 3′.
///
/// # Example
///
/// ```
/// use yijing::codon::{AminoAcid, Codon};
/// use yijing::Hexagram;
///
/// let codon: Codon = "aug".parse().unwrap();
/// assert_eq!(codon.to_string(), "ATG");
/// assert_eq!(codon.amino_acid(), AminoAcid::Methionine);
/// assert_eq!(Codon::from_hexagram(codon.to_hexagram()), codon);
/// assert_eq!(Codon::from_hexagram(Hexagram::new(0)).to_string(), "AAA");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon([Base; 3]);

impl Codon {
    /// Builds a codon from its three bases.
    #[must_use]
    pub const fn new(first: Base, second: Base, third: Base) -> Self {
        Self([first, second, third])
    }

    /// The codon spelled by a hexagram's three line pairs.
    #[must_use]
    pub const fn from_hexagram(h: Hexagram) -> Self {
        let v = h.value();
        Self([
            Base::from_bits(v >> 4),
            Base::from_bits(v >> 2),
            Base::from_bits(v),
        ])
    }

    /// The hexagram encoding this codon.
    #[must_use]
    pub const fn to_hexagram(self) -> Hexagram {
        Hexagram::new((self.0[0].bits() << 4) | (self.0[1].bits() << 2) | self.0[2].bits())
    }

    /// Bases 5′ to 3′.
    #[must_use]
    pub const fn bases(self) -> [Base; 3] {
        self.0
    }

    /// Amino acid under the standard genetic code.
    #[must_use]
    pub const fn amino_acid(self) -> AminoAcid {
        AminoAcid::of(self.to_hexagram())
    }

    /// True for TAA, TAG and TGA.
    #[must_use]
    pub const fn is_stop(self) -> bool {
        matches!(self.amino_acid(), AminoAcid::Stop)
    }

    /// Number of positions at which the bases differ, 0..=3.
    #[must_use]
    pub fn point_mutations(self, other: Self) -> usize {
        self.0.iter().zip(other.0).filter(|(a, b)| **a != *b).count()
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in self.0 {
            write!(f, "{}", base.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Codon {
    type Err = DomainError;

    /// Exactly three bases from `ACGTU`, in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let count = s.chars().count();
        if count != 3 {
            return Err(DomainError::InvalidCodonLength(count));
        }
        let mut bases = [Base::A; 3];
        for (position, (slot, c)) in bases.iter_mut().zip(s.chars()).enumerate() {
            *slot = Base::from_letter(c).ok_or(DomainError::InvalidBase { base: c, position })?;
        }
        Ok(Self(bases))
    }
}

impl From<Hexagram> for Codon {
    fn from(h: Hexagram) -> Self {
        Self::from_hexagram(h)
    }
}

impl From<Codon> for Hexagram {
    fn from(c: Codon) -> Self {
        c.to_hexagram()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Codon {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The 20 standard amino acids and the stop signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum AminoAcid {
    Alanine,
    Cysteine,
    AsparticAcid,
    GlutamicAcid,
    Phenylalanine,
    Glycine,
    Histidine,
    Isoleucine,
    Lysine,
    Leucine,
    Methionine,
    Asparagine,
    Proline,
    Glutamine,
    Arginine,
    Serine,
    Threonine,
    Valine,
    Tryptophan,
    Tyrosine,
    Stop,
}

/// One-letter codes indexed by hexagram value (codon AAA..TTT).
const GENETIC_CODE: &[u8; HEXAGRAM_CARDINALITY] =
    b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

impl AminoAcid {
    /// All 21 values, alphabetical by one-letter code with stop last.
    pub const ALL: [Self; 21] = [
        Self::Alanine,
        Self::Cysteine,
        Self::AsparticAcid,
        Self::GlutamicAcid,
        Self::Phenylalanine,
        Self::Glycine,
        Self::Histidine,
        Self::Isoleucine,
        Self::Lysine,
        Self::Leucine,
        Self::Methionine,
        Self::Asparagine,
        Self::Proline,
        Self::Glutamine,
        Self::Arginine,
        Self::Serine,
        Self::Threonine,
        Self::Valine,
        Self::Tryptophan,
        Self::Tyrosine,
        Self::Stop,
    ];

    /// Amino acid encoded by a hexagram's codon.
    #[must_use]
    pub const fn of(h: Hexagram) -> Self {
        match Self::from_code(GENETIC_CODE[h.value() as usize] as char) {
            Some(aa) => aa,
            None => Self::Stop,
        }
    }

    /// One-letter code (`*` for stop).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Cysteine => 'C',
            Self::AsparticAcid => 'D',
            Self::GlutamicAcid => 'E',
            Self::Phenylalanine => 'F',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Lysine => 'K',
            Self::Leucine => 'L',
            Self::Methionine => 'M',
            Self::Asparagine => 'N',
            Self::Proline => 'P',
            Self::Glutamine => 'Q',
            Self::Arginine => 'R',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Valine => 'V',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
            Self::Stop => '*',
        }
    }

    /// Inverse of [`AminoAcid::code`].
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        let mut i = 0;
        while i < Self::ALL.len() {
            if Self::ALL[i].code() == code.to_ascii_uppercase() {
                return Some(Self::ALL[i]);
            }
            i += 1;
        }
        None
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alanine => "alanine",
            Self::Cysteine => "cysteine",
            Self::AsparticAcid => "aspartic acid",
            Self::GlutamicAcid => "glutamic acid",
            Self::Phenylalanine => "phenylalanine",
            Self::Glycine => "glycine",
            Self::Histidine => "histidine",
            Self::Isoleucine => "isoleucine",
            Self::Lysine => "lysine",
            Self::Leucine => "leucine",
            Self::Methionine => "methionine",
            Self::Asparagine => "asparagine",
            Self::Proline => "proline",
            Self::Glutamine => "glutamine",
            Self::Arginine => "arginine",
            Self::Serine => "serine",
            Self::Threonine => "threonine",
            Self::Valine => "valine",
            Self::Tryptophan => "tryptophan",
            Self::Tyrosine => "tyrosine",
            Self::Stop => "stop",
        }
    }

    /// True for the stop signal.
    #[inline]
    #[must_use]
    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Amino acid of a hexagram's codon.
#[inline]
#[must_use]
pub const fn amino_acid(h: Hexagram) -> AminoAcid {
    AminoAcid::of(h)
}

/// True when a hexagram's codon is a stop codon.
#[inline]
#[must_use]
pub const fn is_stop(h: Hexagram) -> bool {
    AminoAcid::of(h).is_stop()
}

/// Line distance between two codons' hexagrams (0..=6).
///
/// Counts flipped bits, so a transition (A↔G) and a transversion (A↔T)
/// differ: one bit against two.
#[inline]
#[must_use]
pub const fn codon_distance(a: Hexagram, b: Hexagram) -> u8 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codon(s: &str) -> Codon {
        s.parse().unwrap()
    }

    #[test]
    fn test_bit_layout() {
        assert_eq!(codon("GCT").to_hexagram().value(), 0b10_01_11);
        assert_eq!(Codon::from_hexagram(Hexagram::new(63)).to_string(), "TTT");
        assert_eq!(Codon::from_hexagram(Hexagram::new(1)).to_string(), "AAC");
    }

    #[test]
    fn test_roundtrip_all() {
        for h in Hexagram::all() {
            let c = Codon::from_hexagram(h);
            assert_eq!(c.to_hexagram(), h);
            assert_eq!(c.to_string().parse::<Codon>(), Ok(c));
        }
    }

    #[test]
    fn test_rna_and_case() {
        assert_eq!(codon("uuu"), codon("TTT"));
        assert_eq!(codon(" Gau "), codon("GAT"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("AC".parse::<Codon>(), Err(DomainError::InvalidCodonLength(2)));
        assert_eq!("ACGT".parse::<Codon>(), Err(DomainError::InvalidCodonLength(4)));
        assert_eq!(
            "AXG".parse::<Codon>(),
            Err(DomainError::InvalidBase {
                base: 'X',
                position: 1
            })
        );
    }

    #[test]
    fn test_standard_code() {
        assert_eq!(codon("TGC").amino_acid(), AminoAcid::Cysteine);
        assert_eq!(codon("TGT").amino_acid(), AminoAcid::Cysteine);
        assert_eq!(codon("TGG").amino_acid(), AminoAcid::Tryptophan);
        assert_eq!(codon("ATG").amino_acid(), AminoAcid::Methionine);
        assert_eq!(codon("GCT").amino_acid(), AminoAcid::Alanine);
        for stop in ["TAA", "TAG", "TGA"] {
            assert!(codon(stop).is_stop(), "{stop}");
        }
    }

    #[test]
    fn test_degeneracy_counts() {
        let count = |aa: AminoAcid| Hexagram::all().filter(|&h| amino_acid(h) == aa).count();
        assert_eq!(count(AminoAcid::Stop), 3);
        assert_eq!(count(AminoAcid::Leucine), 6);
        assert_eq!(count(AminoAcid::Serine), 6);
        assert_eq!(count(AminoAcid::Arginine), 6);
        assert_eq!(count(AminoAcid::Cysteine), 2);
        assert_eq!(count(AminoAcid::Tryptophan), 1);
        assert_eq!(count(AminoAcid::Methionine), 1);
        let total: usize = AminoAcid::ALL.iter().map(|&aa| count(aa)).sum();
        assert_eq!(total, 64);
    }

    #[test]
    fn test_codes_roundtrip() {
        for aa in AminoAcid::ALL {
            assert_eq!(AminoAcid::from_code(aa.code()), Some(aa));
        }
        assert_eq!(AminoAcid::from_code('x'), None);
        assert_eq!(AminoAcid::from_code('w'), Some(AminoAcid::Tryptophan));
    }

    #[test]
    fn test_distances() {
        let a = codon("AAA");
        let g = codon("GAA");
        let t = codon("TAA");
        assert_eq!(codon_distance(a.to_hexagram(), g.to_hexagram()), 1);
        assert_eq!(codon_distance(a.to_hexagram(), t.to_hexagram()), 2);
        assert_eq!(a.point_mutations(t), 1);
        assert_eq!(a.point_mutations(codon("TTT")), 3);
    }
}
