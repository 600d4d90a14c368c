//! Precomputed classification groups.
//!
//! A [`Partition`] holds one [`HexagramSet`] per class. Each of the five
//! standard partitions is computed on first use and shared afterwards.
//!
//! # Invariant
//!
//! The sets are pairwise disjoint and their union covers all 64 hexagrams.
//! [`Partition::verify`] checks this.
//!
//! # Examples
//!
//! ```
//! use yijing::classify::{symmetry_groups, transition_groups, Symmetry};
//! use yijing::Transition;
//!
//! let groups = symmetry_groups();
//! assert!(groups.verify());
//! assert_eq!(groups.get(Symmetry::Gigante).len(), 24);
//! assert_eq!(transition_groups().get(Transition::Neutral).len(), 14);
//! ```

use super::{Balance, Class, Mantra, Symmetry};
use crate::codon::AminoAcid;
use crate::core::error::DomainError;
use crate::core::hexagram::Hexagram;
use crate::core::set::HexagramSet;
use crate::core::wuxing::Transition;
use core::fmt;
use core::str::FromStr;
use std::sync::OnceLock;

/// Membership sets for every class of `C`, in `C::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<C: Class> {
    classes: Vec<(C, HexagramSet)>,
}

/// The seven symmetry classes.
pub type SymmetryGroups = Partition<Symmetry>;
/// Cosmic, karmic and atomic.
pub type MantraGroups = Partition<Mantra>;
/// Balanced and unbalanced.
pub type BalanceGroups = Partition<Balance>;
/// Element transition from the upper to the lower trigram.
pub type TransitionGroups = Partition<Transition>;
/// Hexagrams per encoded amino acid.
pub type AminoAcidGroups = Partition<AminoAcid>;

impl<C: Class> Partition<C> {
    /// Classifies all 64 hexagrams.
    pub fn compute() -> Self {
        let mut sets = vec![HexagramSet::EMPTY; C::ALL.len()];
        for h in Hexagram::all() {
            let class = C::classify(h);
            if let Some(i) = C::ALL.iter().position(|&c| c == class) {
                sets[i] = sets[i].insert(h);
            }
        }
        Self {
            classes: C::ALL.iter().copied().zip(sets).collect(),
        }
    }

    /// Members of one class.
    pub fn get(&self, class: C) -> HexagramSet {
        self.classes
            .iter()
            .find(|(c, _)| *c == class)
            .map_or(HexagramSet::EMPTY, |(_, set)| *set)
    }

    /// The class holding a hexagram.
    pub fn class_of(&self, h: Hexagram) -> Option<C> {
        self.classes
            .iter()
            .find(|(_, set)| set.contains(h))
            .map(|(c, _)| *c)
    }

    /// Classes with their members.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (C, HexagramSet)> + '_ {
        self.classes.iter().copied()
    }

    /// Population of each class.
    pub fn counts(&self) -> Vec<(C, usize)> {
        self.iter().map(|(c, set)| (c, set.len())).collect()
    }

    /// Number of classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True only for a classification without classes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Verify the disjoint-cover invariant.
    pub fn verify(&self) -> bool {
        let mut seen = HexagramSet::EMPTY;
        for (_, set) in &self.classes {
            if !seen.is_disjoint(set) {
                return false;
            }
            seen = seen.union(set);
        }
        seen == HexagramSet::FULL
    }
}

#[cfg(feature = "serde")]
impl<C: Class> serde::Serialize for Partition<C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.classes.iter().map(|(c, set)| (c.label(), set)))
    }
}

static SYMMETRY: OnceLock<SymmetryGroups> = OnceLock::new();
static MANTRA: OnceLock<MantraGroups> = OnceLock::new();
static BALANCE: OnceLock<BalanceGroups> = OnceLock::new();
static TRANSITION: OnceLock<TransitionGroups> = OnceLock::new();
static AMINO_ACID: OnceLock<AminoAcidGroups> = OnceLock::new();

/// Symmetry partition, computed once.
pub fn symmetry_groups() -> &'static SymmetryGroups {
    SYMMETRY.get_or_init(Partition::compute)
}

/// Mantra partition, computed once.
pub fn mantra_groups() -> &'static MantraGroups {
    MANTRA.get_or_init(Partition::compute)
}

/// Balance partition, computed once.
pub fn balance_groups() -> &'static BalanceGroups {
    BALANCE.get_or_init(Partition::compute)
}

/// Transition partition, computed once.
pub fn transition_groups() -> &'static TransitionGroups {
    TRANSITION.get_or_init(Partition::compute)
}

/// Amino acid partition, computed once.
pub fn amino_acid_groups() -> &'static AminoAcidGroups {
    AMINO_ACID.get_or_init(Partition::compute)
}

/// Names the standard partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GroupKind {
    /// [`SymmetryGroups`].
    Symmetry,
    /// [`MantraGroups`].
    Mantra,
    /// [`BalanceGroups`].
    Balance,
    /// [`TransitionGroups`].
    Transition,
    /// [`AminoAcidGroups`].
    Amino,
}

impl GroupKind {
    /// Every kind.
    pub const ALL: [Self; 5] = [
        Self::Symmetry,
        Self::Mantra,
        Self::Balance,
        Self::Transition,
        Self::Amino,
    ];

    /// Short command-line name.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Symmetry => "symmetry",
            Self::Mantra => "mantra",
            Self::Balance => "balance",
            Self::Transition => "transition",
            Self::Amino => "amino",
        }
    }

    /// Class labels with their members, without naming the class type.
    pub fn labelled(self) -> Vec<(&'static str, HexagramSet)> {
        fn collect<C: Class>(p: &Partition<C>) -> Vec<(&'static str, HexagramSet)> {
            p.iter().map(|(c, set)| (c.label(), set)).collect()
        }
        match self {
            Self::Symmetry => collect(symmetry_groups()),
            Self::Mantra => collect(mantra_groups()),
            Self::Balance => collect(balance_groups()),
            Self::Transition => collect(transition_groups()),
            Self::Amino => collect(amino_acid_groups()),
        }
    }

    /// Runs [`Partition::verify`] on the partition of this kind.
    pub fn verify(self) -> bool {
        match self {
            Self::Symmetry => symmetry_groups().verify(),
            Self::Mantra => mantra_groups().verify(),
            Self::Balance => balance_groups().verify(),
            Self::Transition => transition_groups().verify(),
            Self::Amino => amino_acid_groups().verify(),
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for GroupKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownGroup(s.to_string()))
    }
}
