//! Exhaustive classification and sequence tests.
//!
//! The hexagram space is small enough to check every value, so these tests
//! walk all 64 hexagrams instead of sampling.

use yijing::classify::{
    self, amino_acid_groups, mantra_groups, relation, symmetry, symmetry_groups,
    transition_groups, Class, GroupKind, Mantra, Relation, Symmetry,
};
use yijing::sequence::{bagua, king_wen, SequenceKind, KING_WEN};
use yijing::{AminoAcid, Element, Hexagram, HexagramSet, Sixiang, Transition, Trigram};

// =============================================================================
// Partitions
// =============================================================================

#[test]
fn symmetry_partition_is_complete_and_exclusive() {
    let groups = symmetry_groups();
    assert!(groups.verify());
    let expected = [
        (Symmetry::Breath, 2),
        (Symmetry::Mother, 6),
        (Symmetry::Direction, 12),
        (Symmetry::Beginning, 2),
        (Symmetry::Principle, 6),
        (Symmetry::Titan, 12),
        (Symmetry::Gigante, 24),
    ];
    assert_eq!(groups.counts(), expected.to_vec());

    let mut union = HexagramSet::EMPTY;
    for (_, set) in groups.iter() {
        assert!(union.is_disjoint(&set));
        union = union.union(&set);
    }
    assert_eq!(union, HexagramSet::FULL);
}

#[test]
fn symmetry_classes_are_closed_under_invert() {
    // Every predicate is phrased in terms that invert preserves.
    for h in Hexagram::all() {
        assert_eq!(symmetry(h), symmetry(h.invert()), "{h:?}");
    }
}

#[test]
fn gigante_is_the_remainder() {
    let g = symmetry_groups().get(Symmetry::Gigante);
    for h in g {
        assert!(!classify::is_balanced(h));
        assert!(!classify::is_foundation(h));
        assert!(!matches!(h.line_count(), 1 | 5));
    }
}

#[test]
fn mantra_matches_depth() {
    let groups = mantra_groups();
    for (class, set) in groups.iter() {
        for h in set {
            let depth = match class {
                Mantra::Cosmic => 0,
                Mantra::Karmic => 1,
                Mantra::Atomic => 2,
            };
            assert_eq!(h.depth(), depth);
        }
    }
}

#[test]
fn every_group_kind_lists_sixty_four() {
    for kind in GroupKind::ALL {
        let labelled = kind.labelled();
        let total: usize = labelled.iter().map(|(_, set)| set.len()).sum();
        assert_eq!(total, 64, "{kind}");
    }
}

// =============================================================================
// Elements
// =============================================================================

#[test]
fn transition_counts() {
    let counts: Vec<(Transition, usize)> = transition_groups().counts();
    assert_eq!(
        counts,
        vec![
            (Transition::Neutral, 14),
            (Transition::Creates, 12),
            (Transition::Destroys, 13),
            (Transition::Weakens, 12),
            (Transition::Insults, 13),
        ]
    );
}

#[test]
fn element_cycles_close() {
    for e in Element::ALL {
        let mut x = e;
        for _ in 0..5 {
            x = x.creates();
        }
        assert_eq!(x, e);
        assert_eq!(e.creates().transition_to(e), Transition::Weakens);
        assert_eq!(e.destroys().transition_to(e), Transition::Insults);
    }
}

#[test]
fn sixiang_of_roots() {
    let roots: Vec<(u8, Sixiang)> = yijing::ROOTS
        .iter()
        .map(|&r| (r, Hexagram::new(r).sixiang()))
        .collect();
    assert_eq!(
        roots,
        vec![
            (0, Sixiang::North),
            (21, Sixiang::East),
            (42, Sixiang::West),
            (63, Sixiang::South),
        ]
    );
}

// =============================================================================
// Relations
// =============================================================================

#[test]
fn relation_finds_each_transform() {
    for a in Hexagram::all() {
        let r = relation(a, a.center());
        assert_eq!(r, Relation::Center);

        let o = relation(a, a.opposite());
        assert!(matches!(o, Relation::Center | Relation::Opposite), "{a:?}");

        let inv = relation(a, a.invert());
        assert_ne!(inv, Relation::Unrelated);
    }
}

#[test]
fn relation_tags_are_exhaustive() {
    let mut seen = std::collections::HashSet::new();
    for a in Hexagram::all() {
        for b in Hexagram::all() {
            seen.insert(relation(a, b).code());
        }
    }
    let mut codes: Vec<char> = seen.into_iter().collect();
    codes.sort_unstable();
    assert_eq!(codes, vec!['?', 'A', 'C', 'I', 'M', 'O', 'S']);
}

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn king_wen_numbers_are_a_bijection() {
    let mut numbers: Vec<u8> = Hexagram::all().map(|h| h.king_wen_number()).collect();
    numbers.sort_unstable();
    assert_eq!(numbers, (1..=64).collect::<Vec<u8>>());
    for (i, &v) in KING_WEN.forward().iter().enumerate() {
        assert_eq!(KING_WEN.inverse()[v as usize] as usize, i);
    }
}

#[test]
fn king_wen_number_uses_inverse_table() {
    // Zhun (3) is value 34; the forward table at index 34 is a different figure.
    let zhun = Hexagram::new(34);
    assert_eq!(zhun.king_wen_number(), 3);
    assert_ne!(KING_WEN.forward()[34], 34);
    assert_eq!(king_wen::by_number(3), Ok(zhun));
}

#[test]
fn every_sequence_kind_visits_all() {
    for kind in SequenceKind::ALL {
        let set: HexagramSet = kind.sequence().iter().collect();
        assert_eq!(set, HexagramSet::FULL, "{kind}");
    }
}

#[test]
fn bagua_sequences_match_generation() {
    let cases = [
        (SequenceKind::EarlyHeaven, bagua::EARLY_HEAVEN_ORDER),
        (SequenceKind::LaterHeaven, bagua::LATER_HEAVEN_ORDER),
        (SequenceKind::KingWenBagua, bagua::KING_WEN_ORDER),
    ];
    for (kind, order) in cases {
        let generated = bagua::generate_hexagrams(&order).unwrap();
        let stored: Vec<Hexagram> = kind.sequence().iter().collect();
        assert_eq!(stored, generated.to_vec(), "{kind}");
    }
}

#[test]
fn early_heaven_starts_with_heaven_and_ends_with_earth() {
    let seq = SequenceKind::EarlyHeaven.sequence();
    assert_eq!(seq.hexagram_at(0), Some(Hexagram::HEAVEN));
    assert_eq!(seq.hexagram_at(63), Some(Hexagram::EARTH));
    assert_eq!(
        seq.hexagram_at(9).map(|h| (h.upper(), h.lower())),
        Some((Trigram::DUI, Trigram::DUI))
    );
}

// =============================================================================
// Genetic code
// =============================================================================

#[test]
fn amino_acid_groups_follow_standard_code() {
    let groups = amino_acid_groups();
    assert!(groups.verify());
    let sixfold: Vec<AminoAcid> = groups
        .iter()
        .filter(|(_, set)| set.len() == 6)
        .map(|(aa, _)| aa)
        .collect();
    assert_eq!(
        sixfold,
        vec![AminoAcid::Leucine, AminoAcid::Arginine, AminoAcid::Serine]
    );
    let single: Vec<AminoAcid> = groups
        .iter()
        .filter(|(_, set)| set.len() == 1)
        .map(|(aa, _)| aa)
        .collect();
    assert_eq!(single, vec![AminoAcid::Methionine, AminoAcid::Tryptophan]);
}

#[test]
fn class_labels_are_unique() {
    fn labels<C: Class>() -> Vec<&'static str> {
        C::ALL.iter().map(|c| c.label()).collect()
    }
    for list in [
        labels::<Symmetry>(),
        labels::<Mantra>(),
        labels::<Transition>(),
        labels::<AminoAcid>(),
    ] {
        let unique: std::collections::HashSet<_> = list.iter().collect();
        assert_eq!(unique.len(), list.len());
    }
}
