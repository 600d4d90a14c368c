//! Sequence validator.
//!
//! Checks that each built-in ordering is a bijection, that the bagua
//! orderings agree with checked generation, and that the King Wen order
//! keeps its traditional pairing and glyph assignment.

use anyhow::{Context, Result};
use tracing::debug;
use yijing::sequence::{bagua, invert_sequence, SequenceKind, EIGHT_PALACES, KING_WEN};
use yijing::{Hexagram, HexagramSet};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "sequences";

/// Validates every ordering.
///
/// # Errors
///
/// Returns an error if a built-in bagua order is rejected by
/// `generate_hexagrams`.
pub fn validate() -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    for kind in SequenceKind::ALL {
        validate_bijection(&mut report, kind);
    }
    validate_bagua(&mut report)?;
    validate_king_wen_pairs(&mut report);
    validate_glyphs(&mut report);
    validate_palaces(&mut report);

    debug!(results = report.results.len(), "sequence validation finished");
    Ok(report)
}

fn validate_bijection(report: &mut ConformanceReport, kind: SequenceKind) {
    let seq = kind.sequence();
    match invert_sequence(seq.forward()) {
        Ok(inverse) if &inverse == seq.inverse() => report.push(TestResult::pass(
            VALIDATOR,
            format!("{kind} is a bijection with a consistent inverse"),
        )),
        Ok(_) => report.push(TestResult::fail(
            VALIDATOR,
            format!("{kind} stores an inverse that does not match its forward table"),
        )),
        Err(e) => report.push(TestResult::fail(
            VALIDATOR,
            format!("{kind} is not a permutation: {e}"),
        )),
    }
}

fn validate_bagua(report: &mut ConformanceReport) -> Result<()> {
    let cases = [
        (SequenceKind::EarlyHeaven, bagua::EARLY_HEAVEN_ORDER),
        (SequenceKind::LaterHeaven, bagua::LATER_HEAVEN_ORDER),
        (SequenceKind::KingWenBagua, bagua::KING_WEN_ORDER),
    ];
    for (kind, order) in cases {
        let generated = bagua::generate_hexagrams(&order)
            .with_context(|| format!("generating the {kind} ordering"))?;
        let stored: Vec<Hexagram> = kind.sequence().iter().collect();
        if stored == generated {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("{kind} matches the product of its trigram order"),
            ));
        } else {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("{kind} differs from the product of its trigram order"),
            ));
        }
    }
    Ok(())
}

/// Each odd-numbered figure is followed by its reverse, or by its inverse
/// when it reads the same upside down.
fn validate_king_wen_pairs(report: &mut ConformanceReport) {
    let broken: Vec<String> = KING_WEN
        .iter()
        .collect::<Vec<_>>()
        .chunks(2)
        .filter_map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            let partner = if a.reverse() == a { a.invert() } else { a.reverse() };
            (b != partner).then(|| {
                format!(
                    "King Wen {} and {} are not a reverse or inverse pair",
                    a.king_wen_number(),
                    b.king_wen_number()
                )
            })
        })
        .collect();

    if broken.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "King Wen pairs are reverses, or inverses for symmetric figures",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "King Wen pairing rule broken",
            broken,
        ));
    }
}

fn validate_glyphs(report: &mut ConformanceReport) {
    let glyphs: std::collections::BTreeSet<char> = Hexagram::all().map(|h| h.symbol()).collect();
    let in_block = glyphs.iter().all(|&c| ('\u{4DC0}'..='\u{4DFF}').contains(&c));
    if glyphs.len() == 64 && in_block {
        report.push(TestResult::pass(
            VALIDATOR,
            "64 distinct glyphs in the Yijing Hexagram Symbols block",
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{} distinct glyphs, all in block: {}", glyphs.len(), in_block),
        ));
    }
}

fn validate_palaces(report: &mut ConformanceReport) {
    let mut heads = HexagramSet::EMPTY;
    for block in 0..8 {
        if let Some(head) = EIGHT_PALACES.hexagram_at(block * 8) {
            heads = heads.insert(head);
        }
    }
    let doubled = HexagramSet::from_predicate(|h| h.upper() == h.lower());
    if heads == doubled {
        report.push(TestResult::pass(
            VALIDATOR,
            "Each Eight Palaces block opens with a doubled trigram",
        ));
    } else {
        report.push(TestResult::warn(
            VALIDATOR,
            format!("Eight Palaces blocks open with {heads:?}"),
        ));
    }
}
