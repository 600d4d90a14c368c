//! Genetic code validator.
//!
//! Checks the codon bijection and the degeneracy of the standard code:
//! 3 stop codons, 6 codons each for leucine, serine and arginine, 2 for
//! cysteine, 1 each for methionine and tryptophan.

use tracing::debug;
use yijing::classify::amino_acid_groups;
use yijing::codon::{AminoAcid, Codon};
use yijing::Hexagram;

use crate::report::{check_count, ConformanceReport, TestResult};

const VALIDATOR: &str = "genetic-code";

const EXPECTED_DEGENERACY: [(AminoAcid, usize); 7] = [
    (AminoAcid::Stop, 3),
    (AminoAcid::Leucine, 6),
    (AminoAcid::Serine, 6),
    (AminoAcid::Arginine, 6),
    (AminoAcid::Cysteine, 2),
    (AminoAcid::Methionine, 1),
    (AminoAcid::Tryptophan, 1),
];

/// Known codon assignments spot-checked against the table.
const SPOT_CHECKS: [(&str, AminoAcid); 5] = [
    ("ATG", AminoAcid::Methionine),
    ("TGC", AminoAcid::Cysteine),
    ("TGG", AminoAcid::Tryptophan),
    ("TGA", AminoAcid::Stop),
    ("GCT", AminoAcid::Alanine),
];

/// Validates the codon mapping.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let broken: Vec<String> = Hexagram::all()
        .filter_map(|h| {
            let codon = Codon::from_hexagram(h);
            let reparsed = codon.to_string().parse::<Codon>().ok();
            (codon.to_hexagram() != h || reparsed != Some(codon))
                .then(|| format!("{} -> {} does not round-trip", h.value(), codon))
        })
        .collect();
    if broken.is_empty() {
        report.push(TestResult::pass(VALIDATOR, "All 64 codons round-trip"));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Codon mapping is not a bijection",
            broken,
        ));
    }

    let groups = amino_acid_groups();
    for (aa, expected) in EXPECTED_DEGENERACY {
        check_count(&mut report, VALIDATOR, aa.name(), groups.get(aa).len(), expected);
    }

    for (text, expected) in SPOT_CHECKS {
        match text.parse::<Codon>() {
            Ok(codon) if codon.amino_acid() == expected => report.push(TestResult::pass(
                VALIDATOR,
                format!("{text} encodes {expected}"),
            )),
            Ok(codon) => report.push(TestResult::fail(
                VALIDATOR,
                format!("{text} encodes {}, expected {expected}", codon.amino_acid()),
            )),
            Err(e) => report.push(TestResult::fail(VALIDATOR, format!("{text}: {e}"))),
        }
    }

    debug!(results = report.results.len(), "genetic code validation finished");
    report
}
