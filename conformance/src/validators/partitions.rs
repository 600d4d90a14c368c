//! Classification partition validator.
//!
//! Every standard partition must be a disjoint cover of the 64 hexagrams,
//! and the populations are fixed:
//! - symmetry: 2 / 6 / 12 / 2 / 6 / 12 / 24
//! - mantra: 4 / 12 / 48
//! - balance: 20 / 44
//! - transition: 14 / 12 / 13 / 12 / 13

use tracing::debug;
use yijing::classify::{
    balance_groups, mantra_groups, symmetry_groups, transition_groups, Class, GroupKind,
    Partition,
};
use yijing::{Balance, Mantra, Symmetry, Transition};

use crate::report::{check_count, ConformanceReport, TestResult};

const VALIDATOR: &str = "partitions";

const EXPECTED_SYMMETRY: [(Symmetry, usize); 7] = [
    (Symmetry::Breath, 2),
    (Symmetry::Mother, 6),
    (Symmetry::Direction, 12),
    (Symmetry::Beginning, 2),
    (Symmetry::Principle, 6),
    (Symmetry::Titan, 12),
    (Symmetry::Gigante, 24),
];

const EXPECTED_MANTRA: [(Mantra, usize); 3] =
    [(Mantra::Cosmic, 4), (Mantra::Karmic, 12), (Mantra::Atomic, 48)];

const EXPECTED_BALANCE: [(Balance, usize); 2] = [(Balance::Balanced, 20), (Balance::Unbalanced, 44)];

const EXPECTED_TRANSITION: [(Transition, usize); 5] = [
    (Transition::Neutral, 14),
    (Transition::Creates, 12),
    (Transition::Destroys, 13),
    (Transition::Weakens, 12),
    (Transition::Insults, 13),
];

/// Validates the standard partitions.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    for kind in GroupKind::ALL {
        if kind.verify() {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("{kind} groups are a disjoint cover of all 64 hexagrams"),
            ));
        } else {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("{kind} groups overlap or leave hexagrams unclassified"),
            ));
        }
    }

    check_populations(&mut report, symmetry_groups(), &EXPECTED_SYMMETRY);
    check_populations(&mut report, mantra_groups(), &EXPECTED_MANTRA);
    check_populations(&mut report, balance_groups(), &EXPECTED_BALANCE);
    check_populations(&mut report, transition_groups(), &EXPECTED_TRANSITION);

    debug!(results = report.results.len(), "partition validation finished");
    report
}

fn check_populations<C: Class>(
    report: &mut ConformanceReport,
    partition: &Partition<C>,
    expected: &[(C, usize)],
) {
    for &(class, count) in expected {
        check_count(report, VALIDATOR, class.label(), partition.get(class).len(), count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_pass() {
        let report = validate();
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "partition failures: {:#?}", failures);
        assert_eq!(report.results.len(), 5 + 7 + 3 + 2 + 5);
    }

    #[test]
    fn wrong_expectation_fails() {
        let mut report = ConformanceReport::new();
        check_populations(&mut report, mantra_groups(), &[(Mantra::Karmic, 13)]);
        assert_eq!(report.failure_count(), 1);
    }
}
